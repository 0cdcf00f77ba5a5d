//! Smoke-test client for a running podling instance.
//!
//! Issues a fixed set of HTTP checks against the configured base URL
//! and reports pass/fail per endpoint. Exits non-zero if any check
//! fails. This is an external client; it needs nothing from the
//! service beyond plain HTTP on the configured host and port.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "smoke", about = "Smoke-test a running podling instance", long_about = None)]
struct Cli {
    /// Base URL of the service under test
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = 5)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Failed to build HTTP client: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let checks = vec![
        ("main page", check_main_page(&client, &cli.url).await),
        ("health", check_health(&client, &cli.url).await),
        ("api info", check_api_info(&client, &cli.url).await),
        ("echo", check_echo(&client, &cli.url).await),
    ];

    let mut passed = 0;
    for (name, result) in &checks {
        match result {
            Ok(()) => {
                println!("PASS {}", name);
                passed += 1;
            }
            Err(reason) => println!("FAIL {}: {}", name, reason),
        }
    }

    println!("{}/{} checks passed", passed, checks.len());
    if passed == checks.len() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn check_main_page(client: &reqwest::Client, base_url: &str) -> Result<(), String> {
    let response = client
        .get(base_url)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    expect_status(response.status(), 200)
}

async fn check_health(client: &reqwest::Client, base_url: &str) -> Result<(), String> {
    let response = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .map_err(|err| err.to_string())?;
    expect_status(response.status(), 200)?;

    let body: Value = response.json().await.map_err(|err| err.to_string())?;
    if body["status"] != "healthy" {
        return Err(format!("unexpected status field: {}", body["status"]));
    }
    Ok(())
}

async fn check_api_info(client: &reqwest::Client, base_url: &str) -> Result<(), String> {
    let response = client
        .get(format!("{}/api/info", base_url))
        .send()
        .await
        .map_err(|err| err.to_string())?;
    expect_status(response.status(), 200)?;

    let body: Value = response.json().await.map_err(|err| err.to_string())?;
    if !body["application"]["name"].is_string() {
        return Err("application.name missing from response".to_string());
    }
    Ok(())
}

async fn check_echo(client: &reqwest::Client, base_url: &str) -> Result<(), String> {
    let payload = json!({"message": "Hello from the smoke test", "count": 3});
    let response = client
        .post(format!("{}/api/echo", base_url))
        .json(&payload)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    expect_status(response.status(), 200)?;

    let body: Value = response.json().await.map_err(|err| err.to_string())?;
    if body["received_data"] != payload {
        return Err("echo did not round-trip the payload".to_string());
    }
    Ok(())
}

fn expect_status(status: reqwest::StatusCode, want: u16) -> Result<(), String> {
    if status.as_u16() == want {
        Ok(())
    } else {
        Err(format!("expected status {}, got {}", want, status))
    }
}
