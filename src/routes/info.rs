//! Application, host, and request introspection endpoint.

use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{header::HOST, HeaderMap, Method, Uri},
    Json,
};
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;
use crate::sysinfo::SystemInfo;

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub application: ApplicationInfo,
    pub system: SystemInfo,
    pub request: RequestInfo,
}

#[derive(Debug, Serialize)]
pub struct ApplicationInfo {
    pub name: String,
    pub version: String,
    pub environment: String,
}

/// Request metadata echoed back to the caller.
///
/// Headers are reproduced verbatim, so anything a proxy injects
/// (cookies, internal routing headers) becomes visible in the response
/// body. Acceptable for a learning environment only.
#[derive(Debug, Serialize)]
pub struct RequestInfo {
    pub method: String,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub remote_addr: String,
}

/// Info handler merging application config, a fresh system snapshot,
/// and the incoming request's metadata.
#[instrument(name = "info::info", skip_all)]
pub async fn info(
    State(state): State<AppState>,
    ConnectInfo(remote_addr): ConnectInfo<SocketAddr>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Json<InfoResponse> {
    let header_map: BTreeMap<String, String> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.to_str().unwrap_or("<non-utf8>").to_string(),
            )
        })
        .collect();

    // Reconstruct the absolute URL from the Host header; the URI alone
    // only carries the path once it reaches the handler.
    let url = match headers.get(HOST).and_then(|h| h.to_str().ok()) {
        Some(host) => format!("http://{}{}", host, uri),
        None => uri.to_string(),
    };

    Json(InfoResponse {
        application: ApplicationInfo {
            name: state.config.app_name.clone(),
            version: state.config.app_version.clone(),
            environment: state.config.environment.clone(),
        },
        system: SystemInfo::collect(&state.config.environment),
        request: RequestInfo {
            method: method.to_string(),
            url,
            headers: header_map,
            remote_addr: remote_addr.to_string(),
        },
    })
}
