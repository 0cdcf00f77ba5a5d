//! podling: a tiny web service for learning container orchestration.
//!
//! Exposes a home page, health check, system info, echo, and status
//! endpoints backed by environment-variable configuration. A companion
//! `smoke` binary exercises a running instance over HTTP.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod sysinfo;
pub mod templates;
