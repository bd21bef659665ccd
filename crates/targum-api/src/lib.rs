//! Clients for the backend services.
//!
//! Every public call is fail-soft: transport errors, non-2xx statuses and
//! malformed bodies are logged and turned into an empty (or `false`) result.
//! Callers treat an empty result as "service unavailable".

mod ai;
mod client;
mod remote;

#[cfg(test)]
mod test_server;

pub use ai::{AiClient, StructureAnalysis, TextStructure};
pub use client::{ApiClient, RemoteTranslation};
pub use remote::RemoteTranslator;

use std::time::Duration;

fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to build HTTP client with timeout, using defaults: {e}");
            reqwest::Client::new()
        })
}
