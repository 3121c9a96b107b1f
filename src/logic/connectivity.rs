//! Connectivity Probe
//!
//! Best-effort, bounded-time reachability check against a well-known
//! endpoint. One attempt per call, no retries; every failure mode (timeout,
//! DNS, refused connection) reads as "unreachable".

use std::time::Duration;

use async_trait::async_trait;

/// Reachability check used to short-circuit remote narrative calls.
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    async fn is_reachable(&self) -> bool;
}

/// HTTP GET against a fixed external endpoint.
pub struct HttpProbe {
    http_client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpProbe {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            url,
            timeout,
        }
    }
}

#[async_trait]
impl ConnectivityProbe for HttpProbe {
    async fn is_reachable(&self) -> bool {
        // Any response at all counts as reachable; the status is irrelevant.
        self.http_client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .is_ok()
    }
}
