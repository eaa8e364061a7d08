//! Shared HTTP Client Module
//!
//! Provides a global, lazy-initialized HTTP client with connection pooling
//! for Gemini API calls, so every audit reuses the same TLS session and
//! TCP connections instead of paying builder and handshake overhead per
//! request.

use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

/// Global HTTP client for Gemini API calls
///
/// Configuration tuned for one long-running analysis request at a time:
/// - 120s timeout (document audits can take a while)
/// - small idle pool, 90s idle timeout
static GEMINI_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .tcp_nodelay(true)
        .build()
        .expect("Failed to create Gemini HTTP client")
});

/// Get the global Gemini HTTP client
///
/// The client is created on first access and reused for all subsequent
/// calls.
#[inline]
pub fn gemini_client() -> &'static Client {
    &GEMINI_CLIENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_is_same_instance() {
        let client1 = gemini_client();
        let client2 = gemini_client();
        assert!(std::ptr::eq(client1, client2));
    }
}
