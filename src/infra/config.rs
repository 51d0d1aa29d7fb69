//! Centralized configuration (environment variables + defaults).

/// Address the API server binds to. Defaults to port 5000 on all
/// interfaces.
pub fn listen_addr() -> String {
    std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string())
}
