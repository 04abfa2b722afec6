//! Runtime configuration from the environment.

use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    /// Base URL of the remote note store, e.g. "http://localhost:8080/api".
    pub const NOTES_API_URL: &str = "NOTES_API_URL";
}

/// Default values
pub mod defaults {
    pub const API_URL: &str = "http://127.0.0.1:8080/api";
}

/// Base URL of the note store; falls back to the local default.
pub fn api_url() -> String {
    env::var(env_vars::NOTES_API_URL).unwrap_or_else(|_| defaults::API_URL.to_string())
}
