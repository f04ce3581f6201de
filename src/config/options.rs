// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// Settings for the HTTP collaborator and the site it talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    /// Scheme + host, no trailing slash.
    pub origin: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            origin: s!(ORIGIN),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl ClientOptions {
    pub fn with_origin(mut self, origin: &str) -> Self {
        self.origin = s!(origin.trim_end_matches('/'));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, ua: &str) -> Self {
        self.user_agent = s!(ua);
        self
    }
}
