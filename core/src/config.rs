//! Client configuration: service address and optional credentials.
//!
//! # Design
//! `Config` is a plain struct with public fields; nothing here talks to the
//! network. The named constructors cover the four shapes callers actually
//! use, and `from_args` keeps the original positional convenience (a slice
//! standing in for variadic arguments) for callers that assemble the three
//! strings dynamically, e.g. straight from `std::env::args`.

use crate::error::ConfigError;

/// Default URL for refheap. This is the official site.
pub const REFHEAP_URL: &str = "https://www.refheap.com/api";

/// Where requests go and who they are sent as.
///
/// An empty `user` means requests are sent unauthenticated, regardless of
/// what `token` holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the refheap API.
    pub url: String,
    /// Username to authenticate with.
    pub user: String,
    /// API token to authenticate with.
    pub token: String,
}

impl Config {
    /// Anonymous configuration against the official refheap API.
    pub fn new() -> Self {
        Self::full(REFHEAP_URL, "", "")
    }

    /// Anonymous configuration against a custom instance, e.g. a local
    /// refheap deployment.
    pub fn with_url(url: &str) -> Self {
        Self::full(url, "", "")
    }

    /// Authenticated configuration against the official refheap API.
    pub fn with_credentials(user: &str, token: &str) -> Self {
        Self::full(REFHEAP_URL, user, token)
    }

    /// Configuration with every field spelled out.
    pub fn full(url: &str, user: &str, token: &str) -> Self {
        Self {
            url: url.to_string(),
            user: user.to_string(),
            token: token.to_string(),
        }
    }

    /// Positional convenience constructor.
    ///
    /// Dispatches on the number of arguments:
    /// - 0: defaults (official URL, anonymous)
    /// - 1: custom URL
    /// - 2: username and token, official URL
    /// - 3: URL, username and token
    ///
    /// Any other count is refused with a [`ConfigError`] carrying the
    /// offending arguments.
    pub fn from_args(args: &[&str]) -> Result<Self, ConfigError> {
        match args {
            [] => Ok(Self::new()),
            [url] => Ok(Self::with_url(url)),
            [user, token] => Ok(Self::with_credentials(user, token)),
            [url, user, token] => Ok(Self::full(url, user, token)),
            _ => Err(ConfigError {
                args: args.iter().map(|arg| arg.to_string()).collect(),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
