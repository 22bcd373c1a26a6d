//! Push-messaging token acquisition

use std::fmt;

use crate::error::{Error, Result};
use crate::util::{env_var_trimmed, normalize_text_option};

/// Environment variable read by [`EnvTokenProvider`]
pub const FCM_TOKEN_ENV: &str = "SPC_FCM_TOKEN";

/// Source of the opaque push token (async, single-shot)
#[allow(async_fn_in_trait)]
pub trait TokenProvider {
    /// Fetch the current token.
    ///
    /// Failures are reported as [`Error::TokenUnavailable`].
    async fn fetch_token(&self) -> Result<String>;
}

impl<T: TokenProvider + ?Sized> TokenProvider for &T {
    async fn fetch_token(&self) -> Result<String> {
        (**self).fetch_token().await
    }
}

/// Token handed over by the host, e.g. from the messaging SDK callback.
#[derive(Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: normalize_text_option(token),
        }
    }
}

impl TokenProvider for StaticTokenProvider {
    async fn fetch_token(&self) -> Result<String> {
        self.token
            .clone()
            .ok_or_else(|| Error::TokenUnavailable("no push token supplied".to_string()))
    }
}

impl fmt::Debug for StaticTokenProvider {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("StaticTokenProvider")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Reads the token from an environment variable each time it is fetched.
#[derive(Debug, Clone, Copy)]
pub struct EnvTokenProvider {
    var: &'static str,
}

impl EnvTokenProvider {
    /// Read from `var` instead of `SPC_FCM_TOKEN`
    pub const fn with_var(var: &'static str) -> Self {
        Self { var }
    }
}

impl Default for EnvTokenProvider {
    fn default() -> Self {
        Self::with_var(FCM_TOKEN_ENV)
    }
}

impl TokenProvider for EnvTokenProvider {
    async fn fetch_token(&self) -> Result<String> {
        let var = self.var;
        env_var_trimmed(var).ok_or_else(|| Error::TokenUnavailable(format!("{var} is not set")))
    }
}
