//! API credentials and the default headers that carry them

use crate::error::ConfigError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use std::fmt;

/// Credentials for the hosting platform API
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// HTTP Basic with a username and an API token as password
    Basic {
        /// Account name
        username: String,
        /// API token
        token: String,
    },
    /// `Authorization: Bearer <token>`
    Bearer {
        /// API token
        token: String,
    },
}

impl Credentials {
    /// Basic auth when a username is given, bearer token otherwise
    pub fn new(username: Option<String>, token: String) -> Self {
        match username {
            Some(username) if !username.trim().is_empty() => Self::Basic { username, token },
            _ => Self::Bearer { token },
        }
    }

    /// Value of the `Authorization` header
    pub fn authorization(&self) -> String {
        match self {
            Self::Basic { username, token } => {
                format!("Basic {}", STANDARD.encode(format!("{username}:{token}")))
            }
            Self::Bearer { token } => format!("Bearer {token}"),
        }
    }

    /// Short description safe to print
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::Basic { .. } => "basic",
            Self::Bearer { .. } => "bearer",
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("token", &"***")
                .finish(),
            Self::Bearer { .. } => f.debug_struct("Bearer").field("token", &"***").finish(),
        }
    }
}

/// Headers sent with every API request
pub(crate) fn default_headers(credentials: &Credentials) -> Result<HeaderMap, ConfigError> {
    let mut authorization =
        HeaderValue::from_str(&credentials.authorization()).map_err(|e| {
            ConfigError::HttpClient {
                reason: format!("credentials are not a valid header value: {e}"),
            }
        })?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    Ok(headers)
}
