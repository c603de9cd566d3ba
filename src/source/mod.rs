//! Repository URL resolution (https, scp-style and ssh:// notations)

use crate::error::ConfigError;
use std::fmt;

/// Host, owner and name of a hosted repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    /// Host name, e.g. `github.com`
    pub host: String,
    /// Owning user or organization
    pub owner: String,
    /// Repository name without `.git`
    pub name: String,
}

impl RepositoryRef {
    /// Parse a repository URL in one of the supported notations:
    ///
    /// - `https://<host>/<owner>/<name>[.git]`
    /// - `git@<host>:<owner>/<name>[.git]`
    /// - `ssh://git@<host>:<port>/<owner>/<name>[.git]`
    ///
    /// Only the first two path segments are read; anything after them is ignored.
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidRepositoryUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = url.strip_suffix(".git").unwrap_or(url);

        let (host, path) = if let Some(rest) = trimmed.strip_prefix("https://") {
            rest.split_once('/')
                .ok_or_else(|| invalid("expected '/' after the host"))?
        } else if trimmed.starts_with("git@") {
            let (_, rest) = trimmed
                .split_once('@')
                .ok_or_else(|| invalid("expected '@' before the host"))?;
            rest.split_once(':')
                .ok_or_else(|| invalid("expected ':' after the host"))?
        } else if trimmed.starts_with("ssh://") {
            let (_, rest) = trimmed
                .split_once('@')
                .ok_or_else(|| invalid("expected '@' before the host"))?;
            let (host, _) = rest
                .split_once(':')
                .ok_or_else(|| invalid("expected ':' before the port"))?;
            let (_, path) = rest
                .split_once('/')
                .ok_or_else(|| invalid("expected '/' after the port"))?;
            (host, path)
        } else {
            return Err(invalid(
                "expected an https://, git@ or ssh:// repository URL",
            ));
        };

        let mut segments = path.split('/');
        let owner = segments.next().unwrap_or_default();
        let name = segments
            .next()
            .ok_or_else(|| invalid("expected '<owner>/<name>' path"))?;

        if host.is_empty() {
            return Err(invalid("host is empty"));
        }
        if owner.is_empty() || name.is_empty() {
            return Err(invalid("owner and name must be non-empty"));
        }

        Ok(Self {
            host: host.to_string(),
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.name)
    }
}
