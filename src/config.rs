//! Host configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read once at startup. The bind address drives the listener, and the
//! contact links are handed to every SSR render, so a bad link value fails
//! startup instead of shipping a broken page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use site::config::SiteLinks;
use url::{Host, Url};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {value:?}")]
    InvalidPort { value: String },

    #[error("invalid HOST: {value:?}")]
    InvalidHost { value: String },

    #[error("{var} must be an http(s) URL, got {value:?}: {reason}")]
    InvalidUrl { var: &'static str, value: String, reason: UrlRejection },

    #[error("invalid PORTFOLIO_EMAIL: {value:?}")]
    InvalidEmail { value: String },
}

/// Why a link URL was refused.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlRejection {
    #[error("{0}")]
    Parse(#[from] url::ParseError),

    #[error("scheme {0:?} is not http or https")]
    Scheme(String),

    #[error("host is missing or not a valid domain")]
    Host,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub links: SiteLinks,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default `3000`
    /// - `PORTFOLIO_GITHUB_URL`, `PORTFOLIO_LINKEDIN_URL`: `http(s)://` URLs
    /// - `PORTFOLIO_EMAIL`: bare address used for `mailto:` links
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for any value that is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable lookup.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for any value that is present but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };
        let host = match get("HOST") {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost { value: raw })?,
            None => DEFAULT_HOST,
        };

        let defaults = SiteLinks::default();
        let github_url = parse_url("PORTFOLIO_GITHUB_URL", get("PORTFOLIO_GITHUB_URL"), defaults.github_url)?;
        let linkedin_url = parse_url("PORTFOLIO_LINKEDIN_URL", get("PORTFOLIO_LINKEDIN_URL"), defaults.linkedin_url)?;
        let email = parse_email(get("PORTFOLIO_EMAIL"), defaults.email)?;

        Ok(Self { host, port, links: SiteLinks { github_url, linkedin_url, email } })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_url(var: &'static str, raw: Option<String>, default: String) -> Result<String, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    match check_link(&value) {
        Ok(()) => Ok(value),
        Err(reason) => Err(ConfigError::InvalidUrl { var, value, reason }),
    }
}

/// Accept absolute `http(s)` URLs whose host is an IP or a plain ASCII
/// domain (IDNs arrive here already punycoded).
fn check_link(raw: &str) -> Result<(), UrlRejection> {
    let url = Url::parse(raw)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(UrlRejection::Scheme(url.scheme().to_owned()));
    }
    match url.host() {
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => Ok(()),
        Some(Host::Domain(domain)) if is_plain_domain(domain) => Ok(()),
        _ => Err(UrlRejection::Host),
    }
}

fn is_plain_domain(domain: &str) -> bool {
    !domain.is_empty()
        && domain
            .split('.')
            .all(|label| !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'))
}

fn parse_email(raw: Option<String>, default: String) -> Result<String, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !value.contains(char::is_whitespace)
        }
        None => false,
    };
    if valid { Ok(value) } else { Err(ConfigError::InvalidEmail { value }) }
}
