//! Device endpoint table and the validated base URL requests are sent to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// HTTP method used by an [`Endpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// One of the five HTTP endpoints exposed by the lamp device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /status`: general statistics.
    Status,
    /// `GET /logs`: activation history.
    Logs,
    /// `GET /distance`: current sensor reading.
    Distance,
    /// `POST /on`: turn the lamp on manually.
    On,
    /// `POST /off`: turn the lamp off manually.
    Off,
}

impl Endpoint {
    pub const ALL: [Self; 5] = [Self::Status, Self::Logs, Self::Distance, Self::On, Self::Off];

    /// Path relative to the device base URL.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Status => "/status",
            Self::Logs => "/logs",
            Self::Distance => "/distance",
            Self::On => "/on",
            Self::Off => "/off",
        }
    }

    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Status | Self::Logs | Self::Distance => Method::Get,
            Self::On | Self::Off => Method::Post,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method().as_str(), self.path())
    }
}

/// Base URL of a lamp device, e.g. `http://10.37.0.178`.
///
/// Always carries an `http://` or `https://` scheme and never ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Validate and normalise a base URL.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the value is empty, uses another
    /// scheme, or has no host.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::EmptyBaseUrl);
        }
        let host = value
            .strip_prefix("http://")
            .or_else(|| value.strip_prefix("https://"))
            .ok_or_else(|| ValidationError::UnsupportedScheme(value.to_string()))?;
        if host.trim_end_matches('/').is_empty() || host.starts_with('/') {
            return Err(ValidationError::MissingHost);
        }
        Ok(Self(value.trim_end_matches('/').to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full URL of `endpoint` on this device.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.0, endpoint.path())
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BaseUrl {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BaseUrl> for String {
    fn from(value: BaseUrl) -> Self {
        value.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_get_for_reads_and_post_for_commands() {
        assert_eq!(Endpoint::Status.method(), Method::Get);
        assert_eq!(Endpoint::Logs.method(), Method::Get);
        assert_eq!(Endpoint::Distance.method(), Method::Get);
        assert_eq!(Endpoint::On.method(), Method::Post);
        assert_eq!(Endpoint::Off.method(), Method::Post);
    }

    #[test]
    fn should_have_unique_paths() {
        let mut paths: Vec<_> = Endpoint::ALL.iter().map(|e| e.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Endpoint::ALL.len());
    }

    #[test]
    fn should_display_method_and_path() {
        assert_eq!(Endpoint::Logs.to_string(), "GET /logs");
        assert_eq!(Endpoint::On.to_string(), "POST /on");
    }

    #[test]
    fn should_strip_trailing_slashes() {
        let url = BaseUrl::parse("http://10.37.0.178//").unwrap();
        assert_eq!(url.as_str(), "http://10.37.0.178");
    }

    #[test]
    fn should_join_endpoint_path() {
        let url = BaseUrl::parse("http://10.37.0.178").unwrap();
        assert_eq!(url.endpoint_url(Endpoint::Status), "http://10.37.0.178/status");
        assert_eq!(url.endpoint_url(Endpoint::Off), "http://10.37.0.178/off");
    }

    #[test]
    fn should_accept_https_with_port() {
        let url: BaseUrl = "https://lamp.local:8443".parse().unwrap();
        assert_eq!(url.endpoint_url(Endpoint::Logs), "https://lamp.local:8443/logs");
    }

    #[test]
    fn should_reject_empty_url() {
        assert_eq!(BaseUrl::parse("  "), Err(ValidationError::EmptyBaseUrl));
    }

    #[test]
    fn should_reject_unknown_scheme() {
        assert!(matches!(
            BaseUrl::parse("ftp://lamp"),
            Err(ValidationError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            BaseUrl::parse("10.37.0.178"),
            Err(ValidationError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn should_reject_missing_host() {
        assert_eq!(BaseUrl::parse("http://"), Err(ValidationError::MissingHost));
    }

    #[test]
    fn should_deserialize_through_validation() {
        let url: BaseUrl = serde_json::from_str("\"http://lamp/\"").unwrap();
        assert_eq!(url.as_str(), "http://lamp");
        assert!(serde_json::from_str::<BaseUrl>("\"lamp\"").is_err());
    }
}
