//! Portal configuration loaded via OrthoConfig.
//!
//! Every value is optional; accessors fall back to local-development
//! defaults and validate what was supplied.

use std::str::FromStr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::{DateTimeLocale, UnsupportedLocale};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Errors raised when a configured value cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `base_url` is not an absolute URL.
    #[error("invalid base URL '{value}': {source}")]
    BaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    /// `locale` names an unsupported locale.
    #[error(transparent)]
    Locale(#[from] UnsupportedLocale),
    /// `log_format` is neither `json` nor `compact`.
    #[error("unknown log format '{0}'; expected json or compact")]
    LogFormat(String),
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Single-line human readable events.
    Compact,
}

impl FromStr for LogFormat {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "compact" => Ok(Self::Compact),
            _ => Err(SettingsError::LogFormat(s.to_owned())),
        }
    }
}

/// Configuration values for the portal client and CLI.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PORTAL")]
pub struct PortalSettings {
    /// Root URL of the REST API, without the `/api/v1` prefix.
    pub base_url: Option<String>,
    /// Per-request timeout in milliseconds. Unset means no timeout.
    pub timeout_ms: Option<u64>,
    /// Locale used to render dates, for example `en-GB`.
    pub locale: Option<String>,
    /// `json` or `compact`.
    pub log_format: Option<String>,
}

impl PortalSettings {
    /// Configured API root, falling back to the local development server.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BaseUrl`] when the value does not parse.
    pub fn base_url(&self) -> Result<Url, SettingsError> {
        let value = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Url::parse(value).map_err(|source| SettingsError::BaseUrl {
            value: value.to_owned(),
            source,
        })
    }

    /// Configured request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Configured display locale, falling back to en-GB.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Locale`] for unsupported tags.
    pub fn locale(&self) -> Result<DateTimeLocale, SettingsError> {
        self.locale
            .as_deref()
            .map_or(Ok(DateTimeLocale::default()), |tag| {
                tag.parse().map_err(SettingsError::from)
            })
    }

    /// Configured log format, falling back to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::LogFormat`] for unknown formats.
    pub fn log_format(&self) -> Result<LogFormat, SettingsError> {
        self.log_format
            .as_deref()
            .map_or(Ok(LogFormat::default()), str::parse)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for portal configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const KEYS: [&str; 4] = [
        "PORTAL_BASE_URL",
        "PORTAL_TIMEOUT_MS",
        "PORTAL_LOCALE",
        "PORTAL_LOG_FORMAT",
    ];

    fn load_from_empty_args() -> PortalSettings {
        PortalSettings::load_from_iter([OsString::from("portal")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(KEYS.map(|key| (key, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.base_url().expect("default url").as_str(),
            "http://localhost:8080/"
        );
        assert_eq!(settings.timeout(), None);
        assert_eq!(settings.locale().expect("default locale"), DateTimeLocale::EnGb);
        assert_eq!(settings.log_format().expect("default format"), LogFormat::Json);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PORTAL_BASE_URL", Some("https://api.example.test/".to_owned())),
            ("PORTAL_TIMEOUT_MS", Some("2500".to_owned())),
            ("PORTAL_LOCALE", Some("en-IN".to_owned())),
            ("PORTAL_LOG_FORMAT", Some("compact".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.base_url().expect("configured url").host_str(),
            Some("api.example.test")
        );
        assert_eq!(settings.timeout(), Some(Duration::from_millis(2500)));
        assert_eq!(settings.locale().expect("configured locale"), DateTimeLocale::EnIn);
        assert_eq!(settings.log_format().expect("configured format"), LogFormat::Compact);
    }

    #[rstest]
    #[case::relative_url(PortalSettings { base_url: Some("/api".to_owned()), ..PortalSettings::default() }, "invalid base URL '/api'")]
    #[case::unknown_locale(PortalSettings { locale: Some("de-DE".to_owned()), ..PortalSettings::default() }, "unsupported locale 'de-DE'")]
    #[case::unknown_format(PortalSettings { log_format: Some("xml".to_owned()), ..PortalSettings::default() }, "unknown log format 'xml'")]
    fn invalid_values_are_reported(#[case] settings: PortalSettings, #[case] expected: &str) {
        let message = settings
            .base_url()
            .err()
            .or_else(|| settings.locale().err())
            .or_else(|| settings.log_format().err())
            .map(|error| error.to_string())
            .expect("one accessor must fail");
        assert!(message.starts_with(expected), "message: {message}");
    }
}
