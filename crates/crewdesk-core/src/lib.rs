#![forbid(unsafe_code)]

use std::collections::BTreeMap;

pub const CRATE_NAME: &str = "crewdesk-core";

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Usage = 2,
    Validation = 3,
    DependencyFailure = 4,
    Internal = 10,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCode {
    InvalidInput,
    ValidationFailed,
    RecordNotFound,
    ServiceUnreachable,
    ServiceMisconfigured,
    ServiceRejected,
    Internal,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::ValidationFailed => "validation_failed",
            Self::RecordNotFound => "record_not_found",
            Self::ServiceUnreachable => "service_unreachable",
            Self::ServiceMisconfigured => "service_misconfigured",
            Self::ServiceRejected => "service_rejected",
            Self::Internal => "internal_error",
        }
    }

    #[must_use]
    pub const fn exit_code(self) -> ExitCode {
        match self {
            Self::InvalidInput | Self::ValidationFailed => ExitCode::Validation,
            Self::RecordNotFound => ExitCode::Validation,
            Self::ServiceUnreachable | Self::ServiceMisconfigured | Self::ServiceRejected => {
                ExitCode::DependencyFailure
            }
            Self::Internal => ExitCode::Internal,
        }
    }
}

pub const ENV_CREWDESK_ENDPOINT: &str = "CREWDESK_ENDPOINT";
pub const ENV_CREWDESK_LOG_LEVEL: &str = "CREWDESK_LOG_LEVEL";
pub const ENV_CREWDESK_UPLOAD_FOLDER: &str = "CREWDESK_UPLOAD_FOLDER";
pub const ENV_CREWDESK_MEMBERSHIP_PATH: &str = "CREWDESK_MEMBERSHIP_PATH";

#[must_use]
pub fn env_trimmed(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[must_use]
pub fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

#[must_use]
pub fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

/// Connection settings for the sheet service, resolved once at startup and
/// passed explicitly to every component that talks to the service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub base_url: String,
    /// Drive folder receiving `uploadFile` payloads; empty means uploads are
    /// rejected before any network call.
    #[serde(default)]
    pub upload_folder_id: String,
    /// Append a `_` cache-busting query parameter to every fetch.
    #[serde(default = "default_cache_bust")]
    pub cache_bust: bool,
}

const fn default_cache_bust() -> bool {
    true
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError("service base_url must not be empty".to_string()));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ConfigError(format!(
                "service base_url must be http(s), got {trimmed}"
            )));
        }
        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            upload_folder_id: String::new(),
            cache_bust: true,
        })
    }

    #[must_use]
    pub fn with_upload_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.upload_folder_id = folder_id.into();
        self
    }

    #[must_use]
    pub fn with_cache_bust(mut self, cache_bust: bool) -> Self {
        self.cache_bust = cache_bust;
        self
    }

    /// Resolve the config from `CREWDESK_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_trimmed(ENV_CREWDESK_ENDPOINT)
            .ok_or_else(|| ConfigError(format!("{ENV_CREWDESK_ENDPOINT} is not set")))?;
        let mut config = Self::new(base_url)?;
        if let Some(folder) = env_trimmed(ENV_CREWDESK_UPLOAD_FOLDER) {
            config.upload_folder_id = folder;
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(pub String);

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineError {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: BTreeMap<String, String>,
}

impl MachineError {
    #[must_use]
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_detail(mut self, key: &str, value: &str) -> Self {
        self.details.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_config_rejects_empty_and_non_http() {
        assert!(ServiceConfig::new("").is_err());
        assert!(ServiceConfig::new("   ").is_err());
        assert!(ServiceConfig::new("ftp://example.com/app").is_err());
    }

    #[test]
    fn service_config_normalizes_trailing_slash() {
        let config = ServiceConfig::new("https://script.example.com/macros/exec/").expect("config");
        assert_eq!(config.base_url, "https://script.example.com/macros/exec");
        assert!(config.cache_bust);
    }

    #[test]
    fn error_codes_map_to_exit_codes() {
        assert_eq!(ErrorCode::ValidationFailed.exit_code(), ExitCode::Validation);
        assert_eq!(
            ErrorCode::ServiceUnreachable.exit_code(),
            ExitCode::DependencyFailure
        );
        assert_eq!(ErrorCode::Internal.exit_code(), ExitCode::Internal);
    }
}
