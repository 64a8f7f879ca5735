// SPDX-License-Identifier: Apache-2.0

use crewdesk_core::ErrorCode;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetErrorCode {
    /// Transport failure: unreachable host, connection reset.
    Network,
    /// Non-2xx HTTP status.
    Status,
    /// Response body was not valid JSON.
    Format,
    /// Response body was HTML; the deployment is misconfigured.
    Misconfigured,
    /// The backing script answered `success:false`.
    Application,
    /// Rejected before any network call.
    Validation,
    /// A key-resolved row no longer exists.
    NotFound,
    Io,
    Internal,
}

impl SheetErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network_error",
            Self::Status => "http_status",
            Self::Format => "format_error",
            Self::Misconfigured => "misconfigured_deployment",
            Self::Application => "application_error",
            Self::Validation => "validation_error",
            Self::NotFound => "not_found",
            Self::Io => "io_error",
            Self::Internal => "internal_error",
        }
    }

    #[must_use]
    pub const fn as_error_code(self) -> ErrorCode {
        match self {
            Self::Network | Self::Status => ErrorCode::ServiceUnreachable,
            Self::Format => ErrorCode::ServiceRejected,
            Self::Misconfigured => ErrorCode::ServiceMisconfigured,
            Self::Application => ErrorCode::ServiceRejected,
            Self::Validation => ErrorCode::ValidationFailed,
            Self::NotFound => ErrorCode::RecordNotFound,
            Self::Io | Self::Internal => ErrorCode::Internal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetError {
    pub code: SheetErrorCode,
    pub message: String,
}

impl SheetError {
    #[must_use]
    pub fn new(code: SheetErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl Display for SheetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for SheetError {}
