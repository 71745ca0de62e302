use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all ClouDNS operations.
///
/// Variants fall into four kinds, see [`ErrorKind`]:
///
/// - [`MissingCredential`](Self::MissingCredential): raised before any network call
/// - [`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout),
///   [`Cancelled`](Self::Cancelled), [`InvalidRequest`](Self::InvalidRequest): transport failures
/// - [`ApiError`](Self::ApiError): the API reported failure in its status envelope
/// - [`ParseError`](Self::ParseError): the response matched neither the expected shape
///   nor a failure envelope
///
/// Nothing is retried inside this crate. Every variant is serializable for
/// structured error reporting.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// `auth_id` or `auth_password` is empty.
    #[error("[cloudns] Missing credential: {field}")]
    MissingCredential {
        /// Name of the empty credential field.
        field: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("[cloudns] Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The request timed out or the caller's deadline passed.
    #[error("[cloudns] Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The caller cancelled the operation.
    #[error("[cloudns] Request cancelled")]
    Cancelled,

    /// The request could not be constructed (e.g. an unparsable base URL).
    #[error("[cloudns] Invalid request: {detail}")]
    InvalidRequest {
        /// Error details.
        detail: String,
    },

    /// The API answered with a non-`Success` status envelope.
    ///
    /// Displays as the provider's `statusDescription`, verbatim.
    #[error("{message}")]
    ApiError {
        /// `statusDescription` from the envelope.
        message: String,
    },

    /// Failed to parse the API response.
    #[error("[cloudns] Parse error: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },
}

/// Coarse classification of a [`ProviderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Credentials were incomplete; no request was sent.
    MissingCredential,
    /// The request never produced a response body.
    Transport,
    /// The API explicitly reported failure.
    Domain,
    /// The response body could not be interpreted.
    Decode,
}

impl ProviderError {
    /// Returns the kind this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential { .. } => ErrorKind::MissingCredential,
            Self::NetworkError { .. }
            | Self::Timeout { .. }
            | Self::Cancelled
            | Self::InvalidRequest { .. } => ErrorKind::Transport,
            Self::ApiError { .. } => ErrorKind::Domain,
            Self::ParseError { .. } => ErrorKind::Decode,
        }
    }

    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential { .. } | Self::ApiError { .. } | Self::Cancelled
        )
    }

    pub(crate) fn parse(detail: impl ToString) -> Self {
        Self::ParseError {
            detail: detail.to_string(),
        }
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_credential() {
        let e = ProviderError::MissingCredential {
            field: "auth_id".to_string(),
        };
        assert_eq!(e.to_string(), "[cloudns] Missing credential: auth_id");
    }

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[cloudns] Network error: connection refused");
    }

    #[test]
    fn display_api_error_is_verbatim() {
        let e = ProviderError::ApiError {
            message: "Record not found".to_string(),
        };
        assert_eq!(e.to_string(), "Record not found");
    }

    #[test]
    fn display_cancelled() {
        assert_eq!(
            ProviderError::Cancelled.to_string(),
            "[cloudns] Request cancelled"
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(
            ProviderError::MissingCredential {
                field: "auth_password".into()
            }
            .kind(),
            ErrorKind::MissingCredential
        );
        assert_eq!(
            ProviderError::Timeout { detail: "x".into() }.kind(),
            ErrorKind::Transport
        );
        assert_eq!(ProviderError::Cancelled.kind(), ErrorKind::Transport);
        assert_eq!(
            ProviderError::InvalidRequest { detail: "x".into() }.kind(),
            ErrorKind::Transport
        );
        assert_eq!(
            ProviderError::ApiError {
                message: "x".into()
            }
            .kind(),
            ErrorKind::Domain
        );
        assert_eq!(ProviderError::parse("x").kind(), ErrorKind::Decode);
    }

    #[test]
    fn expected_variants() {
        assert!(
            ProviderError::ApiError {
                message: "x".into()
            }
            .is_expected()
        );
        assert!(!ProviderError::NetworkError { detail: "x".into() }.is_expected());
        assert!(!ProviderError::parse("x").is_expected());
    }

    #[test]
    fn serialize_json_tagged() {
        let e = ProviderError::ApiError {
            message: "Invalid authentication, incorrect auth-id or auth-password.".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"ApiError\""));

        let back: ProviderError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), e.to_string());
    }
}
