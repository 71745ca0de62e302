//! ClouDNS response interpretation
//!
//! Endpoints answer either with the requested payload or with a status
//! envelope, and the same endpoint may do both depending on outcome. Bodies are
//! classified into a [`DecodeOutcome`] first and only then turned into a
//! `Result`.

use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;

use super::{CreatedId, StatusEnvelope};

/// Result of interpreting one response body.
#[derive(Debug)]
pub(crate) enum DecodeOutcome<T> {
    /// The body decoded as the requested shape.
    Direct(T),
    /// The body is a status envelope reporting failure.
    DomainFailure(String),
    /// Neither shape fits. Carries the error of the direct decode attempt.
    Undecodable(serde_json::Error),
}

impl<T> DecodeOutcome<T> {
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Direct(value) => Ok(value),
            Self::DomainFailure(message) => Err(ProviderError::ApiError { message }),
            Self::Undecodable(e) => Err(ProviderError::parse(e)),
        }
    }
}

/// Parses `body` as an envelope. An empty `status` means the body is not one.
fn envelope(body: &[u8]) -> Option<StatusEnvelope> {
    serde_json::from_slice::<StatusEnvelope>(body)
        .ok()
        .filter(|env| !env.status.is_empty())
}

/// Classifies `body` as `T`, a failure envelope, or neither.
pub(crate) fn classify<T: DeserializeOwned>(body: &[u8]) -> DecodeOutcome<T> {
    let direct_err = match serde_json::from_slice::<T>(body) {
        Ok(value) => return DecodeOutcome::Direct(value),
        Err(e) => e,
    };

    match envelope(body) {
        Some(env) if !env.is_success() => DecodeOutcome::DomainFailure(env.description),
        _ => DecodeOutcome::Undecodable(direct_err),
    }
}

/// Decodes `body` as `T`, surfacing a failure envelope as [`ProviderError::ApiError`].
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    classify(body).into_result()
}

/// Requires `body` to be a successful envelope and returns it.
pub(crate) fn check_status(body: &[u8]) -> Result<StatusEnvelope> {
    let env: StatusEnvelope = HttpUtils::parse_json(body)?;
    if env.status.is_empty() {
        return Err(ProviderError::parse("response carries no status"));
    }
    if !env.is_success() {
        return Err(ProviderError::ApiError {
            message: env.description,
        });
    }
    Ok(env)
}

/// Extracts the id assigned by `dns/add-record.json`.
pub(crate) fn created_id(body: &[u8]) -> Result<String> {
    let env = check_status(body)?;
    let data = env
        .data
        .ok_or_else(|| ProviderError::parse("success envelope carries no data"))?;
    let created: CreatedId = serde_json::from_value(data).map_err(ProviderError::parse)?;
    Ok(created.id)
}
