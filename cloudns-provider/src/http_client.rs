//! Generic HTTP client tools
//!
//! Single-shot request execution shared by provider implementations.
//! Providers build their own `RequestBuilder`; this module sends it under the
//! caller's [`RequestContext`], logs the exchange and reads the body.
//!
//! Nothing here retries. A failed request surfaces immediately.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::context::RequestContext;
use crate::error::ProviderError;
use crate::utils::log_sanitizer::{redact_query, truncate_for_log};

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and raw body.
    ///
    /// # Arguments
    /// * `ctx` - caller context; cancellation or deadline aborts the request
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `provider_name` - Provider name (for logging)
    /// * `method_name` - request method name (for logging)
    /// * `url` - request URL (for logging, secrets are masked)
    ///
    /// # Errors
    /// * `ProviderError::InvalidRequest` - the request could not be built
    /// * `ProviderError::Timeout` - client timeout or context deadline
    /// * `ProviderError::Cancelled` - context cancelled
    /// * `ProviderError::NetworkError` - any other transport failure
    pub async fn execute_request(
        ctx: &RequestContext,
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, Vec<u8>), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {}", redact_query(url));

        ctx.run(async {
            let response = request_builder.send().await.map_err(map_send_error)?;

            let status_code = response.status().as_u16();
            log::debug!("[{provider_name}] Response Status: {status_code}");

            // Read the whole body; the connection is released when `response` drops.
            let body = response
                .bytes()
                .await
                .map_err(|e| ProviderError::NetworkError {
                    detail: format!("Failed to read response body: {e}"),
                })?;

            log::debug!(
                "[{provider_name}] Response Body: {}",
                truncate_for_log(&String::from_utf8_lossy(&body))
            );

            Ok::<_, ProviderError>((status_code, body.to_vec()))
        })
        .await?
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(body: &[u8]) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(body).map_err(ProviderError::parse)
    }
}

fn map_send_error(e: reqwest::Error) -> ProviderError {
    let (is_builder, is_timeout) = (e.is_builder(), e.is_timeout());
    // The URL carries auth-password; keep it out of the message.
    let detail = e.without_url().to_string();
    if is_builder {
        ProviderError::InvalidRequest { detail }
    } else if is_timeout {
        ProviderError::Timeout { detail }
    } else {
        ProviderError::NetworkError { detail }
    }
}
