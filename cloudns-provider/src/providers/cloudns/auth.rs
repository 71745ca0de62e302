//! ClouDNS 认证参数与 query string 构造

use std::collections::BTreeMap;

use crate::error::{ProviderError, Result};
use crate::providers::common::normalize_domain_name;
use crate::types::Credentials;

use super::ClouDnsProvider;

/// Query parameters of a ClouDNS request.
///
/// Keys are unique; [`set`](Self::set) replaces an existing value.
/// [`encode`](Self::encode) emits the pairs sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// `k=v&k=v`, every key and value percent-encoded.
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Builds the authentication parameters for `credentials`.
///
/// `auth-password` is always set; `sub-auth-id` replaces `auth-id` for
/// sub-accounts.
pub(crate) fn build_authenticated_query(credentials: &Credentials) -> Result<QueryParams> {
    if credentials.auth_id.is_empty() {
        return Err(ProviderError::MissingCredential {
            field: "auth_id".to_string(),
        });
    }
    if credentials.auth_password.is_empty() {
        return Err(ProviderError::MissingCredential {
            field: "auth_password".to_string(),
        });
    }

    let mut query = QueryParams::new();
    query.set("auth-password", &credentials.auth_password);
    if credentials.is_sub_account() {
        query.set("sub-auth-id", &credentials.auth_id);
    } else {
        query.set("auth-id", &credentials.auth_id);
    }
    Ok(query)
}

impl ClouDnsProvider {
    /// Authenticated query scoped to `zone`.
    pub(crate) fn zone_query(&self, zone: &str) -> Result<QueryParams> {
        let mut query = build_authenticated_query(&self.credentials)?;
        query.set("domain-name", normalize_domain_name(zone));
        Ok(query)
    }
}
