//! ClouDNS Provider

mod auth;
mod http;
mod provider;
mod response;
mod ttl;
mod types;

use reqwest::Client;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::providers::common::{create_http_client, normalize_base_url};
use crate::types::Credentials;

pub(crate) use auth::QueryParams;
pub use ttl::{AVAILABLE_TTL, select_ttl};
pub(crate) use types::{CreatedId, RecordCollection, StatusEnvelope};

pub(crate) const CLOUDNS_API_BASE: &str = "https://api.cloudns.net/";

pub(crate) const ENDPOINT_LIST_RECORDS: &str = "dns/records.json";
pub(crate) const ENDPOINT_ADD_RECORD: &str = "dns/add-record.json";
pub(crate) const ENDPOINT_MOD_RECORD: &str = "dns/mod-record.json";
pub(crate) const ENDPOINT_DELETE_RECORD: &str = "dns/delete-record.json";

/// ClouDNS provider implementation.
///
/// Authenticates every request with `auth-id` (or `sub-auth-id`) and
/// `auth-password` query parameters.
///
/// Operations on one instance are serialized: each holds an internal lock from
/// authentication until the response is decoded.
///
/// # Construction
///
/// ```rust,no_run
/// use cloudns_provider::{ClouDnsProvider, Credentials};
///
/// let provider = ClouDnsProvider::new(Credentials::new("1234", "api-password"))?;
/// # Ok::<(), cloudns_provider::ProviderError>(())
/// ```
pub struct ClouDnsProvider {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
    pub(crate) base_url: String,
    pub(crate) lock: Mutex<()>,
}

/// Builder for [`ClouDnsProvider`].
pub struct ClouDnsProviderBuilder {
    credentials: Credentials,
    base_url: String,
    client: Option<Client>,
}

impl ClouDnsProviderBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: CLOUDNS_API_BASE.to_string(),
            client: None,
        }
    }

    /// Overrides the API base URL (default `https://api.cloudns.net/`).
    pub fn base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = normalize_base_url(base_url.as_ref());
        self
    }

    /// Uses a preconfigured HTTP client instead of the default one.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the [`ClouDnsProvider`] instance.
    pub fn build(self) -> Result<ClouDnsProvider> {
        let client = match self.client {
            Some(client) => client,
            None => create_http_client()?,
        };

        Ok(ClouDnsProvider {
            client,
            credentials: self.credentials,
            base_url: self.base_url,
            lock: Mutex::new(()),
        })
    }
}

impl ClouDnsProvider {
    /// Creates a provider against the public ClouDNS API with the default HTTP client.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(credentials: Credentials) -> ClouDnsProviderBuilder {
        ClouDnsProviderBuilder::new(credentials)
    }

    /// The credentials this provider authenticates with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}
