//! # cloudns-provider
//!
//! A DNS record management client for the [ClouDNS](https://www.cloudns.net/)
//! HTTP API.
//!
//! Translates provider-agnostic record operations (list, append, set, delete)
//! into authenticated `GET` calls and maps the replies back into [`Record`]s.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use cloudns_provider::{ClouDnsProvider, Credentials, DnsProvider, Record, RequestContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = ClouDnsProvider::new(Credentials::new("1234", "api-password"))?;
//!     let ctx = RequestContext::new().with_timeout(Duration::from_secs(60));
//!
//!     // List
//!     for record in provider.get_records(&ctx, "example.com").await? {
//!         println!("{} {} {} {:?}", record.id, record.record_type, record.name, record.ttl);
//!     }
//!
//!     // Create; the returned records carry their new ids
//!     let txt = Record::new("TXT", "_acme-challenge", "token", Duration::from_secs(60));
//!     let created = provider.append_records(&ctx, "example.com", &[txt]).await?;
//!
//!     // Delete by id
//!     provider.delete_records(&ctx, "example.com", &created).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::MissingCredential`]: `auth_id` or `auth_password` is empty
//! - [`ProviderError::ApiError`]: ClouDNS reported failure; displays its `statusDescription`
//! - [`ProviderError::ParseError`]: the response could not be interpreted
//! - transport variants for network failure, timeout and cancellation
//!
//! Nothing is retried. A batch stops at the first failing record.

mod context;
mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use context::RequestContext;

pub use error::{ErrorKind, ProviderError, Result};

pub use traits::DnsProvider;

pub use types::{Credentials, FieldType, ProviderCredentialField, ProviderMetadata, Record};

pub use providers::{AVAILABLE_TTL, ClouDnsProvider, ClouDnsProviderBuilder, select_ttl};

// Re-exported so callers can build contexts without a direct tokio-util dependency.
pub use tokio_util::sync::CancellationToken;
