//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod cloudns;

pub use cloudns::{AVAILABLE_TTL, ClouDnsProvider, ClouDnsProviderBuilder, select_ttl};
