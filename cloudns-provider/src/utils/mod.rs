//! Utility modules.

/// Log sanitization utilities to prevent credential exposure.
pub mod log_sanitizer;

/// Serde helpers for TTL values carried as integer seconds.
pub mod ttl_seconds;
