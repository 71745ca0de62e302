use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============ Records ============

/// A DNS record in provider-agnostic form.
///
/// `name` is the host relative to the zone (empty or `@` for the apex, as the
/// API reports it). `id` is empty until the provider has assigned one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Provider-assigned record identifier.
    #[serde(default)]
    pub id: String,
    /// Record type, e.g. `A`, `TXT`.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Host name relative to the zone.
    pub name: String,
    /// Record data.
    pub value: String,
    /// Time to live, carried as whole seconds.
    #[serde(with = "crate::utils::ttl_seconds")]
    pub ttl: Duration,
}

impl Record {
    /// Creates a record without an identifier.
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            id: String::new(),
            record_type: record_type.into(),
            name: name.into(),
            value: value.into(),
            ttl,
        }
    }

    /// Returns the record with `id` set.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

// ============ Credentials ============

/// ClouDNS API credentials.
///
/// ```json
/// { "auth_id": "1234", "sub": "true", "auth_password": "..." }
/// ```
///
/// `sub` selects the sub-account identity when it equals `"true"`
/// (case-insensitive); any other value, including absent, uses the main
/// account.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Main-account `auth-id` or sub-account `sub-auth-id`.
    pub auth_id: String,
    /// Sub-account flag.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sub: String,
    /// API password.
    pub auth_password: String,
}

impl Credentials {
    /// Credentials for a main account.
    pub fn new(auth_id: impl Into<String>, auth_password: impl Into<String>) -> Self {
        Self {
            auth_id: auth_id.into(),
            sub: String::new(),
            auth_password: auth_password.into(),
        }
    }

    /// Credentials for a sub-account.
    pub fn sub_account(auth_id: impl Into<String>, auth_password: impl Into<String>) -> Self {
        Self {
            sub: "true".to_string(),
            ..Self::new(auth_id, auth_password)
        }
    }

    /// Whether `auth_id` names a sub-account.
    pub fn is_sub_account(&self) -> bool {
        self.sub.eq_ignore_ascii_case("true")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("auth_id", &self.auth_id)
            .field("sub", &self.sub)
            .field("auth_password", &"******")
            .finish()
    }
}

// ============ Provider Metadata Types ============

/// The input type of a credential field (affects UI rendering).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text input.
    Text,
    /// Masked/password input.
    Password,
    /// On/off switch.
    Toggle,
}

/// Definition of a single credential field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentialField {
    /// Serde key inside [`Credentials`].
    pub key: String,
    /// Human-readable label.
    pub label: String,
    /// Input type for UI rendering.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Optional help/description text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

/// Static metadata describing the provider and its configuration surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    /// Provider identifier.
    pub id: String,
    /// Human-readable provider name.
    pub name: String,
    /// Short description of the provider.
    pub description: String,
    /// Credential fields accepted by [`Credentials`].
    pub required_fields: Vec<ProviderCredentialField>,
}
