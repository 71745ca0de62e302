//! ClouDNS wire types

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::types::Record;

/// Literal status keyword of a successful envelope.
pub(crate) const STATUS_SUCCESS: &str = "Success";

// ============ Records ============

/// One record as returned by `dns/records.json`.
///
/// The API is loose with numeric fields: `id` and `ttl` may arrive as JSON
/// strings or numbers, `failover` and `status` as numbers, strings or
/// booleans. All of them are normalized on decode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ClouDnsRecord {
    #[serde(deserialize_with = "de_string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub record: String,
    #[allow(dead_code)]
    #[serde(default, deserialize_with = "de_opt_string_or_number")]
    pub failover: Option<String>,
    #[serde(default, deserialize_with = "de_u64_lenient")]
    pub ttl: u64,
    #[allow(dead_code)]
    #[serde(default, deserialize_with = "de_opt_string_or_number")]
    pub status: Option<String>,
}

impl From<ClouDnsRecord> for Record {
    fn from(r: ClouDnsRecord) -> Self {
        Self {
            id: r.id,
            record_type: r.record_type,
            name: r.host,
            value: r.record,
            ttl: Duration::from_secs(r.ttl),
        }
    }
}

/// Body of a successful `dns/records.json` call.
///
/// Normally an object keyed by record id. A zone without records comes back
/// as `[]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RecordCollection {
    Keyed(BTreeMap<String, ClouDnsRecord>),
    List(Vec<ClouDnsRecord>),
}

impl RecordCollection {
    pub fn into_records(self) -> Vec<Record> {
        match self {
            Self::Keyed(map) => map.into_values().map(Record::from).collect(),
            Self::List(list) => list.into_iter().map(Record::from).collect(),
        }
    }
}

// ============ Status envelope ============

/// `{"status": "...", "statusDescription": "...", "data": ...}`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StatusEnvelope {
    pub status: String,
    #[serde(rename = "statusDescription", default)]
    pub description: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl StatusEnvelope {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Payload of a successful `dns/add-record.json` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct CreatedId {
    #[serde(deserialize_with = "de_string_or_number")]
    pub id: String,
}

// ============ Lenient scalar decoding ============

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Self::Str(s) => s,
            Self::Int(n) => n.to_string(),
            Self::Uint(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

fn de_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Bool(_) => Err(serde::de::Error::custom("expected string or number")),
        other => Ok(other.into_string()),
    }
}

fn de_opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}

fn de_u64_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)? {
        Scalar::Uint(n) => Ok(n),
        Scalar::Int(n) => u64::try_from(n).map_err(serde::de::Error::custom),
        Scalar::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
        Scalar::Float(_) | Scalar::Bool(_) => Err(serde::de::Error::custom(
            "expected a non-negative integer",
        )),
    }
}
