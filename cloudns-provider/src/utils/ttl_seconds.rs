//! TTL 序列化/反序列化工具
//!
//! - 序列化: `Duration` -> 整数秒
//! - 反序列化: 整数秒 -> `Duration`
//!
//! Sub-second precision is dropped on serialization; whole-second values
//! round-trip exactly.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};

/// 序列化 `Duration` 为整数秒
pub fn serialize<S>(ttl: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(ttl.as_secs())
}

/// 反序列化整数秒为 `Duration`
pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Wrapper {
        #[serde(with = "crate::utils::ttl_seconds")]
        ttl: Duration,
    }

    #[test]
    fn serializes_as_seconds() {
        let w = Wrapper {
            ttl: Duration::from_secs(3600),
        };
        assert_eq!(serde_json::to_string(&w).unwrap(), r#"{"ttl":3600}"#);
    }

    #[test]
    fn whole_seconds_round_trip() {
        for secs in [0, 60, 300, 3600, 2_764_800] {
            let w = Wrapper {
                ttl: Duration::from_secs(secs),
            };
            let back: Wrapper = serde_json::from_str(&serde_json::to_string(&w).unwrap()).unwrap();
            assert_eq!(back, w);
        }
    }

    #[test]
    fn sub_second_part_dropped() {
        let w = Wrapper {
            ttl: Duration::from_millis(1500),
        };
        assert_eq!(serde_json::to_string(&w).unwrap(), r#"{"ttl":1}"#);
    }
}
