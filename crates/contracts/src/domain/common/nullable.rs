//! Field deserializers for values the server may send as explicit `null`.
//!
//! `#[serde(default)]` only covers absent keys; these treat `null` the same
//! way, so one sparse record cannot fail a whole page.

use serde::{Deserialize, Deserializer};

/// `null` becomes `T::default()`
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` becomes `true`, matching the absent-key default of active flags
pub fn or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// Absent-key default for active flags
pub fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "or_default")]
        code: String,
        #[serde(default = "default_true", deserialize_with = "or_true")]
        active: bool,
        #[serde(default, deserialize_with = "or_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_and_absent_agree() {
        let nulls: Sample =
            serde_json::from_str(r#"{"code": null, "active": null, "tags": null}"#).unwrap();
        let absent: Sample = serde_json::from_str("{}").unwrap();
        for s in [nulls, absent] {
            assert_eq!(s.code, "");
            assert!(s.active);
            assert!(s.tags.is_empty());
        }
    }

    #[test]
    fn test_present_values_kept() {
        let s: Sample =
            serde_json::from_str(r#"{"code": "GV1", "active": false, "tags": ["a"]}"#).unwrap();
        assert_eq!(s.code, "GV1");
        assert!(!s.active);
        assert_eq!(s.tags, vec!["a".to_string()]);
    }
}
