use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types.
///
/// The API issues opaque string identifiers (`_id`); the client never
/// interprets them beyond equality.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Identifier as sent on the wire
    fn as_string(&self) -> String;

    /// Build an identifier from a wire string
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Declares a transparent string identifier implementing [`AggregateId`].
#[macro_export]
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.clone()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(format!("Empty {}", stringify!($name)));
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::AggregateId;

    crate::string_id!(SampleId);

    #[test]
    fn test_from_string_trims_and_rejects_blank() {
        assert_eq!(SampleId::from_string(" abc ").unwrap(), SampleId("abc".to_string()));
        assert!(SampleId::from_string("   ").is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = SampleId("665f1a2b".to_string());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"665f1a2b\"");
        assert_eq!(id.as_string(), id.to_string());
    }
}
