//! The data carrier contract.
//!
//! A data carrier is an immutable bundle of named fields that can travel
//! as a map or as JSON. Generated carrier types derive `Serialize` and
//! `Deserialize` and implement [`DataCarrier`] by listing their fields;
//! every conversion comes for free from the provided methods.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CarrierError;

/// Ordered map of field name to JSON value.
///
/// Iteration order is insertion order, so a map built from a carrier walks
/// the fields in declaration order.
pub type FieldMap = serde_json::Map<String, Value>;

/// Contract for generated data carriers.
///
/// The single required method is [`fields`](DataCarrier::fields); the
/// conversions are provided on top of serde. Carriers are value types:
/// nothing here mutates, and [`clone_with`](DataCarrier::clone_with)
/// returns a fresh instance.
pub trait DataCarrier: Serialize + DeserializeOwned {
    /// Field names in declaration order.
    ///
    /// [`from_map`](DataCarrier::from_map) checks every name listed here
    /// against the input before binding, so a misdeclared list manifests
    /// as an immediate [`CarrierError::MissingField`] in tests.
    fn fields() -> &'static [&'static str];

    /// Convert the carrier into a field map, in declaration order.
    fn to_map(&self) -> Result<FieldMap, CarrierError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(CarrierError::NotAnObject {
                found: value_kind(&other),
            }),
        }
    }

    /// Build a carrier from a field map.
    ///
    /// Every declared field must be present; the first absent one is
    /// reported by name. Keys that no field claims are ignored.
    fn from_map(map: FieldMap) -> Result<Self, CarrierError> {
        for field in Self::fields() {
            if !map.contains_key(*field) {
                return Err(CarrierError::MissingField { field });
            }
        }
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    /// Serialize the carrier to a JSON object string.
    fn to_json(&self) -> Result<String, CarrierError> {
        Ok(serde_json::to_string(&Value::Object(self.to_map()?))?)
    }

    /// Build a carrier from a JSON object string.
    ///
    /// Non-object JSON (an array, a bare number) is rejected before any
    /// field binding happens.
    fn from_json(json: &str) -> Result<Self, CarrierError> {
        match serde_json::from_str(json)? {
            Value::Object(map) => Self::from_map(map),
            other => Err(CarrierError::NotAnObject {
                found: value_kind(&other),
            }),
        }
    }

    /// The carrier's field map without the named keys.
    ///
    /// Names that match nothing are ignored; the remaining entries keep
    /// their order.
    fn except(&self, keys: &[&str]) -> Result<FieldMap, CarrierError> {
        let mut map = self.to_map()?;
        for key in keys {
            map.shift_remove(*key);
        }
        Ok(map)
    }

    /// A copy of the carrier with the given fields replaced.
    ///
    /// The original is left untouched.
    fn clone_with(&self, overrides: FieldMap) -> Result<Self, CarrierError> {
        let mut map = self.to_map()?;
        for (key, value) in overrides {
            map.insert(key, value);
        }
        Self::from_map(map)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct UserDto {
        id: u64,
        name: String,
        email: String,
    }

    impl DataCarrier for UserDto {
        fn fields() -> &'static [&'static str] {
            &["id", "name", "email"]
        }
    }

    fn sample() -> UserDto {
        UserDto {
            id: 1,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn map_round_trip_preserves_declaration_order() {
        let map = sample().to_map().unwrap();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "name", "email"]);

        assert_eq!(UserDto::from_map(map).unwrap(), sample());
    }

    #[test]
    fn json_round_trip_keeps_field_order() {
        let json = sample().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"name":"Ada Lovelace","email":"ada@example.com"}"#
        );

        assert_eq!(UserDto::from_json(&json).unwrap(), sample());
    }

    #[test]
    fn from_map_names_the_missing_field() {
        let mut map = FieldMap::new();
        map.insert("id".to_string(), json!(1));
        map.insert("email".to_string(), json!("ada@example.com"));

        let err = UserDto::from_map(map).unwrap_err();
        assert!(matches!(err, CarrierError::MissingField { field: "name" }));
    }

    #[test]
    fn from_map_ignores_unclaimed_keys() {
        let mut map = sample().to_map().unwrap();
        map.insert("spurious".to_string(), json!(true));

        assert_eq!(UserDto::from_map(map).unwrap(), sample());
    }

    #[test]
    fn from_json_rejects_non_objects() {
        let err = UserDto::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, CarrierError::NotAnObject { found: "an array" }));

        assert!(UserDto::from_json("not json at all").is_err());
    }

    #[test]
    fn except_drops_named_keys_and_keeps_order() {
        let map = sample().except(&["id", "email"]).unwrap();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name"]);
    }

    #[test]
    fn except_ignores_unknown_keys() {
        let map = sample().except(&["no_such_field"]).unwrap();
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn clone_with_replaces_fields_without_touching_the_original() {
        let original = sample();
        let mut overrides = FieldMap::new();
        overrides.insert("email".to_string(), json!("countess@example.com"));

        let updated = original.clone_with(overrides).unwrap();
        assert_eq!(updated.email, "countess@example.com");
        assert_eq!(updated.name, "Ada Lovelace");
        assert_eq!(original.email, "ada@example.com");
    }
}
