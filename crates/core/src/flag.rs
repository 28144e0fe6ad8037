//! Serde helpers for boolean flags exchanged as `0`/`1`.
//!
//! The browser client sends and expects `completed` as an integer. Use with
//! `#[serde(with = "tasklist_core::flag")]`. Deserialization also accepts
//! JSON booleans.

use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serializer};

pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Bool(b) => Ok(b),
        Raw::Int(0) => Ok(false),
        Raw::Int(1) => Ok(true),
        Raw::Int(other) => Err(de::Error::invalid_value(
            Unexpected::Signed(other),
            &"0, 1, true or false",
        )),
    }
}
