//! Serde helpers for reference fields.
//!
//! Clients send references as 24-hex strings; they are kept as `ObjectId`
//! so that BSON serialization stores real ObjectIds that match `_id`.

use mongodb::bson::oid::ObjectId;
use serde::{de::Error, Deserialize, Deserializer};

pub fn parse(raw: &str) -> Result<ObjectId, String> {
    ObjectId::parse_str(raw.trim()).map_err(|_| format!("'{}' is not a valid identifier", raw))
}

pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<ObjectId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse(&raw).map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}

pub fn deserialize_optional_list<'de, D>(deserializer: D) -> Result<Option<Vec<ObjectId>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Vec<String>>::deserialize(deserializer)? {
        Some(raw) => raw
            .iter()
            .map(|id| parse(id))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
            .map_err(D::Error::custom),
        None => Ok(None),
    }
}
