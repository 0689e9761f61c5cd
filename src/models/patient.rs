use serde::{Deserialize, Serialize};

/// Paciente (collection "patients")
///
/// Every field is optional so the same record serves creation and partial
/// updates; absent fields are never written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Patient {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub room_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bed_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub floor_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub diseases: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub allergies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dietary_restrictions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub emergency_contact: Option<String>,
}
