use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::object_id;

/// Membro da equipe da copa (collection "pantryStaff")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PantryStaff {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location: Option<String>,

    /// Meals this person prepares
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "object_id::deserialize_optional_list"
    )]
    #[schema(value_type = Option<Vec<String>>)]
    pub assigned_tasks: Option<Vec<ObjectId>>,
}

/// Entregador (collection "deliveryPersonnel")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeliveryPersonnel {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location: Option<String>,

    /// Meals this person delivers
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "object_id::deserialize_optional_list"
    )]
    #[schema(value_type = Option<Vec<String>>)]
    pub assigned_tasks: Option<Vec<ObjectId>>,
}
