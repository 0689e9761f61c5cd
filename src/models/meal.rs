use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::object_id;

/// Estado de preparo/entrega de uma refeição
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
}

impl MealStatus {
    pub const ALL: [MealStatus; 4] = [
        MealStatus::Pending,
        MealStatus::Preparing,
        MealStatus::Ready,
        MealStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealStatus::Pending => "pending",
            MealStatus::Preparing => "preparing",
            MealStatus::Ready => "ready",
            MealStatus::Delivered => "delivered",
        }
    }
}

/// Food chart / meal (collection "meals")
///
/// A food chart is the diet plan of one patient; the same document tracks
/// its preparation and delivery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Meal {
    /// Patient the chart belongs to
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "object_id::deserialize_optional"
    )]
    #[schema(value_type = Option<String>)]
    pub patient_id: Option<ObjectId>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub morning_meal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub evening_meal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub night_meal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub instructions: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<MealStatus>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "object_id::deserialize_optional"
    )]
    #[schema(value_type = Option<String>)]
    pub assigned_pantry_staff: Option<ObjectId>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "object_id::deserialize_optional"
    )]
    #[schema(value_type = Option<String>)]
    pub assigned_delivery_personnel: Option<ObjectId>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub delivery_notes: Option<String>,
}
