use mongodb::bson::Document;
use serde::Serialize;
use serde_json::Value;

use crate::{
    models::MealStatus,
    services::relations,
    store::EntityStore,
    utils::{bson_json::documents_to_json, error::AppError},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub pending: usize,
    pub preparing: usize,
    pub ready: usize,
    pub delivered: usize,
    /// Meals without a status or with a value outside the known set
    pub other: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub meals_status: Value,
    pub status_counts: StatusCounts,
    pub pantry_staff_tasks: Value,
    pub delivery_tasks: Value,
}

pub fn count_statuses(meals: &[Document]) -> StatusCounts {
    let mut counts = StatusCounts {
        pending: 0,
        preparing: 0,
        ready: 0,
        delivered: 0,
        other: 0,
    };

    for meal in meals {
        let status = meal
            .get_str("status")
            .ok()
            .and_then(|s| MealStatus::ALL.into_iter().find(|status| status.as_str() == s));

        match status {
            Some(MealStatus::Pending) => counts.pending += 1,
            Some(MealStatus::Preparing) => counts.preparing += 1,
            Some(MealStatus::Ready) => counts.ready += 1,
            Some(MealStatus::Delivered) => counts.delivered += 1,
            None => counts.other += 1,
        }
    }

    counts
}

/// Combined view of meal progress and staff assignments.
pub async fn snapshot(store: &dyn EntityStore) -> Result<DashboardSnapshot, AppError> {
    let meals = relations::food_charts(store).await?;
    let pantry_staff = relations::pantry_staff_assignments(store).await?;
    let delivery = relations::delivery_assignments(store).await?;

    Ok(DashboardSnapshot {
        status_counts: count_statuses(&meals),
        meals_status: documents_to_json(meals),
        pantry_staff_tasks: documents_to_json(pantry_staff),
        delivery_tasks: documents_to_json(delivery),
    })
}
