// ==================== RELATIONSHIPS ====================
// Projeções usadas pelos endpoints de leitura compostos

use mongodb::bson::Document;

use crate::{
    services::{
        entity_service::parse_id,
        projection::{Projection, Relationship},
    },
    store::{Collection, EntityStore, Filter},
    utils::error::AppError,
};

/// meal.patientId → patients._id
pub fn patient_of_meal() -> Relationship {
    Relationship::new("patientId", Collection::Patients, "_id", "patientDetails")
}

/// staff.assignedTasks → meals._id
pub fn assigned_tasks() -> Relationship {
    Relationship::new("assignedTasks", Collection::Meals, "_id", "tasks")
}

/// pantryStaff._id ← meals.assignedPantryStaff
pub fn meals_of_pantry_staff() -> Relationship {
    Relationship::new("_id", Collection::Meals, "assignedPantryStaff", "assignedMeals")
}

/// deliveryPersonnel._id ← meals.assignedDeliveryPersonnel
pub fn meals_of_delivery_personnel() -> Relationship {
    Relationship::new("_id", Collection::Meals, "assignedDeliveryPersonnel", "assignedMeals")
}

/// Every food chart with its patient attached.
pub async fn food_charts(store: &dyn EntityStore) -> Result<Vec<Document>, AppError> {
    Projection::of(Collection::Meals)
        .attach(patient_of_meal())
        .run(store)
        .await
}

/// First food chart recorded for a patient.
pub async fn food_chart_for_patient(
    store: &dyn EntityStore,
    raw_patient_id: &str,
) -> Result<Option<Document>, AppError> {
    let patient_id = parse_id(raw_patient_id)?;

    let charts = Projection::of(Collection::Meals)
        .filter(Filter::new().eq("patientId", patient_id))
        .attach(patient_of_meal())
        .run(store)
        .await?;

    Ok(charts.into_iter().next())
}

pub async fn pantry_staff_with_tasks(store: &dyn EntityStore) -> Result<Vec<Document>, AppError> {
    Projection::of(Collection::PantryStaff)
        .attach(assigned_tasks())
        .run(store)
        .await
}

/// Pantry staff with the meals pointing at them and the meals they list.
pub async fn pantry_staff_assignments(store: &dyn EntityStore) -> Result<Vec<Document>, AppError> {
    Projection::of(Collection::PantryStaff)
        .attach(meals_of_pantry_staff())
        .attach(assigned_tasks())
        .run(store)
        .await
}

/// Delivery personnel with the meals pointing at them and the meals they
/// list, each meal carrying the patient it goes to under `patientDetails`.
pub async fn delivery_assignments(store: &dyn EntityStore) -> Result<Vec<Document>, AppError> {
    Projection::of(Collection::DeliveryPersonnel)
        .attach(meals_of_delivery_personnel().with(patient_of_meal()))
        .attach(assigned_tasks().with(patient_of_meal()))
        .run(store)
        .await
}

/// Meals with the given status, or all meals when none is given.
pub async fn meals_by_status(
    store: &dyn EntityStore,
    status: Option<&str>,
) -> Result<Vec<Document>, AppError> {
    let filter = match status {
        Some(status) => Filter::new().eq("status", status),
        None => Filter::new(),
    };
    store.find(Collection::Meals, &filter).await
}
