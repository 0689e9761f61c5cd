use actix_web::{web, HttpResponse};

use super::{created, found, listed, updated};
use crate::{
    models::PantryStaff,
    services::{entity_service, relations},
    store::{Collection, EntityStore},
};

/// POST /pantry-staff (alias: POST /pantry)
#[utoipa::path(
    post,
    path = "/pantry-staff",
    tag = "Pantry",
    request_body = PantryStaff,
    responses(
        (status = 201, description = "Stored staff document"),
        (status = 400, description = "Payload could not be stored", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_pantry_staff(
    store: web::Data<dyn EntityStore>,
    payload: web::Json<PantryStaff>,
) -> HttpResponse {
    log::info!("📝 POST /pantry-staff");

    let result = entity_service::create(store.get_ref(), Collection::PantryStaff, &payload.into_inner()).await;
    created("Error creating pantry staff", result)
}

/// GET /pantry-staff - Equipe com as tarefas listadas em `assignedTasks` resolvidas em `tasks`
#[utoipa::path(
    get,
    path = "/pantry-staff",
    tag = "Pantry",
    responses(
        (status = 200, description = "Pantry staff, each with a tasks array"),
        (status = 500, description = "Store failure", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_pantry_staff(store: web::Data<dyn EntityStore>) -> HttpResponse {
    log::info!("📋 GET /pantry-staff");

    listed("Error listing pantry staff", relations::pantry_staff_with_tasks(store.get_ref()).await)
}

/// GET /pantry-staff/tasks - Equipe com as refeições atribuídas via `assignedPantryStaff`
#[utoipa::path(
    get,
    path = "/pantry-staff/tasks",
    tag = "Pantry",
    responses(
        (status = 200, description = "Pantry staff with assignedMeals and tasks arrays"),
        (status = 500, description = "Store failure", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_pantry_staff_tasks(store: web::Data<dyn EntityStore>) -> HttpResponse {
    log::info!("📋 GET /pantry-staff/tasks");

    listed("Error listing pantry tasks", relations::pantry_staff_assignments(store.get_ref()).await)
}

/// GET /pantry-staff/{id}
pub async fn get_pantry_staff(store: web::Data<dyn EntityStore>, id: web::Path<String>) -> HttpResponse {
    log::info!("🔍 GET /pantry-staff/{}", id);

    let result = entity_service::get_by_id(store.get_ref(), Collection::PantryStaff, &id).await;
    found("Error fetching pantry staff", result)
}

/// PATCH /pantry-staff/{id}
#[utoipa::path(
    patch,
    path = "/pantry-staff/{id}",
    tag = "Pantry",
    params(("id" = String, Path, description = "Pantry staff ObjectId")),
    request_body = PantryStaff,
    responses(
        (status = 200, description = "Update acknowledgment", body = crate::store::UpdateAck),
        (status = 400, description = "Malformed identifier or payload", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_pantry_staff(
    store: web::Data<dyn EntityStore>,
    id: web::Path<String>,
    payload: web::Json<PantryStaff>,
) -> HttpResponse {
    log::info!("🔧 PATCH /pantry-staff/{}", id);

    let result =
        entity_service::update(store.get_ref(), Collection::PantryStaff, &id, &payload.into_inner()).await;
    updated("Error updating pantry staff", result)
}
