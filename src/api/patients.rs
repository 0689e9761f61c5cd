use actix_web::{web, HttpResponse};

use super::{created, found, listed, updated};
use crate::{
    models::Patient,
    services::entity_service,
    store::{Collection, EntityStore, Filter},
};

/// POST /patients - Cadastra paciente
#[utoipa::path(
    post,
    path = "/patients",
    tag = "Patients",
    request_body = Patient,
    responses(
        (status = 201, description = "Stored patient document"),
        (status = 400, description = "Payload could not be stored", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_patient(
    store: web::Data<dyn EntityStore>,
    payload: web::Json<Patient>,
) -> HttpResponse {
    log::info!("📝 POST /patients");

    let result = entity_service::create(store.get_ref(), Collection::Patients, &payload.into_inner()).await;
    created("Error creating patient", result)
}

/// GET /patients - Lista todos os pacientes
#[utoipa::path(
    get,
    path = "/patients",
    tag = "Patients",
    responses(
        (status = 200, description = "Every patient, in store order"),
        (status = 500, description = "Store failure", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_patients(store: web::Data<dyn EntityStore>) -> HttpResponse {
    log::info!("📋 GET /patients");

    let result = entity_service::list_all(store.get_ref(), Collection::Patients, &Filter::new()).await;
    listed("Error listing patients", result)
}

/// GET /patients/{id}
#[utoipa::path(
    get,
    path = "/patients/{id}",
    tag = "Patients",
    params(("id" = String, Path, description = "Patient ObjectId")),
    responses(
        (status = 200, description = "The patient, or null when absent"),
        (status = 400, description = "Malformed identifier", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_patient(store: web::Data<dyn EntityStore>, id: web::Path<String>) -> HttpResponse {
    log::info!("🔍 GET /patients/{}", id);

    let result = entity_service::get_by_id(store.get_ref(), Collection::Patients, &id).await;
    found("Error fetching patient", result)
}

/// PATCH /patients/{id} - Atualiza somente os campos enviados
#[utoipa::path(
    patch,
    path = "/patients/{id}",
    tag = "Patients",
    params(("id" = String, Path, description = "Patient ObjectId")),
    request_body = Patient,
    responses(
        (status = 200, description = "Update acknowledgment", body = crate::store::UpdateAck),
        (status = 400, description = "Malformed identifier or payload", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_patient(
    store: web::Data<dyn EntityStore>,
    id: web::Path<String>,
    payload: web::Json<Patient>,
) -> HttpResponse {
    log::info!("🔧 PATCH /patients/{}", id);

    let result = entity_service::update(store.get_ref(), Collection::Patients, &id, &payload.into_inner()).await;
    updated("Error updating patient", result)
}
