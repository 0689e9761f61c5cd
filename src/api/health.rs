use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::store::EntityStore;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// "connected" or "unavailable"
    pub database: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(store: web::Data<dyn EntityStore>) -> HttpResponse {
    let database = store.ping().await;

    let response = HealthResponse {
        status: if database.is_ok() { "healthy" } else { "degraded" }.to_string(),
        service: "hospital-food-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if database.is_ok() { "connected" } else { "unavailable" }.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    match database {
        Ok(()) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::warn!("⚠️ Health check: {}", e);
            HttpResponse::ServiceUnavailable().json(response)
        }
    }
}
