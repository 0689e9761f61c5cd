use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::{created, found, listed, updated};
use crate::{
    models::Meal,
    services::{entity_service, relations},
    store::{Collection, EntityStore, Filter},
};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct StatusQuery {
    /// pending, preparing, ready or delivered
    pub status: Option<String>,
}

/// POST /meals
#[utoipa::path(
    post,
    path = "/meals",
    tag = "Meals",
    request_body = Meal,
    responses(
        (status = 201, description = "Stored meal document"),
        (status = 400, description = "Payload could not be stored", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_meal(store: web::Data<dyn EntityStore>, payload: web::Json<Meal>) -> HttpResponse {
    log::info!("📝 POST /meals");

    let result = entity_service::create(store.get_ref(), Collection::Meals, &payload.into_inner()).await;
    created("Error creating meal", result)
}

/// GET /meals
pub async fn list_meals(store: web::Data<dyn EntityStore>) -> HttpResponse {
    log::info!("📋 GET /meals");

    let result = entity_service::list_all(store.get_ref(), Collection::Meals, &Filter::new()).await;
    listed("Error listing meals", result)
}

/// GET /meals/status?status=ready - Filtra por status (todas se omitido)
#[utoipa::path(
    get,
    path = "/meals/status",
    tag = "Meals",
    params(StatusQuery),
    responses(
        (status = 200, description = "Meals with the requested status"),
        (status = 500, description = "Store failure", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_meals_by_status(
    store: web::Data<dyn EntityStore>,
    query: web::Query<StatusQuery>,
) -> HttpResponse {
    let status = query.status.as_deref().map(str::trim).filter(|s| !s.is_empty());
    log::info!("📋 GET /meals/status - status={}", status.unwrap_or("*"));

    listed("Error filtering meals", relations::meals_by_status(store.get_ref(), status).await)
}

/// GET /meals/{id}
pub async fn get_meal(store: web::Data<dyn EntityStore>, id: web::Path<String>) -> HttpResponse {
    log::info!("🔍 GET /meals/{}", id);

    let result = entity_service::get_by_id(store.get_ref(), Collection::Meals, &id).await;
    found("Error fetching meal", result)
}

/// PATCH /meals/{id} - Avança status ou reatribui equipe
#[utoipa::path(
    patch,
    path = "/meals/{id}",
    tag = "Meals",
    params(("id" = String, Path, description = "Meal ObjectId")),
    request_body = Meal,
    responses(
        (status = 200, description = "Update acknowledgment", body = crate::store::UpdateAck),
        (status = 400, description = "Malformed identifier or payload", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_meal(
    store: web::Data<dyn EntityStore>,
    id: web::Path<String>,
    payload: web::Json<Meal>,
) -> HttpResponse {
    log::info!("🔧 PATCH /meals/{}", id);

    let result = entity_service::update(store.get_ref(), Collection::Meals, &id, &payload.into_inner()).await;
    updated("Error updating meal", result)
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{id_of, TestApp};
    use serde_json::{json, Value};

    async fn seed(app: &TestApp, statuses: &[&str]) -> Vec<String> {
        let mut ids = Vec::new();
        for status in statuses {
            let (_, meal) = app.post("/meals", json!({ "status": status })).await;
            ids.push(id_of(&meal));
        }
        ids
    }

    fn ids(body: &Value) -> Vec<String> {
        body.as_array().unwrap().iter().map(id_of).collect()
    }

    #[actix_web::test]
    async fn test_filter_by_status() {
        let app = TestApp::new();
        let created = seed(&app, &["ready", "pending", "ready", "delivered"]).await;

        let (status, body) = app.get("/meals/status?status=ready").await;
        assert_eq!(status, 200);
        assert_eq!(ids(&body), vec![created[0].clone(), created[2].clone()]);
        for meal in body.as_array().unwrap() {
            assert_eq!(meal["status"], "ready");
        }

        let (_, body) = app.get("/meals/status").await;
        assert_eq!(ids(&body), created);

        let (_, body) = app.get("/meals/status?status=preparing").await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_status_route_wins_over_identifier() {
        let app = TestApp::new();
        seed(&app, &["pending"]).await;

        // "status" is not an ObjectId; the literal route must answer
        let (status, body) = app.get("/meals/status").await;
        assert_eq!(status, 200);
        assert!(body.is_array());
    }

    #[actix_web::test]
    async fn test_status_progression() {
        let app = TestApp::new();
        let id = seed(&app, &["pending"]).await.remove(0);

        for next in ["preparing", "ready", "delivered"] {
            let (status, ack) = app
                .patch(&format!("/meals/{}", id), json!({ "status": next }))
                .await;
            assert_eq!(status, 200);
            assert_eq!(ack["modifiedCount"], 1);
        }

        let (_, meal) = app.get(&format!("/meals/{}", id)).await;
        assert_eq!(meal["status"], "delivered");

        let (status, _) = app
            .patch(&format!("/meals/{}", id), json!({ "status": "lost" }))
            .await;
        assert_eq!(status, 400);
    }

    #[actix_web::test]
    async fn test_empty_update_is_rejected() {
        let app = TestApp::new();
        let id = seed(&app, &["pending"]).await.remove(0);

        let (status, body) = app.patch(&format!("/meals/{}", id), json!({})).await;
        assert_eq!(status, 400);
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_list_meals() {
        let app = TestApp::new();
        let created = seed(&app, &["pending", "ready"]).await;

        let (status, body) = app.get("/meals").await;
        assert_eq!(status, 200);
        assert_eq!(ids(&body), created);
    }
}
