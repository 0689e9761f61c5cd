use actix_web::{web, HttpResponse};

use super::{created, found, listed, updated};
use crate::{
    models::DeliveryPersonnel,
    services::{entity_service, relations},
    store::{Collection, EntityStore, Filter},
};

/// POST /delivery-personnel (alias: POST /deliveries)
#[utoipa::path(
    post,
    path = "/delivery-personnel",
    tag = "Delivery",
    request_body = DeliveryPersonnel,
    responses(
        (status = 201, description = "Stored delivery personnel document"),
        (status = 400, description = "Payload could not be stored", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_delivery_personnel(
    store: web::Data<dyn EntityStore>,
    payload: web::Json<DeliveryPersonnel>,
) -> HttpResponse {
    log::info!("📝 POST /delivery-personnel");

    let result =
        entity_service::create(store.get_ref(), Collection::DeliveryPersonnel, &payload.into_inner()).await;
    created("Error creating delivery personnel", result)
}

/// GET /delivery-personnel
#[utoipa::path(
    get,
    path = "/delivery-personnel",
    tag = "Delivery",
    responses(
        (status = 200, description = "Every delivery person, in store order"),
        (status = 500, description = "Store failure", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_delivery_personnel(store: web::Data<dyn EntityStore>) -> HttpResponse {
    log::info!("📋 GET /delivery-personnel");

    let result =
        entity_service::list_all(store.get_ref(), Collection::DeliveryPersonnel, &Filter::new()).await;
    listed("Error listing delivery personnel", result)
}

/// GET /delivery-personnel/tasks (alias: GET /deliveries)
#[utoipa::path(
    get,
    path = "/delivery-personnel/tasks",
    tag = "Delivery",
    responses(
        (status = 200, description = "Delivery personnel with assignedMeals and tasks arrays"),
        (status = 500, description = "Store failure", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_delivery_tasks(store: web::Data<dyn EntityStore>) -> HttpResponse {
    log::info!("📋 GET /delivery-personnel/tasks");

    listed("Error listing delivery tasks", relations::delivery_assignments(store.get_ref()).await)
}

/// GET /delivery-personnel/{id}
pub async fn get_delivery_personnel(
    store: web::Data<dyn EntityStore>,
    id: web::Path<String>,
) -> HttpResponse {
    log::info!("🔍 GET /delivery-personnel/{}", id);

    let result = entity_service::get_by_id(store.get_ref(), Collection::DeliveryPersonnel, &id).await;
    found("Error fetching delivery personnel", result)
}

/// PATCH|PUT /delivery-personnel/{id} (alias: /deliveries/{id})
#[utoipa::path(
    patch,
    path = "/delivery-personnel/{id}",
    tag = "Delivery",
    params(("id" = String, Path, description = "Delivery personnel ObjectId")),
    request_body = DeliveryPersonnel,
    responses(
        (status = 200, description = "Update acknowledgment", body = crate::store::UpdateAck),
        (status = 400, description = "Malformed identifier or payload", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_delivery_personnel(
    store: web::Data<dyn EntityStore>,
    id: web::Path<String>,
    payload: web::Json<DeliveryPersonnel>,
) -> HttpResponse {
    log::info!("🔧 Updating delivery personnel {}", id);

    let result =
        entity_service::update(store.get_ref(), Collection::DeliveryPersonnel, &id, &payload.into_inner())
            .await;
    updated("Error updating delivery personnel", result)
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{id_of, TestApp};
    use actix_web::test::TestRequest;
    use serde_json::json;

    #[actix_web::test]
    async fn test_delivery_tasks() {
        let app = TestApp::new();
        let (_, courier) = app
            .post("/delivery-personnel", json!({ "name": "D", "contactNumber": "555-0101" }))
            .await;
        let d1 = id_of(&courier);

        let (_, meal) = app
            .post("/meals", json!({ "assignedDeliveryPersonnel": d1, "status": "ready" }))
            .await;

        let (status, body) = app.get("/delivery-personnel/tasks").await;
        assert_eq!(status, 200);
        let assigned = body[0]["assignedMeals"].as_array().unwrap();
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0]["_id"], meal["_id"]);
        assert_eq!(body[0]["tasks"], json!([]));

        // Alias serves the same projection
        let (status, alias) = app.get("/deliveries").await;
        assert_eq!(status, 200);
        assert_eq!(alias, body);

        // Plain list carries no projection
        let (_, plain) = app.get("/delivery-personnel").await;
        assert!(plain[0].get("assignedMeals").is_none());
    }

    #[actix_web::test]
    async fn test_delivery_tasks_show_destination_patient() {
        let app = TestApp::new();
        let (_, patient) = app
            .post("/patients", json!({ "name": "A", "roomNumber": "214", "floorNumber": "2" }))
            .await;
        let (_, courier) = app.post("/deliveries", json!({ "name": "D" })).await;
        let d1 = id_of(&courier);

        let (_, assigned) = app
            .post(
                "/meals",
                json!({ "patientId": id_of(&patient), "assignedDeliveryPersonnel": &d1, "status": "ready" }),
            )
            .await;
        let (_, listed) = app.post("/meals", json!({ "patientId": id_of(&patient) })).await;
        app.patch(&format!("/deliveries/{}", d1), json!({ "assignedTasks": [id_of(&listed)] }))
            .await;

        let (status, body) = app.get("/delivery-personnel/tasks").await;
        assert_eq!(status, 200);

        let meal = &body[0]["assignedMeals"][0];
        assert_eq!(meal["_id"], assigned["_id"]);
        assert_eq!(meal["patientDetails"][0]["name"], "A");
        assert_eq!(meal["patientDetails"][0]["roomNumber"], "214");

        let task = &body[0]["tasks"][0];
        assert_eq!(task["_id"], listed["_id"]);
        assert_eq!(task["patientDetails"][0]["roomNumber"], "214");
    }

    #[actix_web::test]
    async fn test_update_through_aliases() {
        let app = TestApp::new();
        let (status, courier) = app.post("/deliveries", json!({ "name": "D" })).await;
        assert_eq!(status, 201);
        let d1 = id_of(&courier);

        let (status, ack) = app
            .patch(&format!("/deliveries/{}", d1), json!({ "location": "Ward 3" }))
            .await;
        assert_eq!(status, 200);
        assert_eq!(ack["matchedCount"], 1);

        let (status, ack) = app
            .send(
                TestRequest::put()
                    .uri(&format!("/delivery-personnel/{}", d1))
                    .set_json(json!({ "contactNumber": "555-0199" })),
            )
            .await;
        assert_eq!(status, 200);
        assert_eq!(ack["modifiedCount"], 1);

        let (_, fetched) = app.get(&format!("/delivery-personnel/{}", d1)).await;
        assert_eq!(fetched["name"], "D");
        assert_eq!(fetched["location"], "Ward 3");
        assert_eq!(fetched["contactNumber"], "555-0199");
    }
}
