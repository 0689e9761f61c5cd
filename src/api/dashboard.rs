use actix_web::{web, HttpResponse};

use super::read_failure;
use crate::{services::dashboard_service, store::EntityStore};

/// GET /dashboard/status - Visão consolidada de refeições e atribuições
#[utoipa::path(
    get,
    path = "/dashboard/status",
    tag = "Dashboard",
    responses(
        (status = 200, description = "mealsStatus, statusCounts, pantryStaffTasks and deliveryTasks"),
        (status = 500, description = "Store failure", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_dashboard_status(store: web::Data<dyn EntityStore>) -> HttpResponse {
    log::info!("📊 GET /dashboard/status");

    match dashboard_service::snapshot(store.get_ref()).await {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(e) => read_failure("Error building dashboard", e),
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{id_of, TestApp};
    use serde_json::json;

    #[actix_web::test]
    async fn test_dashboard_snapshot() {
        let app = TestApp::new();
        let (_, patient) = app.post("/patients", json!({ "name": "A" })).await;
        let (_, cook) = app.post("/pantry-staff", json!({ "name": "B" })).await;
        let (_, courier) = app.post("/delivery-personnel", json!({ "name": "D" })).await;

        app.post(
            "/meals",
            json!({
                "patientId": id_of(&patient),
                "status": "ready",
                "assignedPantryStaff": id_of(&cook),
                "assignedDeliveryPersonnel": id_of(&courier)
            }),
        )
        .await;
        app.post("/meals", json!({ "status": "pending" })).await;

        let (status, body) = app.get("/dashboard/status").await;
        assert_eq!(status, 200);

        let meals = body["mealsStatus"].as_array().unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0]["patientDetails"][0]["name"], "A");
        assert_eq!(meals[1]["patientDetails"], json!([]));

        assert_eq!(body["statusCounts"]["ready"], 1);
        assert_eq!(body["statusCounts"]["pending"], 1);
        assert_eq!(body["statusCounts"]["delivered"], 0);

        assert_eq!(body["pantryStaffTasks"][0]["assignedMeals"].as_array().unwrap().len(), 1);
        assert_eq!(body["deliveryTasks"][0]["assignedMeals"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_empty_dashboard() {
        let app = TestApp::new();
        let (status, body) = app.get("/dashboard/status").await;
        assert_eq!(status, 200);
        assert_eq!(body["mealsStatus"], json!([]));
        assert_eq!(body["pantryStaffTasks"], json!([]));
        assert_eq!(body["deliveryTasks"], json!([]));
    }
}
