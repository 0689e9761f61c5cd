use actix_web::{web, HttpResponse};

use super::{created, found, listed};
use crate::{
    models::Meal,
    services::{entity_service, relations},
    store::{Collection, EntityStore},
};

/// POST /food-charts - Cria o plano alimentar de um paciente
#[utoipa::path(
    post,
    path = "/food-charts",
    tag = "Food Charts",
    request_body = Meal,
    responses(
        (status = 201, description = "Stored food chart document"),
        (status = 400, description = "Payload could not be stored", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_food_chart(
    store: web::Data<dyn EntityStore>,
    payload: web::Json<Meal>,
) -> HttpResponse {
    log::info!("📝 POST /food-charts");

    let result = entity_service::create(store.get_ref(), Collection::Meals, &payload.into_inner()).await;
    created("Error creating food chart", result)
}

/// GET /food-charts - Planos com os dados do paciente em `patientDetails`
#[utoipa::path(
    get,
    path = "/food-charts",
    tag = "Food Charts",
    responses(
        (status = 200, description = "Food charts, each with a patientDetails array"),
        (status = 500, description = "Store failure", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_food_charts(store: web::Data<dyn EntityStore>) -> HttpResponse {
    log::info!("📋 GET /food-charts");

    listed("Error listing food charts", relations::food_charts(store.get_ref()).await)
}

/// GET /food-charts/{patient_id}
#[utoipa::path(
    get,
    path = "/food-charts/{patient_id}",
    tag = "Food Charts",
    params(("patient_id" = String, Path, description = "Patient ObjectId")),
    responses(
        (status = 200, description = "The patient's food chart, or null"),
        (status = 400, description = "Malformed identifier", body = crate::api::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::api::ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_food_chart_for_patient(
    store: web::Data<dyn EntityStore>,
    patient_id: web::Path<String>,
) -> HttpResponse {
    log::info!("🔍 GET /food-charts/{}", patient_id);

    let result = relations::food_chart_for_patient(store.get_ref(), &patient_id).await;
    found("Error fetching food chart", result)
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{id_of, TestApp};
    use serde_json::json;

    #[actix_web::test]
    async fn test_food_charts_attach_patient_details() {
        let app = TestApp::new();
        let (_, patient) = app.post("/patients", json!({ "name": "A" })).await;
        let p1 = id_of(&patient);

        let (status, meal) = app
            .post("/meals", json!({ "patientId": p1, "status": "pending" }))
            .await;
        assert_eq!(status, 201);
        assert_eq!(meal["patientId"], p1);

        let (status, charts) = app.get("/food-charts").await;
        assert_eq!(status, 200);
        let charts = charts.as_array().unwrap();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0]["_id"], meal["_id"]);
        assert_eq!(charts[0]["status"], "pending");

        let details = charts[0]["patientDetails"].as_array().unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0]["name"], "A");
        assert_eq!(details[0]["_id"], p1);
    }

    #[actix_web::test]
    async fn test_chart_without_patient_has_empty_details() {
        let app = TestApp::new();
        app.post("/food-charts", json!({ "morningMeal": "Toast" })).await;
        app.post("/food-charts", json!({ "patientId": "65a1b2c3d4e5f60718293a4b" }))
            .await;

        let (_, charts) = app.get("/food-charts").await;
        for chart in charts.as_array().unwrap() {
            assert_eq!(chart["patientDetails"], json!([]));
        }
    }

    #[actix_web::test]
    async fn test_chart_for_patient() {
        let app = TestApp::new();
        let (_, patient) = app.post("/patients", json!({ "name": "A" })).await;
        let p1 = id_of(&patient);
        app.post("/food-charts", json!({ "patientId": p1, "nightMeal": "Soup" }))
            .await;

        let (status, chart) = app.get(&format!("/food-charts/{}", p1)).await;
        assert_eq!(status, 200);
        assert_eq!(chart["nightMeal"], "Soup");
        assert_eq!(chart["patientDetails"][0]["name"], "A");

        let (status, chart) = app.get("/food-charts/65a1b2c3d4e5f60718293a4b").await;
        assert_eq!(status, 200);
        assert!(chart.is_null());

        let (status, _) = app.get("/food-charts/p1").await;
        assert_eq!(status, 400);
    }

    #[actix_web::test]
    async fn test_malformed_patient_reference_is_rejected() {
        let app = TestApp::new();
        let (status, body) = app.post("/food-charts", json!({ "patientId": "p1" })).await;
        assert_eq!(status, 400);
        assert!(body["error"].as_str().unwrap().contains("not a valid identifier"));
    }
}
