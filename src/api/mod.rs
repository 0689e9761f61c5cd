pub mod dashboard;
pub mod delivery_personnel;
pub mod food_charts;
pub mod health;
pub mod meals;
pub mod pantry_staff;
pub mod patients;
pub mod swagger;

use actix_web::{error::InternalError, web, HttpResponse};
use mongodb::bson::Document;
use serde::Serialize;

use crate::{
    store::UpdateAck,
    utils::{
        bson_json::{document_to_json, documents_to_json},
        error::AppError,
    },
};

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        Self {
            success: false,
            error: error.to_string(),
        }
    }
}

/// Registers every resource route.
///
/// Literal segments (`/tasks`, `/status`) are registered before `{id}` so
/// they take precedence over the identifier form.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(&err));
        InternalError::from_response(err, response).into()
    }))
    .route("/health", web::get().to(health::health_check))
    // Patients
    .service(
        web::scope("/patients")
            .route("", web::post().to(patients::create_patient))
            .route("", web::get().to(patients::list_patients))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(patients::get_patient))
                    .route(web::patch().to(patients::update_patient)),
            ),
    )
    // Food charts
    .service(
        web::scope("/food-charts")
            .route("", web::post().to(food_charts::create_food_chart))
            .route("", web::get().to(food_charts::list_food_charts))
            .route("/{patient_id}", web::get().to(food_charts::get_food_chart_for_patient)),
    )
    // Meals
    .service(
        web::scope("/meals")
            .route("", web::post().to(meals::create_meal))
            .route("", web::get().to(meals::list_meals))
            .route("/status", web::get().to(meals::get_meals_by_status))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(meals::get_meal))
                    .route(web::patch().to(meals::update_meal)),
            ),
    )
    // Pantry staff (+ "/pantry" alias)
    .service(
        web::scope("/pantry-staff")
            .route("", web::post().to(pantry_staff::create_pantry_staff))
            .route("", web::get().to(pantry_staff::list_pantry_staff))
            .route("/tasks", web::get().to(pantry_staff::list_pantry_staff_tasks))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(pantry_staff::get_pantry_staff))
                    .route(web::patch().to(pantry_staff::update_pantry_staff)),
            ),
    )
    .service(
        web::resource("/pantry")
            .route(web::post().to(pantry_staff::create_pantry_staff))
            .route(web::get().to(pantry_staff::list_pantry_staff)),
    )
    // Delivery personnel (+ "/deliveries" alias)
    .service(
        web::scope("/delivery-personnel")
            .route("", web::post().to(delivery_personnel::create_delivery_personnel))
            .route("", web::get().to(delivery_personnel::list_delivery_personnel))
            .route("/tasks", web::get().to(delivery_personnel::list_delivery_tasks))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(delivery_personnel::get_delivery_personnel))
                    .route(web::patch().to(delivery_personnel::update_delivery_personnel))
                    .route(web::put().to(delivery_personnel::update_delivery_personnel)),
            ),
    )
    .service(
        web::scope("/deliveries")
            .route("", web::post().to(delivery_personnel::create_delivery_personnel))
            .route("", web::get().to(delivery_personnel::list_delivery_tasks))
            .service(
                web::resource("/{id}")
                    .route(web::patch().to(delivery_personnel::update_delivery_personnel))
                    .route(web::put().to(delivery_personnel::update_delivery_personnel)),
            ),
    )
    // Dashboard
    .route("/dashboard/status", web::get().to(dashboard::get_dashboard_status));
}

// ==================== RESPONSE HELPERS ====================
// Escritas falham com 400; leituras com 500 (exceto identificador inválido)

pub(crate) fn write_failure(context: &str, e: AppError) -> HttpResponse {
    log::error!("❌ {}: {}", context, e);
    HttpResponse::BadRequest().json(ErrorResponse::new(e))
}

pub(crate) fn read_failure(context: &str, e: AppError) -> HttpResponse {
    log::error!("❌ {}: {}", context, e);
    match e {
        AppError::InvalidIdentifier(_) | AppError::ValidationError(_) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(e))
        }
        _ => HttpResponse::InternalServerError().json(ErrorResponse::new(e)),
    }
}

pub(crate) fn created(context: &str, result: Result<Document, AppError>) -> HttpResponse {
    match result {
        Ok(document) => HttpResponse::Created().json(document_to_json(document)),
        Err(e) => write_failure(context, e),
    }
}

pub(crate) fn updated(context: &str, result: Result<UpdateAck, AppError>) -> HttpResponse {
    match result {
        Ok(ack) => {
            log::info!("✅ {}: matched {}, modified {}", context, ack.matched_count, ack.modified_count);
            HttpResponse::Ok().json(ack)
        }
        Err(e) => write_failure(context, e),
    }
}

/// A single document, or JSON `null` when absent.
pub(crate) fn found(context: &str, result: Result<Option<Document>, AppError>) -> HttpResponse {
    match result {
        Ok(document) => HttpResponse::Ok().json(document.map(document_to_json)),
        Err(e) => read_failure(context, e),
    }
}

pub(crate) fn listed(context: &str, result: Result<Vec<Document>, AppError>) -> HttpResponse {
    match result {
        Ok(documents) => {
            log::info!("✅ {}: {} documents", context, documents.len());
            HttpResponse::Ok().json(documents_to_json(documents))
        }
        Err(e) => read_failure(context, e),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use actix_web::{body::MessageBody, dev::ServiceResponse, test, web, App};
    use serde_json::Value;

    use crate::middleware::AuthMiddleware;
    use crate::store::{EntityStore, MemoryStore};

    /// Builds the real routing around a shared store for every request.
    pub struct TestApp {
        pub store: Arc<MemoryStore>,
        secret: Option<String>,
    }

    impl TestApp {
        pub fn new() -> Self {
            Self {
                store: Arc::new(MemoryStore::new()),
                secret: None,
            }
        }

        pub fn gated(secret: &str) -> Self {
            Self {
                store: Arc::new(MemoryStore::new()),
                secret: Some(secret.to_string()),
            }
        }

        fn data(&self) -> web::Data<dyn EntityStore> {
            let store: Arc<dyn EntityStore> = self.store.clone();
            web::Data::from(store)
        }

        pub async fn get(&self, uri: &str) -> (u16, Value) {
            self.send(test::TestRequest::get().uri(uri)).await
        }

        pub async fn post(&self, uri: &str, body: Value) -> (u16, Value) {
            self.send(test::TestRequest::post().uri(uri).set_json(body)).await
        }

        pub async fn patch(&self, uri: &str, body: Value) -> (u16, Value) {
            self.send(test::TestRequest::patch().uri(uri).set_json(body)).await
        }

        pub async fn send(&self, request: test::TestRequest) -> (u16, Value) {
            match &self.secret {
                None => {
                    let app = test::init_service(
                        App::new().app_data(self.data()).configure(super::configure),
                    )
                    .await;
                    read(test::call_service(&app, request.to_request()).await).await
                }
                Some(secret) => {
                    let app = test::init_service(
                        App::new()
                            .app_data(self.data())
                            .wrap(AuthMiddleware::new(secret))
                            .configure(super::configure),
                    )
                    .await;
                    read(test::call_service(&app, request.to_request()).await).await
                }
            }
        }
    }

    async fn read<B: MessageBody>(res: ServiceResponse<B>) -> (u16, Value) {
        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
        };
        (status, json)
    }

    pub fn id_of(document: &Value) -> String {
        document["_id"].as_str().unwrap().to_string()
    }
}
