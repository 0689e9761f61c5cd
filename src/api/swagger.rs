use utoipa::OpenApi;
use utoipa::openapi::security::{SecurityScheme, HttpAuthScheme, HttpBuilder};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hospital Food Service API",
        version = "1.0.0",
        description = "Coordination backend for hospital food service: patients, food charts/meals, pantry staff and delivery personnel.\n\n**Authentication:** when the service runs with `JWT_SECRET`, every endpoint except `/health` requires a Bearer token.\n\n**Identifiers:** every `_id` and reference field is a 24-character hex ObjectId."
    ),
    paths(
        // Health
        crate::api::health::health_check,

        // Patients
        crate::api::patients::create_patient,
        crate::api::patients::list_patients,
        crate::api::patients::get_patient,
        crate::api::patients::update_patient,

        // Food charts
        crate::api::food_charts::create_food_chart,
        crate::api::food_charts::list_food_charts,
        crate::api::food_charts::get_food_chart_for_patient,

        // Meals
        crate::api::meals::create_meal,
        crate::api::meals::get_meals_by_status,
        crate::api::meals::update_meal,

        // Pantry
        crate::api::pantry_staff::create_pantry_staff,
        crate::api::pantry_staff::list_pantry_staff,
        crate::api::pantry_staff::list_pantry_staff_tasks,
        crate::api::pantry_staff::update_pantry_staff,

        // Delivery
        crate::api::delivery_personnel::create_delivery_personnel,
        crate::api::delivery_personnel::list_delivery_personnel,
        crate::api::delivery_personnel::list_delivery_tasks,
        crate::api::delivery_personnel::update_delivery_personnel,

        // Dashboard
        crate::api::dashboard::get_dashboard_status,
    ),
    components(
        schemas(
            crate::models::Patient,
            crate::models::Meal,
            crate::models::MealStatus,
            crate::models::PantryStaff,
            crate::models::DeliveryPersonnel,
            crate::store::UpdateAck,
            crate::api::ErrorResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service and database health."),
        (name = "Patients", description = "Patient records."),
        (name = "Food Charts", description = "Diet plans per patient, returned with the patient attached."),
        (name = "Meals", description = "Meal preparation and delivery status."),
        (name = "Pantry", description = "Pantry staff and the meals assigned to them."),
        (name = "Delivery", description = "Delivery personnel and the meals assigned to them."),
        (name = "Dashboard", description = "Combined status snapshot."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token issued with the issue-token binary"))
                        .build()
                ),
            );
        }
    }
}
