use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Condition, middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use hospital_food_service::{
    api,
    config::Config,
    database,
    middleware,
    store::{EntityStore, MemoryStore},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("❌ Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    log::info!("🚀 Starting Hospital Food Service...");

    let store: Arc<dyn EntityStore> = if config.uses_memory_store() {
        log::warn!("⚠️ Using in-memory store: data is lost on restart");
        Arc::new(MemoryStore::new())
    } else {
        log::info!("📊 Database: {}", config.database_name);

        let db = database::connect(&config.database_url, &config.database_name)
            .await
            .map_err(|e| {
                log::error!("❌ Invalid database URL: {}", e);
                std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
            })?;

        Arc::new(db)
    };
    let store_data: web::Data<dyn EntityStore> = web::Data::from(store);

    let secret = config.jwt_secret.clone().unwrap_or_default();
    if config.auth_enabled() {
        log::info!("🔒 Bearer token authentication enabled");
    } else {
        log::warn!("⚠️ JWT_SECRET not set: endpoints are open");
    }

    let host = config.host.clone();
    let port = config.port;
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    let openapi = api::swagger::ApiDoc::openapi();

    // Start HTTP server
    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        if config.cors_allowed_origins.is_empty() {
            cors = cors.allow_any_origin();
        } else {
            for origin in &config.cors_allowed_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        App::new()
            .app_data(store_data.clone())
            .wrap(Condition::new(config.auth_enabled(), middleware::AuthMiddleware::new(&secret)))
            .wrap(cors)
            .wrap(middleware::SecurityHeaders)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            .configure(api::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
