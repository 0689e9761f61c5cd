use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpResponse,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::sync::Arc;

use crate::api::ErrorResponse;
use crate::services::auth_service;

pub use crate::services::auth_service::Claims;

/// Served without a token: health checks and the API docs.
fn is_public(path: &str) -> bool {
    path == "/health"
        || ["/swagger-ui", "/api-docs"]
            .iter()
            .any(|prefix| path == *prefix || path.starts_with(&format!("{}/", prefix)))
}

/// Rejects requests without a valid `Authorization: Bearer <jwt>` header
/// before they reach any handler. Verified claims go into the request
/// extensions.
#[derive(Clone)]
pub struct AuthMiddleware {
    secret: Arc<str>,
}

impl AuthMiddleware {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: Arc::from(secret),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            secret: self.secret.clone(),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    secret: Arc<str>,
}

impl<S> AuthMiddlewareService<S> {
    fn verify(&self, req: &ServiceRequest) -> Result<Claims, String> {
        let token = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| "Missing authorization token".to_string())?;

        auth_service::verify_token(token, &self.secret).map_err(|e| e.to_string())
    }
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !is_public(req.path()) {
            match self.verify(&req) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                }
                Err(reason) => {
                    log::warn!("🔒 Rejected {} {}: {}", req.method(), req.path(), reason);
                    let response = HttpResponse::Unauthorized().json(ErrorResponse::new(reason));
                    return Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) });
                }
            }
        }

        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
    }
}
