pub mod auth_service;
pub mod dashboard_service;
pub mod entity_service;
pub mod projection;
pub mod relations;

pub use projection::{Projection, Relationship};
