//! HTTP request handlers.
//!
//! Controllers translate between the wire format (`crate::model` DTOs) and the service
//! layer's domain types. Each handler is annotated with `utoipa::path` so the router can
//! assemble the OpenAPI document from the registered routes.

pub mod launch;
pub mod planet;
