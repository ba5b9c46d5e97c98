//! Serializable request and response types exchanged over the HTTP API.

pub mod api;
pub mod launch;
pub mod planet;
