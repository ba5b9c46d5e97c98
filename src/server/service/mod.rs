//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Flight number assignment, defaults, destination validation
//! - **Orchestration**: Coordinating repository calls and the external launch catalog
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod import;
pub mod launch;
pub mod planet;
