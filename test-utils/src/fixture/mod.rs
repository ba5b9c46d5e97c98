//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models and external catalog documents for use in unit
//! tests and as default values for factories. Unlike factories, fixtures do NOT insert data
//! into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // In-memory launch row (no DB)
//! let launch = fixture::launch::entity();
//!
//! // Catalog document as returned by the external launch query endpoint
//! let doc = fixture::spacex::launch_doc(1, "FalconSat");
//! ```

pub mod launch;
pub mod spacex;

pub use launch::{entity as launch_entity, entity_builder as launch_entity_builder};
