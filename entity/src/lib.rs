//! SeaORM entity models for the launch and planet tables.

pub mod prelude;

pub mod launch;
pub mod planet;
