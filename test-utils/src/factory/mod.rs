//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each entity has
//! a `Factory` struct for customization and a `create_*` convenience function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let planet = factory::planet::create_planet(&db, "Kepler-442 b").await?;
//! let launch = factory::launch::create_launch(&db).await?;
//!
//! let launch = factory::launch::LaunchFactory::new(&db)
//!     .flight_number(150)
//!     .upcoming(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `launch` - Create launch entities
//! - `planet` - Create destination planet entities
//! - `helpers` - Unique id generation and bulk helpers

pub mod helpers;
pub mod launch;
pub mod planet;

pub use launch::{create_launch, create_launch_with_flight_number};
pub use planet::create_planet;
