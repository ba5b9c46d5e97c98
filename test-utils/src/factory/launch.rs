//! Launch factory for creating test launch entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{
    factory::helpers::next_id,
    fixture::launch::{entity_builder, LaunchEntityBuilder},
};

/// Factory for creating test launches with customizable fields.
///
/// Defaults come from `fixture::launch`, except the flight number which is taken from the
/// shared counter (offset well above the scheduling default) so factory rows never collide.
///
/// # Example
///
/// ```rust,ignore
/// let launch = LaunchFactory::new(&db)
///     .flight_number(7)
///     .rocket("Falcon 9")
///     .success(None)
///     .build()
///     .await?;
/// ```
pub struct LaunchFactory<'a> {
    db: &'a DatabaseConnection,
    entity: LaunchEntityBuilder,
}

impl<'a> LaunchFactory<'a> {
    /// Creates a new LaunchFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let flight_number = 1_000 + next_id() as i32;
        Self {
            db,
            entity: entity_builder()
                .flight_number(flight_number)
                .mission(format!("Mission {}", flight_number)),
        }
    }

    pub fn flight_number(mut self, flight_number: i32) -> Self {
        self.entity = self.entity.flight_number(flight_number);
        self
    }

    pub fn mission(mut self, mission: impl Into<String>) -> Self {
        self.entity = self.entity.mission(mission);
        self
    }

    pub fn rocket(mut self, rocket: impl Into<String>) -> Self {
        self.entity = self.entity.rocket(rocket);
        self
    }

    pub fn launch_date(mut self, launch_date: DateTime<Utc>) -> Self {
        self.entity = self.entity.launch_date(launch_date);
        self
    }

    pub fn customers(mut self, customers: Vec<String>) -> Self {
        self.entity = self.entity.customers(customers);
        self
    }

    pub fn upcoming(mut self, upcoming: bool) -> Self {
        self.entity = self.entity.upcoming(upcoming);
        self
    }

    pub fn success(mut self, success: Option<bool>) -> Self {
        self.entity = self.entity.success(success);
        self
    }

    /// Builds and inserts the launch entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::launch::Model)` - Created launch entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate flight number)
    pub async fn build(self) -> Result<entity::launch::Model, DbErr> {
        let model = self.entity.build();

        entity::launch::ActiveModel {
            flight_number: ActiveValue::Set(model.flight_number),
            mission: ActiveValue::Set(model.mission),
            rocket: ActiveValue::Set(model.rocket),
            launch_date: ActiveValue::Set(model.launch_date),
            customers: ActiveValue::Set(model.customers),
            upcoming: ActiveValue::Set(model.upcoming),
            success: ActiveValue::Set(model.success),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a launch with default values.
///
/// Shorthand for `LaunchFactory::new(db).build().await`.
pub async fn create_launch(db: &DatabaseConnection) -> Result<entity::launch::Model, DbErr> {
    LaunchFactory::new(db).build().await
}

/// Creates a launch with default values and the given flight number.
pub async fn create_launch_with_flight_number(
    db: &DatabaseConnection,
    flight_number: i32,
) -> Result<entity::launch::Model, DbErr> {
    LaunchFactory::new(db)
        .flight_number(flight_number)
        .build()
        .await
}
