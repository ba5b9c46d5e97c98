//! Launch data repository for database operations.
//!
//! This module provides the `LaunchRepository`, the keyed store of launch records. Every
//! write is a single statement against one flight number, so a concurrent reader never
//! observes a partially written record. There are no cross-record transactions.

use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::launch::{Launch, LaunchFilter, UpdateLaunchParams, UpsertLaunchParam};

/// Flight number reported when the store holds no launches.
pub const DEFAULT_FLIGHT_NUMBER: i32 = 100;

/// SQLite rejects OFFSET without LIMIT, so an unbounded listing uses the largest bindable limit.
const UNBOUNDED_LIMIT: u64 = i64::MAX as u64;

/// Repository providing database operations for launch records.
pub struct LaunchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LaunchRepository<'a> {
    /// Creates a new LaunchRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the first launch matching every set field of the filter.
    ///
    /// # Arguments
    /// - `filter` - Field predicate; an empty filter matches any launch
    ///
    /// # Returns
    /// - `Ok(Some(Launch))` - A matching launch
    /// - `Ok(None)` - No launch matches
    /// - `Err(DbErr)` - Database error during query or malformed stored row
    pub async fn find(&self, filter: LaunchFilter) -> Result<Option<Launch>, DbErr> {
        let mut condition = Condition::all();
        if let Some(flight_number) = filter.flight_number {
            condition = condition.add(entity::launch::Column::FlightNumber.eq(flight_number));
        }
        if let Some(rocket) = filter.rocket {
            condition = condition.add(entity::launch::Column::Rocket.eq(rocket));
        }
        if let Some(mission) = filter.mission {
            condition = condition.add(entity::launch::Column::Mission.eq(mission));
        }

        let entity = entity::prelude::Launch::find()
            .filter(condition)
            .order_by_asc(entity::launch::Column::FlightNumber)
            .one(self.db)
            .await?;

        entity.map(Launch::from_entity).transpose()
    }

    /// Checks whether a launch with the given flight number exists.
    pub async fn exists_by_flight_number(&self, flight_number: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Launch::find()
            .filter(entity::launch::Column::FlightNumber.eq(flight_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists launches in ascending flight number order.
    ///
    /// # Arguments
    /// - `skip` - Number of launches dropped from the front
    /// - `limit` - Maximum number of launches returned; `None` returns all remaining
    ///
    /// # Returns
    /// - `Ok(Vec<Launch>)` - Up to `limit` launches after the first `skip`
    /// - `Err(DbErr)` - Database error during query or malformed stored row
    pub async fn list(&self, skip: u64, limit: Option<u64>) -> Result<Vec<Launch>, DbErr> {
        let entities = entity::prelude::Launch::find()
            .order_by_asc(entity::launch::Column::FlightNumber)
            .offset(skip)
            .limit(limit.unwrap_or(UNBOUNDED_LIMIT))
            .all(self.db)
            .await?;

        entities.into_iter().map(Launch::from_entity).collect()
    }

    /// Counts all launches in the store.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Launch::find().count(self.db).await
    }

    /// Inserts a launch or fully replaces the launch sharing its flight number.
    ///
    /// # Arguments
    /// - `param` - Complete launch record
    ///
    /// # Returns
    /// - `Ok(Launch)` - The stored launch
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertLaunchParam) -> Result<Launch, DbErr> {
        let entity = entity::prelude::Launch::insert(entity::launch::ActiveModel {
            flight_number: ActiveValue::Set(param.flight_number),
            mission: ActiveValue::Set(param.mission),
            rocket: ActiveValue::Set(param.rocket),
            launch_date: ActiveValue::Set(param.launch_date),
            customers: ActiveValue::Set(serde_json::Value::from(param.customers)),
            upcoming: ActiveValue::Set(param.upcoming),
            success: ActiveValue::Set(param.success),
        })
        .on_conflict(
            OnConflict::column(entity::launch::Column::FlightNumber)
                .update_columns([
                    entity::launch::Column::Mission,
                    entity::launch::Column::Rocket,
                    entity::launch::Column::LaunchDate,
                    entity::launch::Column::Customers,
                    entity::launch::Column::Upcoming,
                    entity::launch::Column::Success,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Launch::from_entity(entity)
    }

    /// Returns the highest flight number in the store.
    ///
    /// # Returns
    /// - `Ok(i32)` - Highest flight number, or `DEFAULT_FLIGHT_NUMBER` when the store is empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn latest_flight_number(&self) -> Result<i32, DbErr> {
        let latest = entity::prelude::Launch::find()
            .order_by_desc(entity::launch::Column::FlightNumber)
            .one(self.db)
            .await?;

        Ok(latest
            .map(|launch| launch.flight_number)
            .unwrap_or(DEFAULT_FLIGHT_NUMBER))
    }

    /// Applies a partial update to the launch with the given flight number.
    ///
    /// The returned count is the number of rows the update matched, which includes a row
    /// whose fields already held the patched values.
    ///
    /// # Arguments
    /// - `flight_number` - Flight number of the launch to update
    /// - `params` - Fields to write
    ///
    /// # Returns
    /// - `Ok(0)` - No launch with that flight number (or an empty patch)
    /// - `Ok(1)` - The launch was updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_by_flight_number(
        &self,
        flight_number: i32,
        params: UpdateLaunchParams,
    ) -> Result<u64, DbErr> {
        if params.is_empty() {
            return Ok(0);
        }

        let mut update = entity::prelude::Launch::update_many()
            .filter(entity::launch::Column::FlightNumber.eq(flight_number));

        if let Some(upcoming) = params.upcoming {
            update = update.col_expr(entity::launch::Column::Upcoming, Expr::value(upcoming));
        }
        if let Some(success) = params.success {
            update = update.col_expr(entity::launch::Column::Success, Expr::value(success));
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
