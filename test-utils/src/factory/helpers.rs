//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::launch::LaunchFactory;

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates one launch per flight number, inserted in the given order.
///
/// Insertion order is deliberately left to the caller so ordering tests can insert
/// out of sequence.
///
/// # Arguments
/// - `db` - Database connection
/// - `flight_numbers` - Flight numbers to create
///
/// # Returns
/// - `Ok(Vec<entity::launch::Model>)` - Created launches in insertion order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_launches(
    db: &DatabaseConnection,
    flight_numbers: &[i32],
) -> Result<Vec<entity::launch::Model>, DbErr> {
    let mut launches = Vec::with_capacity(flight_numbers.len());

    for &flight_number in flight_numbers {
        let launch = LaunchFactory::new(db)
            .flight_number(flight_number)
            .mission(format!("Mission {}", flight_number))
            .build()
            .await?;
        launches.push(launch);
    }

    Ok(launches)
}
