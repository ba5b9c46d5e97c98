use sea_orm::entity::prelude::*;

/// A launch record keyed by its flight number.
///
/// Flight numbers are assigned by the external catalog for imported launches and
/// by the application for scheduled ones, so the key is never auto-incremented.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "launch")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub flight_number: i32,
    pub mission: String,
    pub rocket: String,
    pub launch_date: DateTimeUtc,
    /// JSON array of customer names, in payload order.
    pub customers: Json,
    pub upcoming: bool,
    pub success: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
