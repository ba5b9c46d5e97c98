pub use super::launch::Entity as Launch;
pub use super::planet::Entity as Planet;
