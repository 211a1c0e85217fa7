//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod budget_category;
pub mod budget_item;
pub mod production;
pub mod scenario;
pub mod show;
pub mod venue;
