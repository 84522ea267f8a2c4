//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for sparse updates
//! - A typed filter struct for list queries where the resource is listable

pub mod attribute;
pub mod category;
pub mod city;
pub mod order;
pub mod project;
pub mod project_attribute;
pub mod project_image;
pub mod session;
pub mod unit;
pub mod user;
