//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. List methods take a typed
//! filter struct whose supplied fields are ANDed into the WHERE clause.

pub mod attribute_repo;
pub mod category_repo;
pub mod city_repo;
pub mod order_repo;
pub mod project_attribute_repo;
pub mod project_image_repo;
pub mod project_repo;
pub mod session_repo;
pub mod unit_repo;
pub mod user_repo;

pub use attribute_repo::AttributeRepo;
pub use category_repo::CategoryRepo;
pub use city_repo::CityRepo;
pub use order_repo::OrderRepo;
pub use project_attribute_repo::ProjectAttributeRepo;
pub use project_image_repo::ProjectImageRepo;
pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use unit_repo::UnitRepo;
pub use user_repo::UserRepo;
