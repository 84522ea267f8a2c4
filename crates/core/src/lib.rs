//! Framework-free domain types and business rules for the stroyka backend.
//!
//! Everything here is usable without a database or HTTP stack: the error
//! taxonomy, role constants, credential validation, and the order status
//! workflow (transition date-stamping and update validation).

pub mod credentials;
pub mod error;
pub mod order;
pub mod roles;
pub mod types;
