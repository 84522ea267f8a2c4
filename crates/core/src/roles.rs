//! Well-known role names stored in the `users.role` column.

/// Full access: may list all users, see every order, delete any resource.
pub const ROLE_ADMIN: &str = "ADMIN";

/// Default role for registered customers.
pub const ROLE_USER: &str = "USER";
