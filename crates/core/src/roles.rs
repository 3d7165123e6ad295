//! Well-known role name constants.
//!
//! These must match the `ck_users_role` check in
//! `20261017000002_create_users_table.sql`.

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// All roles a user may register with.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_USER];

/// Validate that `role` is one of [`VALID_ROLES`].
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Role must be one of: {}",
        VALID_ROLES.join(", ")
    )))
}
