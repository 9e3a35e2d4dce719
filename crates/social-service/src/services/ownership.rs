//! Ownership checks for mutating operations
//!
//! Reads bypass these checks entirely; every update and delete on a
//! user-owned resource goes through `ensure_owner` before touching storage.

use social_core::Snowflake;

use super::error::{ServiceError, ServiceResult};

/// Check whether the acting user owns the resource
#[inline]
pub fn is_owner(actor_id: Snowflake, owner_id: Snowflake) -> bool {
    actor_id == owner_id
}

/// Reject the operation unless the acting user owns the resource
pub fn ensure_owner(actor_id: Snowflake, owner_id: Snowflake) -> ServiceResult<()> {
    if is_owner(actor_id, owner_id) {
        Ok(())
    } else {
        Err(ServiceError::forbidden(
            "only the owner may modify this resource",
        ))
    }
}
