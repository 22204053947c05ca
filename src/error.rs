//! Error taxonomy for login, verification and logout.

use thiserror::Error;

use crate::model::OwnerId;
use crate::store::StoreError;

/// Every way a login, verify or logout call can be rejected.
///
/// All variants are recoverable at the boundary: a caller maps each one to
/// a client-facing rejection. Nothing in this crate retries on its own.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no secret was submitted")]
    MissingSecret,

    #[error("no token was submitted")]
    MissingToken,

    #[error("owner {0} not found")]
    OwnerNotFound(OwnerId),

    #[error("submitted secret does not match")]
    SecretMismatch,

    #[error("session not found")]
    SessionNotFound,

    #[error("session is no longer active")]
    SessionInactive,

    /// The entity or session store failed. Propagated unchanged.
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}
