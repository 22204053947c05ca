//! Store capabilities the session subsystem depends on.
//!
//! Both traits are injected at construction time. [`MemoryStore`] implements
//! both for tests; [`SeaOrmStore`](crate::SeaOrmStore) implements both on a
//! relational database.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::model::{OwnerId, OwnerRecord, SessionRecord};

mod memory;

pub use memory::MemoryStore;

/// Failures surfaced by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected or failed the call.
    #[error("backend error: {0}")]
    Backend(String),

    /// A value could not be converted into its stored form.
    #[error("encode error: {0}")]
    Encode(String),

    /// A stored value could not be converted back.
    #[error("decode error: {0}")]
    Decode(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to the owner (student / professor) records.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn find_by_id(&self, owner_id: OwnerId) -> StoreResult<Option<OwnerRecord>>;
}

/// Persistence for session records.
///
/// Implementations key records by token, so [`find_by_token`](Self::find_by_token)
/// is a point lookup. Each call must be atomic on its own; no call spans
/// more than one logical write except
/// [`deactivate_owner_sessions`](Self::deactivate_owner_sessions), which may
/// touch many records but only ever sets `active = false`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a newly issued record.
    async fn put(&self, record: &SessionRecord) -> StoreResult<()>;

    /// The record holding exactly this token, active or not.
    async fn find_by_token(&self, token: &str) -> StoreResult<Option<SessionRecord>>;

    /// Set the `active` flag of the record addressed by `session_id`.
    ///
    /// Returns whether a record was addressed.
    async fn update_active(&self, session_id: Uuid, active: bool) -> StoreResult<bool>;

    /// Mark every active session of `owner_id` inactive, returning how many changed.
    async fn deactivate_owner_sessions(&self, owner_id: OwnerId) -> StoreResult<u64>;
}
