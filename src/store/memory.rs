use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use super::{EntityStore, SessionStore, StoreError, StoreResult};
use crate::model::{OwnerId, OwnerRecord, SessionRecord};

#[derive(Debug, Default)]
struct Inner {
    owners: HashMap<OwnerId, OwnerRecord>,
    // token -> record
    sessions: HashMap<String, SessionRecord>,
    // session_id -> token
    by_session_id: HashMap<Uuid, String>,
}

/// In-process implementation of both stores.
///
/// Cloning shares the same underlying maps, so one handle can be given to
/// the verifier and another to the session manager.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an owner record, replacing any record with the same id.
    pub fn insert_owner(&self, owner: OwnerRecord) {
        self.inner.write().owners.insert(owner.id, owner);
    }

    /// Number of session records ever stored.
    pub fn session_count(&self) -> usize {
        self.inner.read().sessions.len()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn find_by_id(&self, owner_id: OwnerId) -> StoreResult<Option<OwnerRecord>> {
        Ok(self.inner.read().owners.get(&owner_id).cloned())
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn put(&self, record: &SessionRecord) -> StoreResult<()> {
        let mut inner = self.inner.write();
        let token = record.token.as_str();
        if inner.sessions.contains_key(token) || inner.by_session_id.contains_key(&record.session_id)
        {
            return Err(StoreError::Backend("duplicate session key".into()));
        }
        inner
            .by_session_id
            .insert(record.session_id, token.to_string());
        inner.sessions.insert(token.to_string(), record.clone());
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> StoreResult<Option<SessionRecord>> {
        Ok(self.inner.read().sessions.get(token).cloned())
    }

    async fn update_active(&self, session_id: Uuid, active: bool) -> StoreResult<bool> {
        let mut inner = self.inner.write();
        let Some(token) = inner.by_session_id.get(&session_id).cloned() else {
            return Ok(false);
        };
        match inner.sessions.get_mut(&token) {
            Some(record) => {
                record.active = active;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn deactivate_owner_sessions(&self, owner_id: OwnerId) -> StoreResult<u64> {
        let mut inner = self.inner.write();
        let mut changed = 0;
        for record in inner.sessions.values_mut() {
            if record.owner_id == owner_id && record.active {
                record.active = false;
                changed += 1;
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OwnerKind;

    #[tokio::test]
    async fn put_then_find_by_token() {
        let store = MemoryStore::new();
        let record = SessionRecord::new(OwnerId(1));
        store.put(&record).await.unwrap();

        let found = store.find_by_token(record.token.as_str()).await.unwrap();
        assert_eq!(found, Some(record));
        assert_eq!(store.find_by_token("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_put_is_rejected() {
        let store = MemoryStore::new();
        let record = SessionRecord::new(OwnerId(1));
        store.put(&record).await.unwrap();
        assert!(matches!(
            store.put(&record).await,
            Err(StoreError::Backend(_))
        ));
        assert_eq!(store.session_count(), 1);
    }

    #[tokio::test]
    async fn update_active_addresses_by_session_id() {
        let store = MemoryStore::new();
        let record = SessionRecord::new(OwnerId(1));
        store.put(&record).await.unwrap();

        assert!(store.update_active(record.session_id, false).await.unwrap());
        assert!(!store.update_active(Uuid::new_v4(), false).await.unwrap());

        let found = store
            .find_by_token(record.token.as_str())
            .await
            .unwrap()
            .unwrap();
        assert!(!found.active);
    }

    #[tokio::test]
    async fn deactivate_owner_sessions_only_touches_that_owner() {
        let store = MemoryStore::new();
        let a1 = SessionRecord::new(OwnerId(1));
        let a2 = SessionRecord::new(OwnerId(1));
        let b = SessionRecord::new(OwnerId(2));
        for r in [&a1, &a2, &b] {
            store.put(r).await.unwrap();
        }

        assert_eq!(store.deactivate_owner_sessions(OwnerId(1)).await.unwrap(), 2);
        assert_eq!(store.deactivate_owner_sessions(OwnerId(1)).await.unwrap(), 0);

        let b = store.find_by_token(b.token.as_str()).await.unwrap().unwrap();
        assert!(b.active);
    }

    #[tokio::test]
    async fn owners_are_shared_between_clones() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.insert_owner(OwnerRecord {
            id: OwnerId(42),
            kind: OwnerKind::Student,
            first_names: "Ada".into(),
            last_names: "Lovelace".into(),
            secret: Some("hunter2".into()),
        });
        assert!(handle.find_by_id(OwnerId(42)).await.unwrap().is_some());
        assert!(handle.find_by_id(OwnerId(43)).await.unwrap().is_none());
    }
}
