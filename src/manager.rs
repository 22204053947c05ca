//! Session issue, verification and revocation.

use tracing::{debug, info, instrument, warn};

use crate::config::SessionConfig;
use crate::error::AuthError;
use crate::model::{OwnerId, SessionRecord};
use crate::store::SessionStore;
use crate::token::Token;

/// Owns the lifecycle of session records: `Active -> Revoked`, nothing else.
///
/// There is no in-process locking. Concurrent calls race at the store, and
/// every operation is either a single store write or, for
/// [`revoke`](Self::revoke), an idempotent lookup-then-write that is safe to
/// retry in full.
#[derive(Debug, Clone)]
pub struct SessionManager<S> {
    store: S,
    config: SessionConfig,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: SessionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Mint and persist a new active session for `owner_id`.
    ///
    /// The token is not checked for uniqueness before insert; 512 bits of
    /// entropy make a collision negligible, and a collision would surface
    /// as a store error rather than a shared token.
    ///
    /// When multiple sessions are disabled, the owner's other active
    /// sessions are deactivated first.
    #[instrument(skip(self))]
    pub async fn issue(&self, owner_id: OwnerId) -> Result<SessionRecord, AuthError> {
        if !self.config.allow_multiple_sessions {
            let revoked = self
                .store
                .deactivate_owner_sessions(owner_id)
                .await
                .inspect_err(|e| warn!(error = %e, "failed to deactivate previous sessions"))?;
            if revoked > 0 {
                debug!(revoked, "deactivated previous sessions");
            }
        }

        let record = SessionRecord::new(owner_id);
        self.store
            .put(&record)
            .await
            .inspect_err(|e| warn!(error = %e, "failed to persist session"))?;

        info!(session_id = %record.session_id, "session issued");
        Ok(record)
    }

    /// Resolve `token` to its session, failing unless the session is active.
    ///
    /// # Errors
    ///
    /// * [`AuthError::MissingToken`] for an empty token.
    /// * [`AuthError::SessionNotFound`] if no record holds this token.
    /// * [`AuthError::SessionInactive`] if the record was revoked.
    /// * [`AuthError::StoreUnavailable`] if the session store fails.
    #[instrument(skip_all)]
    pub async fn verify(&self, token: &str) -> Result<SessionRecord, AuthError> {
        let record = self.lookup(token).await?;
        if !record.active {
            debug!(session_id = %record.session_id, "session inactive");
            return Err(AuthError::SessionInactive);
        }
        Ok(record)
    }

    /// Revoke the session holding `token`.
    ///
    /// Revoking an already revoked session succeeds without changing it.
    #[instrument(skip_all)]
    pub async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        let record = self.lookup(token).await?;

        let addressed = self
            .store
            .update_active(record.session_id, false)
            .await
            .inspect_err(|e| warn!(error = %e, "failed to revoke session"))?;

        // Only if the record was removed out-of-band after the lookup.
        if !addressed {
            return Err(AuthError::SessionNotFound);
        }

        info!(session_id = %record.session_id, was_active = record.active, "session revoked");
        Ok(())
    }

    async fn lookup(&self, token: &str) -> Result<SessionRecord, AuthError> {
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }
        if !Token::is_well_formed(token) {
            debug!("malformed token");
            return Err(AuthError::SessionNotFound);
        }

        self.store
            .find_by_token(token)
            .await
            .inspect_err(|e| warn!(error = %e, "session lookup failed"))?
            .ok_or(AuthError::SessionNotFound)
    }
}
