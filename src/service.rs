//! Login, verify and logout, as exposed to the HTTP layer.

use tracing::{debug, instrument};

use crate::config::SessionConfig;
use crate::error::AuthError;
use crate::manager::SessionManager;
use crate::model::{OwnerId, SessionView};
use crate::store::{EntityStore, SessionStore};
use crate::token::Token;
use crate::verifier::{CredentialVerifier, PlainTextVerifier, SecretVerifier};

/// Successful login result.
#[derive(Debug, Clone)]
pub struct LoginOutput {
    /// Bearer token to hand back to the owner.
    pub token: Token,
}

/// Composes a [`CredentialVerifier`] and a [`SessionManager`].
///
/// Generic over the store implementations so that the same service runs
/// against [`SeaOrmStore`](crate::SeaOrmStore) or [`MemoryStore`](crate::MemoryStore).
#[derive(Debug, Clone)]
pub struct AuthService<E, S, V = PlainTextVerifier> {
    credentials: CredentialVerifier<E, V>,
    sessions: SessionManager<S>,
}

impl<E: EntityStore, S: SessionStore> AuthService<E, S> {
    pub fn new(entities: E, sessions: S) -> Self {
        Self {
            credentials: CredentialVerifier::new(entities),
            sessions: SessionManager::new(sessions),
        }
    }
}

impl<E: EntityStore, S: SessionStore, V: SecretVerifier> AuthService<E, S, V> {
    /// Build from already configured parts.
    pub fn from_parts(credentials: CredentialVerifier<E, V>, sessions: SessionManager<S>) -> Self {
        Self {
            credentials,
            sessions,
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.sessions = self.sessions.with_config(config);
        self
    }

    pub fn sessions(&self) -> &SessionManager<S> {
        &self.sessions
    }

    /// Authenticate `owner_id` with `secret` and issue a session.
    #[instrument(skip(self, secret))]
    pub async fn login(&self, owner_id: OwnerId, secret: &str) -> Result<LoginOutput, AuthError> {
        let owner = self.credentials.authenticate(owner_id, secret).await?;
        let session = self.sessions.issue(owner.id).await?;
        debug!("login succeeded");
        Ok(LoginOutput {
            token: session.token,
        })
    }

    /// The session behind `token`, if it is still active.
    pub async fn verify(&self, token: &str) -> Result<SessionView, AuthError> {
        self.sessions.verify(token).await.map(|record| record.view())
    }

    /// Revoke the session behind `token`. Repeating a logout succeeds.
    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        self.sessions.revoke(token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OwnerKind, OwnerRecord};
    use crate::store::MemoryStore;
    use crate::token::TOKEN_LEN;

    fn service() -> (AuthService<MemoryStore, MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        store.insert_owner(OwnerRecord {
            id: OwnerId(42),
            kind: OwnerKind::Student,
            first_names: "Ada".into(),
            last_names: "Lovelace".into(),
            secret: Some("hunter2".into()),
        });
        (AuthService::new(store.clone(), store.clone()), store)
    }

    #[tokio::test]
    async fn login_verify_logout_scenario() {
        let (svc, _) = service();

        let token = svc.login(OwnerId(42), "hunter2").await.unwrap().token;
        assert_eq!(token.as_str().len(), TOKEN_LEN);
        assert!(Token::is_well_formed(token.as_str()));

        let view = svc.verify(token.as_str()).await.unwrap();
        assert!(view.active);
        assert_eq!(view.owner_id, OwnerId(42));

        svc.logout(token.as_str()).await.unwrap();
        assert!(matches!(
            svc.verify(token.as_str()).await,
            Err(AuthError::SessionInactive)
        ));

        svc.logout(token.as_str()).await.unwrap();
    }

    #[tokio::test]
    async fn wrong_secret_issues_nothing() {
        let (svc, store) = service();

        assert!(matches!(
            svc.login(OwnerId(42), "wrong").await,
            Err(AuthError::SecretMismatch)
        ));
        assert_eq!(store.session_count(), 0);
    }

    #[tokio::test]
    async fn verify_unknown_token() {
        let (svc, _) = service();
        assert!(matches!(
            svc.verify("deadbeef").await,
            Err(AuthError::SessionNotFound)
        ));
    }

    #[tokio::test]
    async fn config_reaches_session_manager() {
        let (svc, _) = service();
        let svc = svc.with_config(SessionConfig::default().with_allow_multiple_sessions(false));
        assert!(!svc.sessions().config().allow_multiple_sessions);

        let first = svc.login(OwnerId(42), "hunter2").await.unwrap().token;
        let second = svc.login(OwnerId(42), "hunter2").await.unwrap().token;
        assert!(matches!(
            svc.verify(first.as_str()).await,
            Err(AuthError::SessionInactive)
        ));
        assert!(svc.verify(second.as_str()).await.is_ok());
    }
}
