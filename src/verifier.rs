//! Credential verification against owner records.

use tracing::{debug, warn};

use crate::error::AuthError;
use crate::model::{OwnerId, OwnerRecord};
use crate::store::EntityStore;

/// Decides whether a submitted secret matches the stored one.
///
/// The comparison scheme is a policy decision separate from session
/// handling; swap the implementation to change it.
pub trait SecretVerifier: Send + Sync {
    fn matches(&self, submitted: &str, stored: &str) -> bool;
}

/// Plain equality between the submitted and stored secret.
///
/// Stored secrets are plaintext, and the comparison is not constant-time,
/// so response timing can leak how much of a guess matched. Substitute a
/// hashing [`SecretVerifier`] to close both gaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextVerifier;

impl SecretVerifier for PlainTextVerifier {
    fn matches(&self, submitted: &str, stored: &str) -> bool {
        submitted == stored
    }
}

/// Authenticates an owner by id and secret.
///
/// Has no state of its own and performs no writes. Token issuance is left
/// to [`SessionManager`](crate::SessionManager).
#[derive(Debug, Clone)]
pub struct CredentialVerifier<E, V = PlainTextVerifier> {
    entities: E,
    secrets: V,
}

impl<E: EntityStore> CredentialVerifier<E> {
    pub fn new(entities: E) -> Self {
        Self {
            entities,
            secrets: PlainTextVerifier,
        }
    }
}

impl<E: EntityStore, V: SecretVerifier> CredentialVerifier<E, V> {
    /// Replace the secret comparison scheme.
    pub fn with_secret_verifier<W: SecretVerifier>(self, secrets: W) -> CredentialVerifier<E, W> {
        CredentialVerifier {
            entities: self.entities,
            secrets,
        }
    }

    /// Check `submitted_secret` against the record stored for `owner_id`.
    ///
    /// # Errors
    ///
    /// * [`AuthError::MissingSecret`] if `submitted_secret` is empty. The
    ///   entity store is not consulted.
    /// * [`AuthError::OwnerNotFound`] if no record exists for `owner_id`.
    /// * [`AuthError::SecretMismatch`] if the secrets differ, or the owner
    ///   has no stored secret.
    /// * [`AuthError::StoreUnavailable`] if the entity store fails.
    pub async fn authenticate(
        &self,
        owner_id: OwnerId,
        submitted_secret: &str,
    ) -> Result<OwnerRecord, AuthError> {
        if submitted_secret.is_empty() {
            return Err(AuthError::MissingSecret);
        }

        let owner = self
            .entities
            .find_by_id(owner_id)
            .await
            .inspect_err(|e| warn!(%owner_id, error = %e, "entity store lookup failed"))?
            .ok_or(AuthError::OwnerNotFound(owner_id))?;

        let matched = owner
            .secret
            .as_deref()
            .is_some_and(|stored| self.secrets.matches(submitted_secret, stored));

        if !matched {
            warn!(%owner_id, "secret mismatch");
            return Err(AuthError::SecretMismatch);
        }

        debug!(%owner_id, kind = owner.kind.as_str(), "owner authenticated");
        Ok(owner)
    }
}
