//! Owner and session records as seen by the login flow.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::token::Token;

/// Identifier of a student or professor record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub i64);

impl From<i64> for OwnerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Which roster an owner record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerKind {
    Student,
    Professor,
}

impl OwnerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerKind::Student => "student",
            OwnerKind::Professor => "professor",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(OwnerKind::Student),
            "professor" => Some(OwnerKind::Professor),
            _ => None,
        }
    }
}

/// An owner record, read-only from the session subsystem's point of view.
///
/// `secret` is `None` for owners that were never given one (professor
/// records carry no secret column in the source data). Such owners can
/// never log in.
#[derive(Clone, PartialEq, Eq)]
pub struct OwnerRecord {
    pub id: OwnerId,
    /// Student or professor.
    pub kind: OwnerKind,
    pub first_names: String,
    pub last_names: String,
    /// The stored secret compared at login, if the owner has one.
    pub secret: Option<String>,
}

impl fmt::Debug for OwnerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnerRecord")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("first_names", &self.first_names)
            .field("last_names", &self.last_names)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Stored session state tying a bearer token to an owner.
///
/// `active` only ever moves from `true` to `false`. Records are never
/// deleted by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    /// Internal identifier, never handed to clients.
    pub session_id: Uuid,
    /// The bearer credential returned to the owner at login.
    pub token: Token,
    /// The owner this session authenticates. A reference only: the owner
    /// record lives in the entity store.
    pub owner_id: OwnerId,
    /// `false` once revoked.
    pub active: bool,
    /// Issue time, UTC.
    pub created_at: OffsetDateTime,
}

impl SessionRecord {
    /// A fresh, active session for `owner_id` with a newly generated token.
    pub fn new(owner_id: OwnerId) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            token: Token::generate(),
            owner_id,
            active: true,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    /// The client-facing projection of this record.
    pub fn view(&self) -> SessionView {
        SessionView {
            owner_id: self.owner_id,
            active: self.active,
            created_at: self.created_at,
        }
    }
}

/// What a successful verify call exposes: no token, no session id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub owner_id: OwnerId,
    pub active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
