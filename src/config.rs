//! Session policy configuration.

use serde::Deserialize;

/// Policy knobs for [`SessionManager`](crate::SessionManager).
///
/// Deserializable so a host application can embed it in its own config
/// file; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Whether an owner may hold several active sessions at once.
    ///
    /// When `false`, issuing a session deactivates the owner's other
    /// active sessions first.
    pub allow_multiple_sessions: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            allow_multiple_sessions: true,
        }
    }
}

impl SessionConfig {
    pub fn with_allow_multiple_sessions(mut self, allow: bool) -> Self {
        self.allow_multiple_sessions = allow;
        self
    }
}
