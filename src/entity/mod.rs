//! Database entity models for roster-sessions.
//!
//! These Sea-ORM entities back [`SeaOrmStore`](crate::SeaOrmStore). Their
//! tables are created by the migrations in [`migration`](crate::migration).

/// Owner (student / professor) records, read during login.
pub mod owner;

/// Issued sessions, keyed by token.
pub mod session;
