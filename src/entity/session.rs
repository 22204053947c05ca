//! Session entity model for Sea-ORM database interaction.
//!
//! Maps to the `session` table created by the crate's migrations.

use sea_orm::entity::prelude::*;

/// Sea-ORM entity model representing one issued session.
///
/// # Database Schema
///
/// | Column      | Type                    | Description                          |
/// |-------------|-------------------------|--------------------------------------|
/// | token       | TEXT (Primary Key)      | 128-char hex bearer token            |
/// | session_id  | TEXT (Unique)           | UUID, internal identifier            |
/// | owner_id    | BIGINT (Indexed)        | Student or professor id              |
/// | active      | BOOLEAN                 | `false` once revoked                 |
/// | created_at  | TIMESTAMPTZ             | Issue time                           |
///
/// Keying by token makes verify and logout point lookups. `session_id`
/// stays as a separate column so revocation can be addressed without
/// repeating the secret.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "session")]
pub struct Model {
    /// The bearer token, 128 lowercase hex characters.
    ///
    /// Primary key, so verify and logout resolve a token with one indexed
    /// lookup.
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub token: String,

    /// The session's UUID in string form.
    ///
    /// Revocation addresses rows by this column. It is never sent to clients.
    #[sea_orm(unique, column_type = "Text")]
    pub session_id: String,

    /// Id of the owner record this session authenticates.
    ///
    /// Not a foreign key: owner records are managed outside this crate.
    pub owner_id: i64,

    /// `true` until the session is revoked, then `false` for good.
    pub active: bool,

    /// When the session was issued. Never updated.
    pub created_at: DateTimeWithTimeZone,
}

/// Required enum for Sea-ORM entity relations.
///
/// Sessions declare no relations, so this enum is empty.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// Default active-model behaviour; `SeaOrmStore` sets every column explicitly.
impl ActiveModelBehavior for ActiveModel {}
