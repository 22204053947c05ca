//! Owner entity model: the student and professor records that can log in.
//!
//! The CRUD surface that writes this table lives outside this crate; the
//! session subsystem only reads it.

use sea_orm::entity::prelude::*;

/// Sea-ORM entity model for an owner record.
///
/// `kind` holds `"student"` or `"professor"`. `secret` is nullable because
/// professor records were created without one.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "owner")]
pub struct Model {
    /// Owner id, assigned by the roster CRUD layer.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,

    /// `"student"` or `"professor"`. Any other value fails to decode.
    #[sea_orm(column_type = "Text")]
    pub kind: String,

    /// Given names.
    pub first_names: String,

    /// Family names.
    pub last_names: String,

    /// Stored login secret in plaintext. `NULL` means the owner cannot log in.
    #[sea_orm(column_type = "Text")]
    pub secret: Option<String>,
}

/// Required enum for Sea-ORM entity relations.
///
/// This entity doesn't have any relations to other entities, so this enum is empty.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// Default behaviour; this crate only reads owner rows.
impl ActiveModelBehavior for ActiveModel {}
