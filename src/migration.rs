pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_owner_table;
mod m20240101_000002_create_session_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Own migration table so a host application's migrator does not collide
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("roster_sessions_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_owner_table::Migration),
            Box::new(m20240101_000002_create_session_table::Migration),
        ]
    }
}
