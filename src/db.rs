use std::fmt;

use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use rocket::{fairing, Build, Rocket};
use rocket_sync_db_pools::database;

use crate::error::StoreError;

#[database("props")]
pub(crate) struct DbConn(SqliteConnection);

pub(crate) const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Number of leading migrations that belong to `users`. Everything after them
/// creates the inventory tables.
const USER_MIGRATIONS: usize = 1;

/// How `init-db` treats tables that already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitPolicy {
    /// Create missing tables, keep every existing row.
    Preserve,
    /// Drop and recreate all tables.
    Reset,
    /// Drop and recreate `locations` and `props`, leave `users` alone.
    ResetInventory,
}

impl fmt::Display for InitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitPolicy::Preserve => write!(f, "preserve"),
            InitPolicy::Reset => write!(f, "reset"),
            InitPolicy::ResetInventory => write!(f, "reset-inventory"),
        }
    }
}

pub(crate) fn init_schema(conn: &mut SqliteConnection, policy: InitPolicy) -> Result<(), StoreError> {
    match policy {
        InitPolicy::Preserve => {}
        InitPolicy::Reset => {
            conn.revert_all_migrations(MIGRATIONS)
                .map_err(StoreError::Migration)?;
        }
        InitPolicy::ResetInventory => {
            while conn
                .applied_migrations()
                .map_err(StoreError::Migration)?
                .len()
                > USER_MIGRATIONS
            {
                conn.revert_last_migration(MIGRATIONS)
                    .map_err(StoreError::Migration)?;
            }
        }
    }

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(StoreError::Migration)?;
    log::info!(
        "schema initialised with policy {} ({} migrations applied)",
        policy,
        applied.len()
    );

    Ok(())
}

pub(crate) async fn run_db_migrations(rocket: Rocket<Build>) -> fairing::Result {
    let conn = match DbConn::get_one(&rocket).await {
        Some(conn) => conn,
        None => {
            log::error!("no database connection available for migrations");
            return Err(rocket);
        }
    };

    match conn.run(|c| init_schema(c, InitPolicy::Preserve)).await {
        Ok(()) => Ok(rocket),
        Err(err) => {
            log::error!("couldn't run migrations: {}", err);
            Err(rocket)
        }
    }
}

#[cfg(test)]
pub(crate) fn test_connection() -> SqliteConnection {
    use diesel::Connection;

    let mut conn = SqliteConnection::establish(":memory:").unwrap();
    init_schema(&mut conn, InitPolicy::Preserve).unwrap();
    conn
}
