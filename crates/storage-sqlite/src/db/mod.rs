//! Connection pooling, migrations and the single-writer actor.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::path::Path;
use std::sync::Arc;

use crate::errors::StorageError;
use poketrade_core::errors::{DatabaseError, Error, Result};

mod write_actor;

pub use write_actor::{spawn_writer, WriteHandle};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Applies session pragmas to every pooled connection.
///
/// WAL keeps readers unblocked while the writer actor holds its
/// transaction; the busy timeout covers the brief moments SQLite still
/// takes a lock.
#[derive(Debug)]
struct ConnectionCustomizer;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), r2d2::Error> {
        conn.batch_execute(
            "PRAGMA journal_mode = WAL;
             PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 30000;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(r2d2::Error::QueryError)
    }
}

/// Ensures the database file exists and returns its full path.
pub fn init(app_data_dir: &str) -> Result<String> {
    let db_path = get_db_path(app_data_dir);

    if !Path::new(&db_path).exists() {
        std::fs::File::create(&db_path).map_err(|e| {
            Error::Database(DatabaseError::ConnectionFailed(format!(
                "Failed to create database file at '{}': {}",
                db_path, e
            )))
        })?;
    }

    Ok(db_path)
}

/// Creates an r2d2 connection pool for the given database path.
pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = Pool::builder()
        .max_size(10)
        .connection_customizer(Box::new(ConnectionCustomizer))
        .build(manager)
        .map_err(|e| {
            Error::Database(DatabaseError::PoolCreationFailed(format!(
                "Failed to create connection pool: {}",
                e
            )))
        })?;

    Ok(Arc::new(pool))
}

/// Runs all pending embedded migrations.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut connection = get_connection(pool)?;
    connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::from(StorageError::MigrationFailed(e.to_string())))?;
    log::info!("Database migrations are up to date");
    Ok(())
}

/// Checks out a connection from the pool.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get().map_err(|e| {
        Error::Database(DatabaseError::ConnectionFailed(format!(
            "Failed to get connection from pool: {}",
            e
        )))
    })
}

fn get_db_path(app_data_dir: &str) -> String {
    std::env::var("POKETRADE_DB_PATH").unwrap_or_else(|_| {
        Path::new(app_data_dir)
            .join("poketrade.db")
            .to_str()
            .unwrap_or("poketrade.db")
            .to_string()
    })
}
