//! # quill-db
//!
//! SQLite database layer for quill.
//!
//! This crate provides:
//! - Connection pool management
//! - Repository implementations for users and notes
//! - Schema migrations
//!
//! ## Example
//!
//! ```rust,ignore
//! use quill_db::Database;
//! use quill_core::{NewNote, NoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("sqlite://quill.db").await?;
//!     db.migrate().await?;
//!
//!     let note = db.notes.insert(NewNote {
//!         title: "Hello".to_string(),
//!         content: "world".to_string(),
//!         user_id: owner_id,
//!     }).await?;
//!
//!     println!("Created note: {}", note.id);
//!     Ok(())
//! }
//! ```

pub mod notes;
pub mod pool;
pub mod users;

// Test fixtures for integration tests.
// Always compiled so integration tests (in tests/) can use them.
pub mod test_fixtures;

// Re-export core types
pub use quill_core::*;

// Re-export repository implementations
pub use notes::SqliteNoteRepository;
pub use pool::{create_pool, create_pool_with_config, log_pool_metrics, PoolConfig};
pub use users::SqliteUserRepository;

/// Combined database context with all repositories.
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::SqlitePool,
    /// User repository for identity records.
    pub users: SqliteUserRepository,
    /// Note repository for CRUD and owner-scoped listing.
    pub notes: SqliteNoteRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self {
            users: SqliteUserRepository::new(pool.clone()),
            notes: SqliteNoteRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::SqlitePool {
        &self.pool
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}
