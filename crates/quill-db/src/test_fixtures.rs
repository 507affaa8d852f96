//! Test fixtures for database integration tests.
//!
//! Provides a self-contained in-memory database and small data builders
//! for consistent testing across the codebase. No external services are
//! required; every test gets its own isolated database.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quill_db::test_fixtures::TestDatabase;
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let test_db = TestDatabase::new().await;
//!     let user = test_db.create_user("ada@example.com").await;
//!     // Run your tests...
//! }
//! ```

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

use crate::Database;
use quill_core::{NewNote, NewUser, Note, NoteRepository, PublicUser, UserRepository};

/// An isolated in-memory database with migrations applied.
///
/// A single pooled connection keeps the in-memory database alive and
/// shared for the whole test (each SQLite `:memory:` connection is
/// otherwise its own database).
pub struct TestDatabase {
    pub db: Database,
}

impl TestDatabase {
    /// Create a fresh in-memory database and run migrations.
    pub async fn new() -> Self {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("valid in-memory url")
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .expect("failed to open in-memory database");

        let db = Database::new(pool);
        db.migrate().await.expect("failed to run migrations");

        Self { db }
    }

    /// Insert a user with a fixed bcrypt hash placeholder.
    ///
    /// The stored value is an opaque string as far as the repositories
    /// are concerned; tests that exercise real credential checks hash
    /// for themselves.
    pub async fn create_user(&self, email: &str) -> PublicUser {
        self.db
            .users
            .insert(NewUser {
                email: email.to_string(),
                password: "$2b$10$testhashtesthashtesthashte".to_string(),
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
            })
            .await
            .expect("failed to insert user")
    }

    /// Insert a note owned by `user_id`.
    pub async fn create_note(&self, user_id: Uuid, title: &str) -> Note {
        self.db
            .notes
            .insert(NewNote {
                title: title.to_string(),
                content: format!("content of {}", title),
                user_id,
            })
            .await
            .expect("failed to insert note")
    }

    /// Force a note's `updated_at` for deterministic ordering tests.
    pub async fn set_updated_at(&self, note_id: Uuid, at: DateTime<Utc>) {
        sqlx::query("UPDATE notes SET updated_at = ? WHERE id = ?")
            .bind(at)
            .bind(note_id)
            .execute(&self.db.pool)
            .await
            .expect("failed to set updated_at");
    }
}
