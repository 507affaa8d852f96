//! User repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use quill_core::{Error, NewUser, PublicUser, Result, User, UserPatch, UserRepository};

/// SQLite implementation of UserRepository.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new SqliteUserRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Columns of the public projection. The password column is deliberately
/// absent from every query built on this list.
const PUBLIC_COLUMNS: &str = "id, email, first_name, last_name, created_at, updated_at";

fn map_row_to_public_user(row: SqliteRow) -> PublicUser {
    PublicUser {
        id: row.get("id"),
        email: row.get("email"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn map_row_to_user(row: SqliteRow) -> User {
    User {
        id: row.get("id"),
        email: row.get("email"),
        password: row.get("password"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_all(&self) -> Result<Vec<PublicUser>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM users ORDER BY created_at",
            PUBLIC_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.into_iter().map(map_row_to_public_user).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PublicUser>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE id = ?",
            PUBLIC_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(row.map(map_row_to_public_user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, email, password, first_name, last_name, created_at, updated_at
             FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(row.map(map_row_to_user))
    }

    async fn insert(&self, user: NewUser) -> Result<PublicUser> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO users (id, email, password, first_name, last_name, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(PublicUser {
            id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<Option<PublicUser>> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        // Build the SET clause dynamically; binds follow placeholder order.
        let mut updates: Vec<&str> = vec!["updated_at = ?"];
        if patch.email.is_some() {
            updates.push("email = ?");
        }
        if patch.password.is_some() {
            updates.push("password = ?");
        }
        if patch.first_name.is_some() {
            updates.push("first_name = ?");
        }
        if patch.last_name.is_some() {
            updates.push("last_name = ?");
        }

        let query = format!("UPDATE users SET {} WHERE id = ?", updates.join(", "));

        let mut q = sqlx::query(&query).bind(Utc::now());
        if let Some(email) = patch.email {
            q = q.bind(email);
        }
        if let Some(password) = patch.password {
            q = q.bind(password);
        }
        if let Some(first_name) = patch.first_name {
            q = q.bind(first_name);
        }
        if let Some(last_name) = patch.last_name {
            q = q.bind(last_name);
        }
        q.bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        self.find_by_id(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        // Owned notes go in the same transaction; either the full cascade
        // is persisted or none of it is.
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;

        sqlx::query("DELETE FROM notes WHERE user_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(Error::Database)?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(Error::Database)?;

        tx.commit().await.map_err(Error::Database)?;
        Ok(result.rows_affected() > 0)
    }
}
