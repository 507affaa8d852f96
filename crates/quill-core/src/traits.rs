//! Core traits for quill abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability. Services
//! receive them by construction; wiring happens once at process start.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// USER REPOSITORY
// =============================================================================

/// Fields for creating a new user row.
///
/// `password` carries the already-computed one-way hash; hashing happens
/// in the identity service, never in the storage layer.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Partial update of a user row. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserPatch {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
    }
}

/// Repository for user identity records.
///
/// Lookup asymmetry is intentional: `find_by_email` feeds credential
/// verification and returns the full record including the password hash,
/// while `find_by_id`/`find_all` feed responses and return only the
/// public projection. The two paths must never be merged.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users (public projection, no hashes).
    async fn find_all(&self) -> Result<Vec<PublicUser>>;

    /// Fetch a user by id (public projection), or `None`.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PublicUser>>;

    /// Fetch the full record by email, hash included. Credential path only.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Insert a new user. The storage layer enforces email uniqueness.
    async fn insert(&self, user: NewUser) -> Result<PublicUser>;

    /// Apply a partial update and return the updated projection, or `None`
    /// if no such user exists.
    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<Option<PublicUser>>;

    /// Delete a user and, in the same transaction, every note they own.
    /// Returns whether a row existed and was removed.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

// =============================================================================
// NOTE REPOSITORY
// =============================================================================

/// Fields for creating a new note row.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    /// Owner id. Callers must pass the authenticated id, never a
    /// client-supplied one.
    pub user_id: Uuid,
}

/// Partial update of a note row. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Repository for note CRUD and owner-scoped listing.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List every note regardless of owner (administrative use).
    async fn find_all(&self) -> Result<Vec<Note>>;

    /// Fetch a note by id alone, or `None`.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>>;

    /// List all notes owned by `user_id`, most-recently-updated first.
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Note>>;

    /// Joint lookup keyed by both note id and owner id. A note owned by
    /// someone else is indistinguishable from a nonexistent one.
    async fn find_by_user_id_and_note_id(
        &self,
        user_id: Uuid,
        note_id: Uuid,
    ) -> Result<Option<Note>>;

    /// Insert a new note and return it.
    async fn insert(&self, note: NewNote) -> Result<Note>;

    /// Apply a partial update (bumping `updated_at`) and return the
    /// updated note, or `None` if no such row exists.
    async fn update(&self, id: Uuid, patch: NotePatch) -> Result<Option<Note>>;

    /// Delete a note. Returns whether a row existed and was removed.
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Paginated, optionally title-filtered listing scoped to one owner.
    ///
    /// `search`, when non-empty, is a case-sensitive substring match on
    /// the title. `total`/`total_pages` reflect the filtered count; a
    /// page beyond the end yields empty items, not an error.
    async fn find_by_user_id_paginated(
        &self,
        user_id: Uuid,
        page: i64,
        limit: i64,
        search: Option<&str>,
    ) -> Result<PaginatedNotes>;
}
