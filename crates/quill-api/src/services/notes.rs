//! Owner-scoped note operations.
//!
//! Every read and write goes through the joint `(owner, note)` lookup,
//! so a note belonging to someone else is indistinguishable from one
//! that does not exist.

use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use quill_core::models::{Note, PaginatedNotes};
use quill_core::traits::{NewNote, NotePatch, NoteRepository};

use crate::error::{ApiError, ApiResult};
use crate::validation::{ListParams, ValidCreateNote};

#[derive(Clone)]
pub struct NoteService {
    notes: Arc<dyn NoteRepository>,
}

impl NoteService {
    pub fn new(notes: Arc<dyn NoteRepository>) -> Self {
        Self { notes }
    }

    #[instrument(skip(self, req), fields(user_id = %owner_id))]
    pub async fn create(&self, owner_id: Uuid, req: ValidCreateNote) -> ApiResult<Note> {
        let note = self
            .notes
            .insert(NewNote {
                title: req.title,
                content: req.content,
                user_id: owner_id,
            })
            .await?;
        info!(note_id = %note.id, "note created");
        Ok(note)
    }

    #[instrument(skip(self, params), fields(user_id = %owner_id))]
    pub async fn list(&self, owner_id: Uuid, params: ListParams<'_>) -> ApiResult<PaginatedNotes> {
        let page = self
            .notes
            .find_by_user_id_paginated(owner_id, params.page, params.limit, params.search)
            .await?;
        Ok(page)
    }

    pub async fn find_one(&self, owner_id: Uuid, note_id: Uuid) -> ApiResult<Note> {
        self.notes
            .find_by_user_id_and_note_id(owner_id, note_id)
            .await?
            .ok_or_else(not_found)
    }

    #[instrument(skip(self, patch), fields(user_id = %owner_id, note_id = %note_id))]
    pub async fn update(&self, owner_id: Uuid, note_id: Uuid, patch: NotePatch) -> ApiResult<Note> {
        // Ownership gate before the write; the update itself is keyed
        // only by note id.
        self.find_one(owner_id, note_id).await?;

        if patch.is_empty() {
            return self.find_one(owner_id, note_id).await;
        }

        self.notes
            .update(note_id, patch)
            .await?
            .ok_or_else(not_found)
    }

    #[instrument(skip(self), fields(user_id = %owner_id, note_id = %note_id))]
    pub async fn remove(&self, owner_id: Uuid, note_id: Uuid) -> ApiResult<()> {
        self.find_one(owner_id, note_id).await?;

        if self.notes.delete(note_id).await? {
            info!("note deleted");
            Ok(())
        } else {
            Err(not_found())
        }
    }
}

fn not_found() -> ApiError {
    ApiError::NotFound("Note not found".to_string())
}
