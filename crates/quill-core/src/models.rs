//! Core data models for quill.
//!
//! These types are shared across all quill crates and represent the
//! core domain entities. Wire-facing types serialize in camelCase to
//! match the public API contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// USER TYPES
// =============================================================================

/// Full user record, including the stored password hash.
///
/// Deliberately does not implement `Serialize`: the hash must never reach
/// a response body. Everything wire-facing goes through [`PublicUser`].
/// Only the credential-verification path consumes this type.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// One-way bcrypt hash, never the plaintext.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a user, safe to serialize into responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// =============================================================================
// NOTE TYPES
// =============================================================================

/// An owned note. Visible and mutable only through its owner's identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Owner id, fixed at creation.
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of a paginated note listing.
///
/// `total` and `total_pages` are computed from the *filtered* result set,
/// not the owner's unfiltered note count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedNotes {
    /// Notes in this page, most-recently-updated first.
    pub items: Vec<Note>,
    /// Count of all matching notes regardless of page.
    pub total: i64,
    pub current_page: i64,
    pub total_pages: i64,
}

impl PaginatedNotes {
    /// Assemble a page from a fetched slice and the filtered total.
    ///
    /// `total_pages = ceil(total / limit)`; an empty result set yields
    /// zero pages rather than one.
    pub fn new(items: Vec<Note>, total: i64, page: i64, limit: i64) -> Self {
        // Ceil without the `total + limit - 1` intermediate, which
        // overflows for caller-supplied limits near i64::MAX.
        let total_pages = if limit > 0 {
            total / limit + i64::from(total % limit != 0)
        } else {
            0
        };
        Self {
            items,
            total,
            current_page: page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            password: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_public_user_strips_password() {
        let user = sample_user();
        let public = PublicUser::from(user.clone());
        let json = serde_json::to_value(&public).unwrap();

        assert_eq!(json["email"], "ada@example.com");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_public_user_camel_case_fields() {
        let public = PublicUser::from(sample_user());
        let json = serde_json::to_value(&public).unwrap();

        assert!(json.get("firstName").is_some());
        assert!(json.get("lastName").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_note_serializes_camel_case() {
        let note = Note {
            id: Uuid::new_v4(),
            title: "Groceries".to_string(),
            content: "milk".to_string(),
            user_id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&note).unwrap();

        assert!(json.get("userId").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_paginated_notes_ceil_division() {
        let page = PaginatedNotes::new(vec![], 15, 2, 10);
        assert_eq!(page.total, 15);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 2);
    }

    #[test]
    fn test_paginated_notes_zero_total_zero_pages() {
        let page = PaginatedNotes::new(vec![], 0, 1, 10);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_paginated_notes_exact_multiple() {
        let page = PaginatedNotes::new(vec![], 20, 1, 10);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_paginated_notes_extreme_limit_does_not_overflow() {
        let page = PaginatedNotes::new(vec![], 5, 1, i64::MAX);
        assert_eq!(page.total_pages, 1);
    }
}
