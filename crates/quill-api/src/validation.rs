//! Request validation.
//!
//! Each `validate_*` function screens a DTO and either returns a typed,
//! fully-populated value or the complete per-field error map. All fields
//! are checked before returning so the client sees every problem at once.

use quill_core::traits::NotePatch;

use crate::dto::{
    CreateNoteRequest, ListNotesQuery, LoginRequest, RegisterRequest, UpdateNoteRequest,
    UpdateProfileRequest,
};
use crate::error::FieldErrors;

pub const MIN_PASSWORD_LEN: usize = 6;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug)]
pub struct ValidRegister {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug)]
pub struct ValidLogin {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct ValidCreateNote {
    pub title: String,
    pub content: String,
}

#[derive(Debug)]
pub struct ValidProfilePatch {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ValidProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ListParams<'a> {
    pub page: i64,
    pub limit: i64,
    pub search: Option<&'a str>,
}

fn push_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

/// Minimal syntactic email check: one `@`, non-empty local part, domain
/// with at least one dot, no whitespace.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn check_email(errors: &mut FieldErrors, value: Option<&str>) -> Option<String> {
    match value {
        None => {
            push_error(errors, "email", "Email should not be empty");
            None
        }
        Some(v) if v.is_empty() => {
            push_error(errors, "email", "Email should not be empty");
            None
        }
        Some(v) if !is_email(v) => {
            push_error(errors, "email", "Email must be an email");
            None
        }
        Some(v) => Some(v.to_string()),
    }
}

fn check_password(errors: &mut FieldErrors, value: Option<&str>) -> Option<String> {
    match value {
        None | Some("") => {
            push_error(errors, "password", "Password should not be empty");
            None
        }
        Some(v) if v.chars().count() < MIN_PASSWORD_LEN => {
            push_error(
                errors,
                "password",
                "Password must be longer than or equal to 6 characters",
            );
            None
        }
        Some(v) => Some(v.to_string()),
    }
}

pub fn validate_register(req: &RegisterRequest) -> Result<ValidRegister, FieldErrors> {
    let mut errors = FieldErrors::new();

    let email = check_email(&mut errors, req.email.as_deref());
    let password = check_password(&mut errors, req.password.as_deref());

    match req.confirm_password.as_deref() {
        None | Some("") => {
            push_error(
                &mut errors,
                "confirmPassword",
                "Confirm password should not be empty",
            );
        }
        Some(v) => {
            if req.password.as_deref() != Some(v) {
                push_error(
                    &mut errors,
                    "confirmPassword",
                    "Confirm password must match password",
                );
            }
        }
    }

    let first_name = match req.first_name.as_deref() {
        None | Some("") => {
            push_error(&mut errors, "firstName", "First name should not be empty");
            None
        }
        Some(v) => Some(v.to_string()),
    };
    let last_name = match req.last_name.as_deref() {
        None | Some("") => {
            push_error(&mut errors, "lastName", "Last name should not be empty");
            None
        }
        Some(v) => Some(v.to_string()),
    };

    if !errors.is_empty() {
        return Err(errors);
    }
    // All unwraps below are guarded by the empty error map.
    Ok(ValidRegister {
        email: email.unwrap(),
        password: password.unwrap(),
        first_name: first_name.unwrap(),
        last_name: last_name.unwrap(),
    })
}

pub fn validate_login(req: &LoginRequest) -> Result<ValidLogin, FieldErrors> {
    let mut errors = FieldErrors::new();

    let email = check_email(&mut errors, req.email.as_deref());
    let password = match req.password.as_deref() {
        None | Some("") => {
            push_error(&mut errors, "password", "Password should not be empty");
            None
        }
        Some(v) => Some(v.to_string()),
    };

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ValidLogin {
        email: email.unwrap(),
        password: password.unwrap(),
    })
}

pub fn validate_create_note(req: &CreateNoteRequest) -> Result<ValidCreateNote, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = match req.title.as_deref() {
        None => {
            push_error(&mut errors, "title", "Title should not be empty");
            None
        }
        Some(v) if v.trim().is_empty() => {
            push_error(&mut errors, "title", "Title should not be empty");
            None
        }
        Some(v) => Some(v.to_string()),
    };
    let content = match req.content.as_deref() {
        None => {
            push_error(&mut errors, "content", "Content is required");
            None
        }
        // Empty content is a valid note body.
        Some(v) => Some(v.to_string()),
    };

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ValidCreateNote {
        title: title.unwrap(),
        content: content.unwrap(),
    })
}

pub fn validate_update_note(req: &UpdateNoteRequest) -> Result<NotePatch, FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Some(title) = req.title.as_deref() {
        if title.trim().is_empty() {
            push_error(&mut errors, "title", "Title should not be empty");
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NotePatch {
        title: req.title.clone(),
        content: req.content.clone(),
    })
}

pub fn validate_update_profile(req: &UpdateProfileRequest) -> Result<ValidProfilePatch, FieldErrors> {
    let mut errors = FieldErrors::new();

    let email = match req.email.as_deref() {
        None => None,
        Some(v) if v.is_empty() || !is_email(v) => {
            push_error(&mut errors, "email", "Email must be an email");
            None
        }
        Some(v) => Some(v.to_string()),
    };
    let password = match req.password.as_deref() {
        None => None,
        Some(v) if v.chars().count() < MIN_PASSWORD_LEN => {
            push_error(
                &mut errors,
                "password",
                "Password must be longer than or equal to 6 characters",
            );
            None
        }
        Some(v) => Some(v.to_string()),
    };
    let first_name = match req.first_name.as_deref() {
        Some("") => {
            push_error(&mut errors, "firstName", "First name should not be empty");
            None
        }
        other => other.map(str::to_string),
    };
    let last_name = match req.last_name.as_deref() {
        Some("") => {
            push_error(&mut errors, "lastName", "Last name should not be empty");
            None
        }
        other => other.map(str::to_string),
    };

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ValidProfilePatch {
        email,
        password,
        first_name,
        last_name,
    })
}

pub fn validate_list_query(query: &ListNotesQuery) -> Result<ListParams<'_>, FieldErrors> {
    let mut errors = FieldErrors::new();

    let page = query.page.unwrap_or(DEFAULT_PAGE);
    if page < 1 {
        push_error(&mut errors, "page", "Page must be a positive integer");
    }
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    if limit < 1 {
        push_error(&mut errors, "limit", "Limit must be a positive integer");
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ListParams {
        page,
        limit,
        search: query.search.as_deref().filter(|s| !s.is_empty()),
    })
}
