//! Account registration, login, and profile management.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use quill_auth::password::{hash_password, verify_password};
use quill_auth::token::TokenSigner;
use quill_core::models::PublicUser;
use quill_core::traits::{NewUser, UserPatch, UserRepository};

use crate::error::{ApiError, ApiResult};
use crate::validation::{ValidProfilePatch, ValidRegister};

/// Response body for both register and login: the signed token plus the
/// public projection of the account it belongs to.
#[derive(Debug, Serialize)]
pub struct AuthPayload {
    pub access_token: String,
    pub user: PublicUser,
}

#[derive(Clone)]
pub struct IdentityService {
    users: Arc<dyn UserRepository>,
    tokens: TokenSigner,
}

fn join_error(err: tokio::task::JoinError) -> ApiError {
    ApiError::Database(quill_core::Error::Internal(err.to_string()))
}

impl IdentityService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenSigner) -> Self {
        Self { users, tokens }
    }

    /// Creates an account and immediately signs the caller in.
    #[instrument(skip(self, req), fields(email = %req.email))]
    pub async fn register(&self, req: ValidRegister) -> ApiResult<AuthPayload> {
        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(ApiError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        // bcrypt is deliberately slow; keep it off the async workers.
        let password = req.password.clone();
        let hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(join_error)??;

        let user = self
            .users
            .insert(NewUser {
                email: req.email,
                password: hash,
                first_name: req.first_name,
                last_name: req.last_name,
            })
            .await?;

        let access_token = self.tokens.issue(user.id, &user.email)?;
        info!(user_id = %user.id, "user registered");
        Ok(AuthPayload { access_token, user })
    }

    /// Verifies credentials and signs a token. Unknown email and wrong
    /// password are indistinguishable to the caller.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthPayload> {
        let user = match self.validate_user(email, password).await? {
            Some(user) => user,
            None => {
                warn!("login rejected");
                return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
            }
        };

        let access_token = self.tokens.issue(user.id, &user.email)?;
        info!(user_id = %user.id, "user logged in");
        Ok(AuthPayload { access_token, user })
    }

    /// Credential check shared by login. Returns the public projection
    /// when the password matches, `None` otherwise.
    pub async fn validate_user(
        &self,
        email: &str,
        password: &str,
    ) -> ApiResult<Option<PublicUser>> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Ok(None);
        };

        let hash = user.password.clone();
        let password = password.to_string();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(join_error)?;

        Ok(matches.then(|| PublicUser::from(user)))
    }

    pub async fn profile(&self, user_id: Uuid) -> ApiResult<PublicUser> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }

    /// Applies a partial profile update. An email change is checked for
    /// collision first so the caller gets a 409 instead of a raw
    /// constraint violation.
    #[instrument(skip(self, patch), fields(user_id = %user_id))]
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        patch: ValidProfilePatch,
    ) -> ApiResult<PublicUser> {
        if let Some(new_email) = patch.email.as_deref() {
            if let Some(existing) = self.users.find_by_email(new_email).await? {
                if existing.id != user_id {
                    return Err(ApiError::Conflict(
                        "User with this email already exists".to_string(),
                    ));
                }
            }
        }

        let password = match patch.password {
            Some(plain) => Some(
                tokio::task::spawn_blocking(move || hash_password(&plain))
                    .await
                    .map_err(join_error)??,
            ),
            None => None,
        };

        let updated = self
            .users
            .update(
                user_id,
                UserPatch {
                    email: patch.email,
                    password,
                    first_name: patch.first_name,
                    last_name: patch.last_name,
                },
            )
            .await?;

        updated.ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }

    /// Deletes the account and, transactionally, every note it owns.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn remove(&self, user_id: Uuid) -> ApiResult<()> {
        if self.users.delete(user_id).await? {
            info!("user deleted");
            Ok(())
        } else {
            Err(ApiError::NotFound("User not found".to_string()))
        }
    }
}
