//! Axum route handlers for the Auth API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::store::{find_user_by_email, find_user_by_id, insert_user, replace_profile, NewUser};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extractors::AppJson;
use crate::models::user::UserSummary;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub dob: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserSummary,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: Value,
}

#[derive(Debug, Serialize)]
pub struct ProfileSavedResponse {
    pub message: String,
    pub profile: Value,
}

// ────────────────────────────────────────────────────────────────────────────
// Validation helpers
// ────────────────────────────────────────────────────────────────────────────

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_registration(request: &RegisterRequest) -> Result<(), AppError> {
    let mut missing = Vec::new();
    if request.name.trim().is_empty() {
        missing.push("name");
    }
    if request.email.trim().is_empty() {
        missing.push("email");
    }
    if request.password.trim().is_empty() {
        missing.push("password");
    }
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }
    if !request.email.contains('@') {
        return Err(AppError::Validation(
            "Please provide a valid email address".to_string(),
        ));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/auth/register, POST /api/auth/signup
///
/// Creates a student account and returns a bearer token for it.
pub async fn handle_register(
    State(state): State<AppState>,
    AppJson(request): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    validate_registration(&request)?;

    let email = normalize_email(&request.email);
    if find_user_by_email(&state.db, &email).await?.is_some() {
        return Err(AppError::Validation("User already exists".to_string()));
    }

    let password_hash = hash_password(request.password).await?;
    let dob = non_blank(request.dob);
    let gender = non_blank(request.gender);

    let user = insert_user(
        &state.db,
        NewUser {
            name: request.name.trim(),
            email: &email,
            password_hash: &password_hash,
            dob: dob.as_deref(),
            gender: gender.as_deref(),
        },
    )
    .await?;

    info!("Registered user {}", user.id);

    let token = state.tokens.issue(user.id, &user.email, &user.role)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created successfully".to_string(),
            token,
            user: UserSummary::from(&user),
        }),
    ))
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let invalid = || AppError::Unauthorized("Invalid credentials".to_string());

    let email = normalize_email(&request.email);
    if email.is_empty() || request.password.is_empty() {
        return Err(invalid());
    }

    let user = find_user_by_email(&state.db, &email)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(user.password_hash.clone(), request.password).await? {
        return Err(invalid());
    }

    let token = state.tokens.issue(user.id, &user.email, &user.role)?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: UserSummary::from(&user),
    }))
}

/// GET /api/auth/profile
///
/// Returns the free-form profile document saved by `POST /api/auth/profile`.
pub async fn handle_get_saved_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = find_user_by_id(&state.db, auth.id)
        .await?
        .filter(|u| u.has_profile)
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok(Json(ProfileResponse {
        profile: user.profile.0,
    }))
}

/// POST /api/auth/profile
///
/// Replaces the caller's profile with whatever object the client sends.
pub async fn handle_save_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(profile): AppJson<Value>,
) -> Result<Json<ProfileSavedResponse>, AppError> {
    if !profile.is_object() {
        return Err(AppError::Validation(
            "Profile must be a JSON object".to_string(),
        ));
    }

    let user = replace_profile(&state.db, auth.id, &profile)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    info!("Saved profile for user {}", user.id);

    Ok(Json(ProfileSavedResponse {
        message: "Profile saved successfully".to_string(),
        profile: user.profile.0,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            dob: None,
            gender: None,
        }
    }

    #[test]
    fn test_normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
    }

    #[test]
    fn test_registration_requires_all_fields() {
        let err = validate_registration(&request(" ", "", "")).unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert!(msg.contains("name"));
                assert!(msg.contains("email"));
                assert!(msg.contains("password"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_registration_rejects_whitespace_password() {
        match validate_registration(&request("Ada", "ada@example.com", "   ")).unwrap_err() {
            AppError::Validation(msg) => assert_eq!(msg, "Missing required fields: password"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_registration_rejects_email_without_at() {
        assert!(validate_registration(&request("Ada", "ada.example.com", "pw")).is_err());
    }

    #[test]
    fn test_registration_accepts_complete_request() {
        assert!(validate_registration(&request("Ada", "ada@example.com", "pw")).is_ok());
    }

    #[test]
    fn test_non_blank_drops_whitespace_values() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(Some(" F ".to_string())).as_deref(), Some("F"));
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_register_request_tolerates_missing_optional_fields() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"name": "Ada", "email": "a@b.c", "password": "x"}"#).unwrap();
        assert!(req.dob.is_none());
        assert!(req.gender.is_none());
    }
}
