use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::auth::store::{find_user_by_id, merge_profile};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extractors::AppJson;
use crate::profile::{build_profile_patch, ProfileUpdate};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileDetailResponse {
    pub profile: Value,
    pub user: ProfileUser,
}

#[derive(Debug, Serialize)]
pub struct ProfileUpdatedResponse {
    pub message: String,
    pub profile: Value,
}

/// GET /api/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ProfileDetailResponse>, AppError> {
    let user = find_user_by_id(&state.db, auth.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(ProfileDetailResponse {
        profile: user.profile.0,
        user: ProfileUser {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        },
    }))
}

/// PUT /api/profile
///
/// Merges the provided fields into the stored profile.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(update): AppJson<ProfileUpdate>,
) -> Result<Json<ProfileUpdatedResponse>, AppError> {
    let patch = build_profile_patch(update);

    let user = merge_profile(&state.db, auth.id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    info!("Updated profile for {}", auth.email);

    Ok(Json(ProfileUpdatedResponse {
        message: "Profile updated successfully".to_string(),
        profile: user.profile.0,
    }))
}
