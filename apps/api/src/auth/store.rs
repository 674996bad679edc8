use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserRow;

/// Fields needed to create a user row. `password_hash` is already hashed.
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub dob: Option<&'a str>,
    pub gender: Option<&'a str>,
}

pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRow>, AppError> {
    Ok(
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?,
    )
}

pub async fn find_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRow>, AppError> {
    Ok(
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?,
    )
}

/// Inserts a new student account. A concurrent signup with the same email
/// surfaces as the same validation error as the pre-check.
pub async fn insert_user(pool: &PgPool, user: NewUser<'_>) -> Result<UserRow, AppError> {
    sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (id, name, email, password_hash, role, dob, gender)
        VALUES ($1, $2, $3, $4, 'student', $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user.name)
    .bind(user.email)
    .bind(user.password_hash)
    .bind(user.dob)
    .bind(user.gender)
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Validation("User already exists".to_string())
        }
        _ => AppError::Database(e),
    })
}

/// Replaces the free-form profile document and marks the user as having one.
pub async fn replace_profile(
    pool: &PgPool,
    user_id: Uuid,
    profile: &Value,
) -> Result<Option<UserRow>, AppError> {
    Ok(sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users
        SET profile = $2, has_profile = TRUE, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(Json(profile))
    .fetch_optional(pool)
    .await?)
}

/// Shallow-merges `patch` into the stored profile document.
pub async fn merge_profile(
    pool: &PgPool,
    user_id: Uuid,
    patch: &Value,
) -> Result<Option<UserRow>, AppError> {
    Ok(sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users
        SET profile = profile || $2, has_profile = TRUE, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(Json(patch))
    .fetch_optional(pool)
    .await?)
}
