use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::roadmap::{LearningResourceRow, RoadmapRow};
use crate::roadmap::enrich::GLOBAL_DOMAINS;
use crate::roadmap::RoadmapSection;

pub async fn find_roadmap(
    pool: &PgPool,
    user_id: Uuid,
    domain: &str,
) -> Result<Option<RoadmapRow>, AppError> {
    Ok(sqlx::query_as::<_, RoadmapRow>(
        "SELECT * FROM placement_roadmaps WHERE user_id = $1 AND domain = $2",
    )
    .bind(user_id)
    .bind(domain)
    .fetch_optional(pool)
    .await?)
}

/// The roadmap the user touched most recently, across all domains.
pub async fn find_latest_roadmap(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<RoadmapRow>, AppError> {
    Ok(sqlx::query_as::<_, RoadmapRow>(
        "SELECT * FROM placement_roadmaps WHERE user_id = $1 ORDER BY updated_at DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?)
}

/// Inserts or replaces the roadmap for `(user_id, domain)`.
pub async fn upsert_roadmap(
    pool: &PgPool,
    user_id: Uuid,
    domain: &str,
    sections: &[RoadmapSection],
) -> Result<RoadmapRow, AppError> {
    let row = sqlx::query_as::<_, RoadmapRow>(
        r#"
        INSERT INTO placement_roadmaps (id, user_id, domain, sections)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id, domain)
        DO UPDATE SET sections = EXCLUDED.sections, updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(domain)
    .bind(Json(sections))
    .fetch_one(pool)
    .await?;

    info!("Stored roadmap {} ({domain}) for user {user_id}", row.id);
    Ok(row)
}

pub async fn update_sections(
    pool: &PgPool,
    roadmap_id: Uuid,
    sections: &[RoadmapSection],
) -> Result<RoadmapRow, AppError> {
    Ok(sqlx::query_as::<_, RoadmapRow>(
        r#"
        UPDATE placement_roadmaps
        SET sections = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(roadmap_id)
    .bind(Json(sections))
    .fetch_one(pool)
    .await?)
}

/// Catalog entries for a domain plus the global ones.
pub async fn find_resources_for_domain(
    pool: &PgPool,
    domain: &str,
) -> Result<Vec<LearningResourceRow>, AppError> {
    let domains = vec![
        domain.to_lowercase(),
        GLOBAL_DOMAINS[0].to_string(),
        GLOBAL_DOMAINS[1].to_string(),
    ];
    Ok(sqlx::query_as::<_, LearningResourceRow>(
        "SELECT * FROM learning_resources WHERE domain = ANY($1) ORDER BY created_at, id",
    )
    .bind(&domains)
    .fetch_all(pool)
    .await?)
}

pub struct NewResource<'a> {
    pub domain: &'a str,
    pub topics: &'a [String],
    pub label: &'a str,
    pub url: &'a str,
}

pub async fn insert_resource(
    pool: &PgPool,
    resource: NewResource<'_>,
) -> Result<LearningResourceRow, AppError> {
    Ok(sqlx::query_as::<_, LearningResourceRow>(
        r#"
        INSERT INTO learning_resources (id, domain, topics, label, url)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(resource.domain)
    .bind(resource.topics)
    .bind(resource.label)
    .bind(resource.url)
    .fetch_one(pool)
    .await?)
}
