use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::roadmap::RoadmapSection;

#[derive(Debug, Clone, FromRow)]
pub struct RoadmapRow {
    pub id: Uuid,
    pub domain: String,
    pub sections: Json<Vec<RoadmapSection>>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LearningResourceRow {
    pub id: Uuid,
    pub domain: String,
    pub topics: Vec<String>,
    pub label: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
