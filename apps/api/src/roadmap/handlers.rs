//! Axum route handlers for the Placement Prep API.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extractors::AppJson;
use crate::models::roadmap::{LearningResourceRow, RoadmapRow};
use crate::roadmap::enrich::enrich_sections;
use crate::roadmap::generator::generate_sections;
use crate::roadmap::store::{
    find_latest_roadmap, find_resources_for_domain, find_roadmap, insert_resource, update_sections,
    upsert_roadmap, NewResource,
};
use crate::roadmap::{
    normalize_domain, sanitize_sections, CompletedFlags, RoadmapProgress, RoadmapSection,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRoadmapRequest {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub regenerate: bool,
}

#[derive(Debug, Deserialize)]
pub struct RoadmapQuery {
    pub domain: Option<String>,
}

/// The PATCH body is kept loose so a missing or mistyped `sections`
/// produces a clear validation message instead of a JSON rejection.
#[derive(Debug, Deserialize)]
pub struct UpdateRoadmapRequest {
    pub domain: Option<String>,
    pub sections: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub domain: String,
    pub sections: Vec<RoadmapSection>,
    pub progress: RoadmapProgress,
}

impl RoadmapResponse {
    fn from_row(row: RoadmapRow, message: Option<&str>) -> Self {
        let sections = row.sections.0;
        RoadmapResponse {
            message: message.map(str::to_string),
            domain: row.domain,
            progress: RoadmapProgress::of(&sections),
            sections,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateResourceRequest {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct ResourceQuery {
    #[serde(default)]
    pub domain: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/placementprep/ai-roadmap
///
/// Returns the stored roadmap for the domain, or generates, enriches and
/// stores a new one when none exists or `regenerate` is set.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(request): AppJson<GenerateRoadmapRequest>,
) -> Result<(StatusCode, Json<RoadmapResponse>), AppError> {
    let domain = normalize_domain(&request.domain);
    if domain.is_empty() {
        return Err(AppError::Validation("Domain is required".to_string()));
    }

    if !request.regenerate {
        if let Some(existing) = find_roadmap(&state.db, auth.id, &domain).await? {
            return Ok((StatusCode::OK, Json(RoadmapResponse::from_row(existing, None))));
        }
    }

    let (sections, source) = generate_sections(&domain, state.llm.as_ref()).await;
    let catalog = find_resources_for_domain(&state.db, &domain).await?;
    let sections = enrich_sections(sections, &catalog);

    let row = upsert_roadmap(&state.db, auth.id, &domain, &sections).await?;
    info!("Roadmap for '{domain}' built from {source:?} output");

    Ok((
        StatusCode::CREATED,
        Json(RoadmapResponse::from_row(row, None)),
    ))
}

/// GET /api/placementprep/ai-roadmap
///
/// Returns the roadmap for `?domain=` if given, else the most recently updated one.
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<RoadmapQuery>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let row = match query.domain.as_deref().map(normalize_domain) {
        Some(domain) if !domain.is_empty() => find_roadmap(&state.db, auth.id, &domain).await?,
        _ => find_latest_roadmap(&state.db, auth.id).await?,
    }
    .ok_or_else(|| AppError::NotFound("No roadmap found".to_string()))?;

    Ok(Json(RoadmapResponse::from_row(row, None)))
}

/// PATCH /api/placementprep/ai-roadmap
///
/// Saves checklist progress. Only titles, item text, completion flags and
/// resources are accepted from the client.
pub async fn handle_update_roadmap(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(request): AppJson<UpdateRoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let raw_sections = match request.sections {
        Some(Value::Array(sections)) => sections,
        _ => {
            return Err(AppError::Validation(
                "sections array is required".to_string(),
            ))
        }
    };

    let domain = request
        .domain
        .as_deref()
        .map(normalize_domain)
        .filter(|d| !d.is_empty());

    let existing = match domain {
        Some(domain) => find_roadmap(&state.db, auth.id, &domain).await?,
        None => find_latest_roadmap(&state.db, auth.id).await?,
    }
    .ok_or_else(|| AppError::NotFound("No roadmap found to update".to_string()))?;

    let sections = sanitize_sections(&raw_sections, CompletedFlags::Keep);
    let row = update_sections(&state.db, existing.id, &sections).await?;

    Ok(Json(RoadmapResponse::from_row(
        row,
        Some("Roadmap progress updated"),
    )))
}

/// GET /api/placementprep/resources?domain=
///
/// Lists catalog resources that apply to a domain, including global ones.
pub async fn handle_list_resources(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ResourceQuery>,
) -> Result<Json<Vec<LearningResourceRow>>, AppError> {
    let domain = normalize_domain(&query.domain);
    let resources = find_resources_for_domain(&state.db, &domain).await?;
    Ok(Json(resources))
}

/// POST /api/placementprep/resources
///
/// Adds a catalog resource. Admin only.
pub async fn handle_create_resource(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(request): AppJson<CreateResourceRequest>,
) -> Result<(StatusCode, Json<LearningResourceRow>), AppError> {
    if !auth.is_admin() {
        return Err(AppError::Forbidden);
    }

    let resource = validate_resource(request)?;
    let row = insert_resource(
        &state.db,
        NewResource {
            domain: &resource.domain,
            topics: &resource.topics,
            label: &resource.label,
            url: &resource.url,
        },
    )
    .await?;

    info!("Catalog resource {} added by {}", row.id, auth.email);
    Ok((StatusCode::CREATED, Json(row)))
}

/// Trims all fields, lowercases domain and topics, drops blank topics.
fn validate_resource(request: CreateResourceRequest) -> Result<CreateResourceRequest, AppError> {
    let resource = CreateResourceRequest {
        domain: request.domain.trim().to_lowercase(),
        topics: request
            .topics
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect(),
        label: request.label.trim().to_string(),
        url: request.url.trim().to_string(),
    };

    let mut missing = Vec::new();
    if resource.domain.is_empty() {
        missing.push("domain");
    }
    if resource.label.is_empty() {
        missing.push("label");
    }
    if resource.url.is_empty() {
        missing.push("url");
    }
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }
    Ok(resource)
}
