use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use bytes::{Bytes, BytesMut};
use tracing::{info, warn};

use crate::analysis::extract::{extract_text, DocumentKind, ExtractError};
use crate::analysis::AnalysisReport;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::state::AppState;

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

/// Size limit for each uploaded file.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Body limit for the analyze route: two full-size files plus multipart framing.
pub const MAX_REQUEST_BYTES: usize = 2 * MAX_UPLOAD_BYTES + 64 * 1024;

#[derive(Debug)]
struct UploadedFile {
    file_name: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

/// POST /api/resume/analyze
///
/// Multipart body with one `resume` and one `jobDescription` file.
pub async fn handle_analyze(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut resume: Option<UploadedFile> = None;
    let mut job_description: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await? {
        let (slot, label) = match field.name() {
            Some(RESUME_FIELD) => (&mut resume, "resume"),
            Some(JOB_DESCRIPTION_FIELD) => (&mut job_description, "job description"),
            _ => continue,
        };
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = read_field_limited(field, label).await?;
        *slot = Some(UploadedFile {
            file_name,
            content_type,
            data,
        });
    }

    let (Some(resume), Some(job_description)) = (resume, job_description) else {
        return Err(AppError::Validation(
            "Both resume and job description files are required".to_string(),
        ));
    };

    info!(
        "Analyzing résumé for {} ({} bytes resume, {} bytes job description)",
        auth.email,
        resume.data.len(),
        job_description.data.len()
    );

    let resume_text = read_document(resume)
        .await
        .map_err(|e| AppError::Validation(format!("Failed to extract text from resume: {e}")))?;
    let jd_text = read_document(job_description).await.map_err(|e| {
        AppError::Validation(format!(
            "Failed to extract text from job description: {e}"
        ))
    })?;

    let report = state.analyzer.analyze(&resume_text, &jd_text).await?;
    info!(
        "Résumé analysis for {}: score {} via {}",
        auth.email, report.job_fit_score, report.analyzer
    );

    Ok(Json(report))
}

/// Buffers one multipart field, failing with 413 once it passes `MAX_UPLOAD_BYTES`.
async fn read_field_limited(mut field: Field<'_>, label: &str) -> Result<Bytes, AppError> {
    let mut data = BytesMut::new();
    while let Some(chunk) = field.chunk().await? {
        if data.len() + chunk.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::Rejected {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                message: format!(
                    "The {label} file exceeds the {} MB limit",
                    MAX_UPLOAD_BYTES / (1024 * 1024)
                ),
            });
        }
        data.extend_from_slice(&chunk);
    }
    Ok(data.freeze())
}

/// Detects the document kind and extracts its text on the blocking pool.
async fn read_document(file: UploadedFile) -> Result<String, ExtractError> {
    let kind = DocumentKind::detect(file.content_type.as_deref(), file.file_name.as_deref())?;

    tokio::task::spawn_blocking(move || extract_text(kind, &file.data))
        .await
        .unwrap_or_else(|e| {
            // pdf-extract panics on some malformed files.
            warn!("Document extraction task failed: {e}");
            Err(ExtractError::Pdf("the document could not be parsed".to_string()))
        })
}
