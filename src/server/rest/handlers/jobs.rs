use axum::{
    extract::{Path, State},
    Extension, Json,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::server::rest::error::{ApiError, ApiResult};
use crate::server::rest::middleware::AuthContext;
use crate::shared::models::{AppState, CreateJobRequest, JobResponse, UserRole};

pub async fn list_jobs(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<JobResponse>>> {
    let jobs = state.get_all_jobs().await?;
    let response: Vec<JobResponse> = jobs.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

pub async fn get_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<JobResponse>> {
    let job_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::NotFound("Job not found".to_string()))?;

    let job = state
        .get_job(&job_id)
        .await?
        .ok_or(ApiError::NotFound("Job not found".to_string()))?;

    Ok(Json(job.into()))
}

pub async fn create_job(
    Extension(auth): Extension<AuthContext>,
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateJobRequest>,
) -> ApiResult<Json<JobResponse>> {
    if auth.user.role != UserRole::Employer {
        return Err(ApiError::Forbidden(
            "Only employers can post jobs".to_string(),
        ));
    }

    if req.title.trim().is_empty() || req.company.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Job title and company are required".to_string(),
        ));
    }

    let job = state.create_job(&req, auth.user.id).await?;

    info!(
        job_id = %job.id,
        title = %job.title,
        posted_by = %auth.user.email,
        "Job posted"
    );

    Ok(Json(job.into()))
}
