use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::rest::error::{ErrorDetails, ErrorResponse};
use crate::shared::models::{
    AuthResponse, CreateJobRequest, EmploymentType, JobResponse, LoginRequest, SignupRequest,
    UserProfile, UserRole,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::rest::openapi::health,
        crate::server::rest::openapi::version,
        crate::server::rest::openapi::signup,
        crate::server::rest::openapi::login,
        crate::server::rest::openapi::me,
        crate::server::rest::openapi::list_jobs,
        crate::server::rest::openapi::get_job,
        crate::server::rest::openapi::create_job,
    ),
    components(
        schemas(
            SignupRequest,
            LoginRequest,
            AuthResponse,
            UserProfile,
            UserRole,
            CreateJobRequest,
            JobResponse,
            EmploymentType,
            ErrorResponse,
            ErrorDetails,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Auth", description = "Account registration and authentication"),
        (name = "Jobs", description = "Job postings"),
    ),
    info(
        title = "JobBoard REST API",
        version = "1.0.0",
        description = "Job board platform REST API",
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

// Health endpoints
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
)]
#[allow(dead_code)]
pub async fn health() {}

#[utoipa::path(
    get,
    path = "/api/version",
    tag = "Health",
    responses(
        (status = 200, description = "API version", body = String),
    ),
)]
#[allow(dead_code)]
pub async fn version() {}

// Auth endpoints
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "Auth",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created", body = AuthResponse),
        (status = 400, description = "Invalid request or email already registered", body = ErrorResponse),
    ),
)]
#[allow(dead_code)]
pub async fn signup() {}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
    ),
)]
#[allow(dead_code)]
pub async fn login() {}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Current user profile", body = UserProfile),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
    ),
)]
#[allow(dead_code)]
pub async fn me() {}

// Job endpoints
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = "Jobs",
    responses(
        (status = 200, description = "All job postings, newest first", body = [JobResponse]),
    ),
)]
#[allow(dead_code)]
pub async fn list_jobs() {}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    tag = "Jobs",
    params(
        ("id" = String, Path, description = "Job id"),
    ),
    responses(
        (status = 200, description = "Job posting", body = JobResponse),
        (status = 404, description = "Job not found", body = ErrorResponse),
    ),
)]
#[allow(dead_code)]
pub async fn get_job() {}

#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = "Jobs",
    security(
        ("bearer_auth" = [])
    ),
    request_body = CreateJobRequest,
    responses(
        (status = 200, description = "Job created", body = JobResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Employer role required", body = ErrorResponse),
    ),
)]
#[allow(dead_code)]
pub async fn create_job() {}
