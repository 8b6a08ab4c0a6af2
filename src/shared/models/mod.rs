use sqlx::{Pool, Postgres};
use thiserror::Error;

pub mod job;
pub mod user;

pub use job::{CreateJobRequest, EmploymentType, Job, JobResponse};
pub use user::{AuthResponse, LoginRequest, SignupRequest, User, UserProfile, UserRole};

// Database errors
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Application state
#[derive(Clone)]
pub struct AppState {
    pub db: std::sync::Arc<Pool<Postgres>>,
    pub jwt_secret: String,
}
