use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{query, Row};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::shared::models::{
    AppState, CreateJobRequest, DatabaseError, Job, User, UserRole,
};

fn user_from_row(row: &PgRow) -> User {
    User {
        id: row.get("id"),
        email: row.get("email"),
        full_name: row.get("full_name"),
        role: row.get("role"),
        password_hash: row.get("password_hash"),
        active: row.get("active"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        last_login_at: row.get("last_login_at"),
    }
}

fn job_from_row(row: &PgRow) -> Result<Job, DatabaseError> {
    let requirements: serde_json::Value = row.get("requirements");
    Ok(Job {
        id: row.get("id"),
        title: row.get("title"),
        company: row.get("company"),
        location: row.get("location"),
        salary: row.get("salary"),
        description: row.get("description"),
        employment_type: row.get("employment_type"),
        requirements: serde_json::from_value(requirements)?,
        remote: row.get("remote"),
        posted_by: row.get("posted_by"),
        created_at: row.get("created_at"),
    })
}

impl AppState {
    // User operations
    pub async fn create_user(
        &self,
        email: &str,
        full_name: &str,
        role: UserRole,
        password_hash: &str,
    ) -> Result<User, DatabaseError> {
        let id = Uuid::new_v4();
        let created_at = Utc::now();

        query(
            r#"
            INSERT INTO users (id, email, full_name, role, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(full_name)
        .bind(role)
        .bind(password_hash)
        .bind(created_at)
        .execute(&*self.db)
        .await?;

        Ok(User {
            id,
            email: email.to_string(),
            full_name: full_name.to_string(),
            role,
            password_hash: password_hash.to_string(),
            active: true,
            created_at,
            updated_at: created_at,
            last_login_at: None,
        })
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let row = query(
            r#"
            SELECT id, email, full_name, role, password_hash, active, created_at, updated_at, last_login_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&*self.db)
        .await?;

        Ok(row.map(|r| user_from_row(&r)))
    }

    pub async fn update_last_login(&self, email: &str) -> Result<bool, DatabaseError> {
        let result = query(
            r#"
            UPDATE users
            SET last_login_at = NOW()
            WHERE email = $1
            "#,
        )
        .bind(email)
        .execute(&*self.db)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    // Job operations
    pub async fn create_job(
        &self,
        req: &CreateJobRequest,
        posted_by: Uuid,
    ) -> Result<Job, DatabaseError> {
        let id = Uuid::new_v4();
        let created_at = Utc::now();
        let requirements = serde_json::to_value(&req.requirements)?;

        query(
            r#"
            INSERT INTO jobs (id, title, company, location, salary, description,
                              employment_type, requirements, remote, posted_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(id)
        .bind(&req.title)
        .bind(&req.company)
        .bind(&req.location)
        .bind(&req.salary)
        .bind(&req.description)
        .bind(req.employment_type)
        .bind(&requirements)
        .bind(req.remote)
        .bind(posted_by)
        .bind(created_at)
        .execute(&*self.db)
        .await?;

        Ok(Job {
            id,
            title: req.title.clone(),
            company: req.company.clone(),
            location: req.location.clone(),
            salary: req.salary.clone(),
            description: req.description.clone(),
            employment_type: req.employment_type,
            requirements: req.requirements.clone(),
            remote: req.remote,
            posted_by,
            created_at,
        })
    }

    pub async fn get_all_jobs(&self) -> Result<Vec<Job>, DatabaseError> {
        let rows = query(
            r#"
            SELECT id, title, company, location, salary, description,
                   employment_type, requirements, remote, posted_by, created_at
            FROM jobs
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&*self.db)
        .await?;

        rows.iter().map(job_from_row).collect()
    }

    pub async fn get_job(&self, id: &Uuid) -> Result<Option<Job>, DatabaseError> {
        let row = query(
            r#"
            SELECT id, title, company, location, salary, description,
                   employment_type, requirements, remote, posted_by, created_at
            FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.db)
        .await?;

        row.as_ref().map(job_from_row).transpose()
    }
}

// Database connection utilities
pub async fn initialize_app_state(
    database_url: &str,
    jwt_secret: String,
) -> anyhow::Result<AppState> {
    use sqlx::postgres::PgPoolOptions;

    let db = Arc::new(
        PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?,
    );

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&*db).await?;
    info!("Database migrations completed successfully");

    Ok(AppState { db, jwt_secret })
}
