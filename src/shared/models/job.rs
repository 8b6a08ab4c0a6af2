use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Type;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "employment_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full_time",
            EmploymentType::PartTime => "part_time",
            EmploymentType::Contract => "contract",
            EmploymentType::Internship => "internship",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full_time" => Ok(EmploymentType::FullTime),
            "part_time" => Ok(EmploymentType::PartTime),
            "contract" => Ok(EmploymentType::Contract),
            "internship" => Ok(EmploymentType::Internship),
            other => Err(format!("unknown employment type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub employment_type: EmploymentType,
    pub requirements: Vec<String>,
    pub remote: bool,
    pub posted_by: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateJobRequest {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub remote: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub employment_type: EmploymentType,
    pub requirements: Vec<String>,
    pub remote: bool,
    pub posted_by: String,
    pub created_at: String,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id.to_string(),
            title: job.title,
            company: job.company,
            location: job.location,
            salary: job.salary,
            description: job.description,
            employment_type: job.employment_type,
            requirements: job.requirements,
            remote: job.remote,
            posted_by: job.posted_by.to_string(),
            created_at: job.created_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employment_type_serializes_snake_case() {
        let json = serde_json::to_string(&EmploymentType::FullTime).unwrap();
        assert_eq!(json, "\"full_time\"");
        let et: EmploymentType = serde_json::from_str("\"contract\"").unwrap();
        assert_eq!(et, EmploymentType::Contract);
    }

    #[test]
    fn create_request_defaults_optional_fields() {
        let req: CreateJobRequest = serde_json::from_str(
            r#"{
                "title": "Backend Engineer",
                "company": "Acme",
                "location": "Berlin",
                "salary": "€70,000 - €90,000",
                "description": "Build services.",
                "employment_type": "full_time"
            }"#,
        )
        .unwrap();
        assert!(req.requirements.is_empty());
        assert!(!req.remote);
    }
}
