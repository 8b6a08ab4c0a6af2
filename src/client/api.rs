use reqwest::StatusCode;
use std::sync::Arc;
use tracing::{debug, info};

use super::config::ClientConfig;
use super::credentials::CredentialProvider;
use super::error::{ClientError, Result};
use super::http::HttpClient;
use crate::shared::models::{AuthResponse, CreateJobRequest, JobResponse, LoginRequest, SignupRequest, UserProfile};

/// Typed wrapper over the job board REST API.
pub struct JobBoardClient {
    http: HttpClient,
}

impl JobBoardClient {
    pub fn new(config: ClientConfig, credentials: Arc<dyn CredentialProvider>) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config, credentials)?,
        })
    }

    pub async fn health(&self) -> Result<serde_json::Value> {
        let response = self.http.get("/health")?.send().await?;
        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            status => Err(ClientError::Api(format!("Health check failed ({status})"))),
        }
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse> {
        debug!("Signing up {}", request.email);

        let response = self.http.post("/auth/signup")?.json(request).send().await?;
        match response.status() {
            StatusCode::OK | StatusCode::CREATED => {
                let auth = response.json::<AuthResponse>().await?;
                info!("Account created for {}", auth.email);
                Ok(auth)
            }
            StatusCode::BAD_REQUEST => Err(ClientError::Api(error_text(response).await)),
            status => Err(ClientError::Api(format!(
                "Signup failed ({status}): {}",
                error_text(response).await
            ))),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        debug!("Logging in {}", email);

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.http.post("/auth/login")?.json(&request).send().await?;
        match response.status() {
            StatusCode::OK => {
                let auth = response.json::<AuthResponse>().await?;
                info!("Logged in as {}", auth.email);
                Ok(auth)
            }
            StatusCode::UNAUTHORIZED => {
                Err(ClientError::Api("Invalid email or password".to_string()))
            }
            status => Err(ClientError::Api(format!(
                "Login failed ({status}): {}",
                error_text(response).await
            ))),
        }
    }

    pub async fn me(&self) -> Result<UserProfile> {
        let response = self.http.get("/auth/me")?.send().await?;
        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::UNAUTHORIZED => {
                Err(ClientError::Api("Unauthorized - check token".to_string()))
            }
            status => Err(ClientError::Api(format!(
                "Profile lookup failed ({status}): {}",
                error_text(response).await
            ))),
        }
    }

    pub async fn list_jobs(&self) -> Result<Vec<JobResponse>> {
        let response = self.http.get("/jobs")?.send().await?;
        match response.status() {
            StatusCode::OK => {
                let jobs = response.json::<Vec<JobResponse>>().await?;
                debug!("Fetched {} jobs", jobs.len());
                Ok(jobs)
            }
            status => Err(ClientError::Api(format!(
                "Failed to list jobs ({status}): {}",
                error_text(response).await
            ))),
        }
    }

    pub async fn get_job(&self, id: &str) -> Result<JobResponse> {
        let response = self.http.get(&format!("/jobs/{id}"))?.send().await?;
        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(ClientError::Api(format!("Job {id} not found"))),
            status => Err(ClientError::Api(format!(
                "Failed to fetch job ({status}): {}",
                error_text(response).await
            ))),
        }
    }

    pub async fn create_job(&self, request: &CreateJobRequest) -> Result<JobResponse> {
        let response = self.http.post("/jobs")?.json(request).send().await?;
        match response.status() {
            StatusCode::OK | StatusCode::CREATED => {
                let job = response.json::<JobResponse>().await?;
                info!("Job '{}' posted with id {}", job.title, job.id);
                Ok(job)
            }
            StatusCode::UNAUTHORIZED => {
                Err(ClientError::Api("Unauthorized - check token".to_string()))
            }
            StatusCode::FORBIDDEN => Err(ClientError::Api(
                "Only employer accounts can post jobs".to_string(),
            )),
            status => Err(ClientError::Api(format!(
                "Failed to post job ({status}): {}",
                error_text(response).await
            ))),
        }
    }
}

/// Pull the message out of the API error envelope, falling back to the raw
/// body.
async fn error_text(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(text) => serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| {
                v.pointer("/error/message")
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or(text),
        Err(_) => "Unknown error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::credentials::StaticToken;
    use crate::shared::models::{EmploymentType, UserRole};
    use wiremock::matchers::{body_json_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, provider: Arc<dyn CredentialProvider>) -> JobBoardClient {
        JobBoardClient::new(ClientConfig::new(&server.uri()), provider).unwrap()
    }

    fn job_body(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": "Senior Software Engineer",
            "company": "TechCorp",
            "location": "San Francisco, CA",
            "salary": "$120,000 - $150,000",
            "description": "Build the job board.",
            "employment_type": "full_time",
            "requirements": ["Rust", "5+ years experience"],
            "remote": true,
            "posted_by": "9a1f0a52-5be1-4dbb-b9a2-e58ce95a7b9e",
            "created_at": "2024-03-01T12:00:00+00:00"
        })
    }

    #[tokio::test]
    async fn list_jobs_parses_the_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/jobs"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([job_body("j1"), job_body("j2")])),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, Arc::new(StaticToken::none()));
        let jobs = client.list_jobs().await.unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].employment_type, EmploymentType::FullTime);
        assert!(jobs[0].remote);
    }

    #[tokio::test]
    async fn get_job_maps_404_to_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/jobs/nope"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": {"code": "NOT_FOUND", "message": "Job not found"}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Arc::new(StaticToken::none()));
        let err = client.get_job("nope").await.err().unwrap();
        assert!(matches!(err, ClientError::Api(msg) if msg.contains("not found")));
    }

    #[tokio::test]
    async fn create_job_sends_the_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/jobs"))
            .and(header("authorization", "Bearer employer-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(job_body("j1")))
            .mount(&server)
            .await;

        let client = client_for(&server, Arc::new(StaticToken::new("employer-token")));
        let request = CreateJobRequest {
            title: "Senior Software Engineer".to_string(),
            company: "TechCorp".to_string(),
            location: "San Francisco, CA".to_string(),
            salary: "$120,000 - $150,000".to_string(),
            description: "Build the job board.".to_string(),
            employment_type: EmploymentType::FullTime,
            requirements: vec!["Rust".to_string()],
            remote: true,
        };
        let job = client.create_job(&request).await.unwrap();
        assert_eq!(job.id, "j1");
    }

    #[tokio::test]
    async fn create_job_maps_403_for_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/jobs"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "error": {"code": "FORBIDDEN", "message": "Only employers can post jobs"}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Arc::new(StaticToken::new("candidate-token")));
        let request = CreateJobRequest {
            title: "x".to_string(),
            company: "x".to_string(),
            location: "x".to_string(),
            salary: "x".to_string(),
            description: "x".to_string(),
            employment_type: EmploymentType::Contract,
            requirements: vec![],
            remote: false,
        };
        let err = client.create_job(&request).await.err().unwrap();
        assert!(matches!(err, ClientError::Api(msg) if msg.contains("employer")));
    }

    #[tokio::test]
    async fn login_posts_credentials_and_parses_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json_string(
                r#"{"email":"sarah@example.com","password":"securePass123"}"#,
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "jwt-token",
                "token_type": "bearer",
                "email": "sarah@example.com",
                "full_name": "Sarah Johnson",
                "role": "candidate",
                "expires_at": "2024-03-02T12:00:00+00:00"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, Arc::new(StaticToken::none()));
        let auth = client.login("sarah@example.com", "securePass123").await.unwrap();
        assert_eq!(auth.access_token, "jwt-token");
        assert_eq!(auth.role, UserRole::Candidate);
    }
}
