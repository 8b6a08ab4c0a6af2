use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder};
use std::sync::Arc;
use tracing::debug;

use super::config::ClientConfig;
use super::credentials::CredentialProvider;
use super::error::Result;

/// The process-wide authenticated HTTP client. One instance is shared by all
/// in-flight requests; it holds only the immutable base configuration and a
/// handle to the credential provider, so concurrent use needs no locking.
///
/// Construction performs no network activity.
pub struct HttpClient {
    inner: Client,
    config: ClientConfig,
    credentials: Arc<dyn CredentialProvider>,
}

impl HttpClient {
    pub fn new(config: ClientConfig, credentials: Arc<dyn CredentialProvider>) -> Result<Self> {
        let inner = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .cookie_store(config.credentials_enabled())
            .build()?;

        Ok(Self {
            inner,
            config,
            credentials,
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.config.base_url(),
                path.trim_start_matches('/')
            )
        }
    }

    /// Build a request for `path` relative to the base URL. The token is
    /// read from the credential provider at this instant: when present, the
    /// request carries exactly one `Authorization: Bearer` header; when
    /// absent, the request goes out without one. A provider failure is
    /// returned to the caller unresolved and the request is never dispatched.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.url_for(path);
        debug!("Building {} request for {}", method, url);

        let builder = self.inner.request(method, url);
        match self.credentials.token()? {
            Some(token) => Ok(builder.header(AUTHORIZATION, format!("Bearer {token}"))),
            None => Ok(builder),
        }
    }

    pub fn get(&self, path: &str) -> Result<RequestBuilder> {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> Result<RequestBuilder> {
        self.request(Method::POST, path)
    }
}
