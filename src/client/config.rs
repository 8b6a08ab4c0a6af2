/// Path prefix appended to the backend origin for every API route.
pub const API_PATH: &str = "/api";

pub const DEFAULT_ORIGIN: &str = "http://localhost:8001";

/// Immutable client configuration. Built once at startup; the base URL is the
/// backend origin with the API path suffix already applied.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    with_credentials: bool,
}

impl ClientConfig {
    pub fn new(origin: &str) -> Self {
        Self {
            base_url: format!("{}{API_PATH}", origin.trim_end_matches('/')),
            with_credentials: true,
        }
    }

    /// Read the backend origin from JOBBOARD_API_URL, falling back to the
    /// local development server.
    pub fn from_env() -> Self {
        let origin =
            std::env::var("JOBBOARD_API_URL").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());
        Self::new(&origin)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials_enabled(&self) -> bool {
        self.with_credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_api_suffix() {
        let config = ClientConfig::new("http://example.com:8001");
        assert_eq!(config.base_url(), "http://example.com:8001/api");
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let config = ClientConfig::new("http://example.com/");
        assert_eq!(config.base_url(), "http://example.com/api");
    }
}
