use std::env;

/// Backend endpoint configuration.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL every resource path is joined onto, without a trailing
    /// slash, e.g. `http://localhost:8000/api`.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url = env::var("ROLLBOOK_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000/api".to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = env::var("ROLLBOOK_API_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            base_url,
            timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env() {
        // Environment-dependent values are exercised through from_env in
        // integration tests; here we only pin the default shape.
        let config = ApiConfig {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_secs: 30,
        };
        assert!(!config.base_url.ends_with('/'));
    }
}
