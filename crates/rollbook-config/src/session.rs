use std::env;

/// Per-invocation session configuration.
///
/// The bearer token is read from the environment each run and never
/// written anywhere; token storage belongs to the operator's shell.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub token: Option<String>,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let token = env::var("ROLLBOOK_API_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Self { token }
    }
}
