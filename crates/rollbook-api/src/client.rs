use reqwest::{Method, RequestBuilder, Response, StatusCode};
use rollbook_config::{ApiConfig, SessionConfig};
use rollbook_core::errors::AppError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Typed client for the rollbook backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: &SessionConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(AppError::config)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: session.token.clone(),
        })
    }

    /// Joins a resource path onto the base URL. Paths are given with a
    /// leading slash, e.g. `/students`.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub async fn get<T>(&self, path: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let builder = self.request(Method::GET, path);
        self.send_json("GET", path, builder).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).query(query);
        self.send_json("GET", path, builder).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path).json(body);
        self.send_json("POST", path, builder).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::PUT, path).json(body);
        self.send_json("PUT", path, builder).await
    }

    /// Deletes a resource. The backend answers with a message body the
    /// caller does not need.
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let builder = self.request(Method::DELETE, path);
        let response = self.dispatch("DELETE", path, builder).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn send_json<T>(
        &self,
        method: &str,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch(method, path, builder).await?;
        if response.status().is_success() {
            response.json::<T>().await.map_err(AppError::decode)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn dispatch(
        &self,
        method: &str,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Response, AppError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let start = Instant::now();

        let response = builder.send().await.map_err(|e| {
            error!(
                request_id = %request_id,
                method = %method,
                path = %path,
                "Request failed: {}", e
            );
            AppError::network(e)
        })?;

        let latency = start.elapsed();
        log_response(&request_id, method, path, response.status(), latency);
        Ok(response)
    }

    async fn error_from_response(response: Response) -> AppError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        AppError::backend(status, extract_error_message(&body))
    }
}

/// Pulls the human-readable message out of a failure body. The backend
/// uses `{"error": "..."}`; `{"message": "..."}` is accepted as well.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["error", "message"] {
        if let Some(message) = value.get(key).and_then(|m| m.as_str()) {
            let message = message.trim();
            if !message.is_empty() {
                return Some(message.to_string());
            }
        }
    }
    None
}

fn log_response(request_id: &str, method: &str, path: &str, status: StatusCode, latency: Duration) {
    match status.as_u16() {
        200..=299 => {
            info!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Request completed"
            );
        }
        400..=499 => {
            warn!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Client error"
            );
        }
        500..=599 => {
            error!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Server error"
            );
        }
        _ => {
            info!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Request completed"
            );
        }
    }
}
