use crate::config::Config;
use crate::models::error::AppError;
use crate::services::retry::retry_with_backoff;
use serde::{Serialize, de::DeserializeOwned};

pub const GENERATE_PROFILE_PATH: &str = "/api/generate-profile";
pub const CALCULATE_CARBON_PATH: &str = "/api/calculate-carbon";

/// JSON client for the Planty REST services
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client pointed at `Config::API_BASE_URL`
    pub fn new() -> Result<Self, AppError> {
        Self::with_base_url(Config::API_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL for an endpoint path
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POSTs `body` as JSON and decodes the JSON response, retrying when rate limited
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(path);
        let url = url.as_str();

        retry_with_backoff(
            || async move {
                let response = self
                    .http
                    .post(url)
                    .json(body)
                    .send()
                    .await
                    .map_err(|e| self.classify_error(e))?;

                let status = response.status();
                if !status.is_success() {
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "<failed to read error body>".to_string());
                    return Err(error_for_status(status, &body));
                }

                response
                    .json::<T>()
                    .await
                    .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))
            },
            Config::MAX_RETRY_ATTEMPTS,
        )
        .await
    }

    /// Converts a reqwest error into an appropriate `AppError`
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Timeout(error.to_string())
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::NetworkError(error.to_string())
        }
    }
}

/// Creates an error based on HTTP status code
pub fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    match status.as_u16() {
        408 | 504 => AppError::Timeout(format!("{status}: {body}")),
        429 => AppError::RateLimited,
        400 | 422 => AppError::ValidationError(format!("Rejected by server {status}: {body}")),
        400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
        500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_endpoint_url_joins_without_double_slash() {
        let client = ApiClient::with_base_url("http://localhost:5000/").unwrap();
        assert_eq!(
            client.endpoint_url(GENERATE_PROFILE_PATH),
            "http://localhost:5000/api/generate-profile"
        );
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(
            error_for_status(StatusCode::TOO_MANY_REQUESTS, ""),
            AppError::RateLimited
        );
        assert!(matches!(
            error_for_status(StatusCode::GATEWAY_TIMEOUT, "slow"),
            AppError::Timeout(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::UNPROCESSABLE_ENTITY, "bad"),
            AppError::ValidationError(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::NOT_FOUND, "missing"),
            AppError::ApiError(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            AppError::ApiError(_)
        ));
    }
}
