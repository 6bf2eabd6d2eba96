use crate::config::{BackendMode, Config};
use crate::models::{
    error::AppError,
    profile::{Profile, ProfileRequest},
};
use crate::services::api::{ApiClient, GENERATE_PROFILE_PATH};
use crate::services::mock;

/// Client for the AI profile generator
pub struct ProfileGeneratorClient {
    api: ApiClient,
}

impl ProfileGeneratorClient {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            api: ApiClient::new()?,
        })
    }

    pub async fn generate(&self, request: &ProfileRequest) -> Result<Profile, AppError> {
        let profile: Profile = self.api.post_json(GENERATE_PROFILE_PATH, request).await?;
        profile.validate()?;
        Ok(profile)
    }
}

/// Generates a profile for `request` using the configured backend
pub async fn generate_profile(request: &ProfileRequest) -> Result<Profile, AppError> {
    match Config::BACKEND_MODE {
        BackendMode::Mock => {
            mock::simulate_latency().await;
            Ok(mock::mock_profile(request))
        }
        BackendMode::Http => ProfileGeneratorClient::new()?.generate(request).await,
    }
}
