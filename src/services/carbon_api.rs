use crate::config::{BackendMode, Config};
use crate::models::{
    carbon::{ActivityInput, CarbonResult},
    error::AppError,
};
use crate::services::api::{ApiClient, CALCULATE_CARBON_PATH};
use crate::services::mock;

/// Client for the carbon footprint estimation service
pub struct CarbonFootprintClient {
    api: ApiClient,
}

impl CarbonFootprintClient {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            api: ApiClient::new()?,
        })
    }

    /// Posts the activity figures and returns the validated estimate
    pub async fn calculate(&self, input: &ActivityInput) -> Result<CarbonResult, AppError> {
        let result: CarbonResult = self.api.post_json(CALCULATE_CARBON_PATH, input).await?;
        result.validate()?;
        Ok(result)
    }
}

/// Estimates the carbon footprint for `input` using the configured backend
pub async fn calculate_carbon(input: &ActivityInput) -> Result<CarbonResult, AppError> {
    match Config::BACKEND_MODE {
        BackendMode::Mock => {
            mock::simulate_latency().await;
            Ok(mock::mock_carbon_result(input))
        }
        BackendMode::Http => CarbonFootprintClient::new()?.calculate(input).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(CarbonFootprintClient::new().is_ok());
    }

    #[test]
    fn test_request_body_shape() {
        let input = ActivityInput {
            miles_driven: Some(120.0),
            flights_per_year: Some(2),
            energy_usage: Some(350.0),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "miles": 120.0, "flights": 2, "energy": 350.0 })
        );
    }
}
