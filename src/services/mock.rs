//! Canned backend responses used until the real services are wired in.

use crate::config::Config;
use crate::models::{
    carbon::{ActivityInput, BreakdownEntry, CarbonResult, TrendPoint},
    profile::{Profile, ProfileRequest},
};
use gloo_timers::future::TimeoutFuture;

pub const MOCK_SCORE: u8 = 95;
pub const MOCK_IMPACT_LEVEL: &str = "Extraordinary";
pub const MOCK_ACHIEVEMENTS: [&str; 3] =
    ["Carbon Warrior", "Sustainability Pioneer", "Green Innovator"];
pub const MOCK_TOTAL_EMISSIONS: f64 = 2.4;

/// Placeholder profile. Only the name is taken from the request.
pub fn mock_profile(request: &ProfileRequest) -> Profile {
    Profile {
        name: request.name.clone(),
        extraordinary_score: MOCK_SCORE,
        achievements: MOCK_ACHIEVEMENTS.iter().map(|a| a.to_string()).collect(),
        impact_level: MOCK_IMPACT_LEVEL.to_string(),
    }
}

/// Placeholder carbon estimate. The activity figures are not used.
pub fn mock_carbon_result(_input: &ActivityInput) -> CarbonResult {
    let breakdown = [
        ("Transport", 40.0),
        ("Energy", 30.0),
        ("Food", 20.0),
        ("Waste", 10.0),
    ]
    .into_iter()
    .map(|(category, percentage)| BreakdownEntry {
        category: category.to_string(),
        percentage,
        amount: MOCK_TOTAL_EMISSIONS * percentage / 100.0,
    })
    .collect();

    let trend = [("Jan", 2.8), ("Feb", 2.6), ("Mar", 2.4), ("Apr", 2.2)]
        .into_iter()
        .map(|(period, emissions)| TrendPoint {
            period: period.to_string(),
            emissions,
        })
        .collect();

    CarbonResult {
        total_emissions: MOCK_TOTAL_EMISSIONS,
        breakdown,
        trend,
        recommendations: vec![
            "Switch to renewable energy sources".to_string(),
            "Use public transportation twice a week".to_string(),
            "Reduce meat consumption by 30%".to_string(),
        ],
    }
}

/// Waits for the configured simulated latency
pub async fn simulate_latency() {
    TimeoutFuture::new(Config::MOCK_LATENCY_MS).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_profile_echoes_name() {
        let profile = mock_profile(&ProfileRequest::from_form("Ada", "Plant trees"));
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.extraordinary_score, 95);
        assert_eq!(profile.achievements.len(), 3);
        assert_eq!(profile.achievements[0], "Carbon Warrior");
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_mock_carbon_result_is_consistent() {
        let result = mock_carbon_result(&ActivityInput::default());
        assert_eq!(result.total_emissions, 2.4);
        assert!((result.breakdown_total() - 100.0).abs() < f64::EPSILON);
        assert_eq!(result.trend.len(), 4);
        assert_eq!(result.recommendations.len(), 3);
        assert!(result.validate().is_ok());

        let amounts: f64 = result.breakdown.iter().map(|b| b.amount).sum();
        assert!((amounts - result.total_emissions).abs() < 1e-9);
    }

    #[test]
    fn test_mock_carbon_ignores_input() {
        let busy = ActivityInput::from_form("500", "12", "900").unwrap();
        assert_eq!(
            mock_carbon_result(&busy),
            mock_carbon_result(&ActivityInput::default())
        );
    }
}
