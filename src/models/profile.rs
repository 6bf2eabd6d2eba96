use super::error::AppError;
use serde::{Deserialize, Serialize};

/// Highest value an extraordinary score can take
pub const MAX_SCORE: u8 = 100;

/// Request body for the profile generator
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProfileRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
}

impl ProfileRequest {
    /// Builds a request from raw form values. Blank goals are treated as absent.
    pub fn from_form(name: &str, goals: &str) -> Self {
        let goals = goals.trim();
        Self {
            name: name.trim().to_string(),
            goals: (!goals.is_empty()).then(|| goals.to_string()),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            goals: None,
        }
    }
}

/// AI-generated sustainability profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub extraordinary_score: u8,
    pub achievements: Vec<String>,
    pub impact_level: String,
}

impl Profile {
    /// Rejects profiles a backend should never produce
    pub fn validate(&self) -> Result<(), AppError> {
        if self.extraordinary_score > MAX_SCORE {
            return Err(AppError::ValidationError(format!(
                "Extraordinary score {} exceeds {MAX_SCORE}",
                self.extraordinary_score
            )));
        }
        Ok(())
    }

    /// Score formatted for display, e.g. "95/100"
    pub fn score_label(&self) -> String {
        format!("{}/{MAX_SCORE}", self.extraordinary_score)
    }

    /// Name shown on the result card; falls back when the user left it blank
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Anonymous"
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserialization_camel_case() {
        let json = r#"{
            "name": "Ada",
            "extraordinaryScore": 88,
            "achievements": ["Carbon Warrior"],
            "impactLevel": "High"
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.extraordinary_score, 88);
        assert_eq!(profile.achievements, vec!["Carbon Warrior".to_string()]);
        assert_eq!(profile.impact_level, "High");
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_score_out_of_range_rejected() {
        let profile = Profile {
            name: "Ada".to_string(),
            extraordinary_score: 120,
            achievements: vec![],
            impact_level: "High".to_string(),
        };
        assert!(matches!(
            profile.validate(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_request_from_form_trims_and_drops_blank_goals() {
        let request = ProfileRequest::from_form("  Ada ", "   ");
        assert_eq!(request.name, "Ada");
        assert_eq!(request.goals, None);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Ada" }));
    }

    #[test]
    fn test_request_keeps_goals() {
        let request = ProfileRequest::from_form("Ada", "Bike to work");
        assert_eq!(request.goals.as_deref(), Some("Bike to work"));
    }

    #[test]
    fn test_display_name_fallback() {
        let profile = Profile {
            name: String::new(),
            extraordinary_score: 95,
            achievements: vec![],
            impact_level: "Extraordinary".to_string(),
        };
        assert_eq!(profile.display_name(), "Anonymous");
        assert_eq!(profile.score_label(), "95/100");
    }
}
