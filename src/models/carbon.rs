use super::error::AppError;
use serde::{Deserialize, Serialize};

/// Allowed drift when checking that breakdown percentages add up to 100
const PERCENTAGE_TOLERANCE: f64 = 0.5;

/// Share of total emissions attributed to one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub category: String,
    /// Percentage of the total (0-100). The carbon API names this field `value`.
    #[serde(rename = "value", alias = "percentage")]
    pub percentage: f64,
    /// Tons CO₂ per year
    pub amount: f64,
}

/// Emissions for one period of the trend line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    #[serde(rename = "month", alias = "period")]
    pub period: String,
    pub emissions: f64,
}

/// Carbon footprint estimate returned by the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonResult {
    /// Tons CO₂ per year
    pub total_emissions: f64,
    pub breakdown: Vec<BreakdownEntry>,
    #[serde(default)]
    pub trend: Vec<TrendPoint>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl CarbonResult {
    /// Sum of all breakdown percentages
    pub fn breakdown_total(&self) -> f64 {
        self.breakdown.iter().map(|b| b.percentage).sum()
    }

    /// Checks the invariants the views rely on
    pub fn validate(&self) -> Result<(), AppError> {
        if self.total_emissions < 0.0 || !self.total_emissions.is_finite() {
            return Err(AppError::ValidationError(format!(
                "Invalid total emissions: {}",
                self.total_emissions
            )));
        }

        if let Some(entry) = self
            .breakdown
            .iter()
            .find(|b| !(0.0..=100.0).contains(&b.percentage))
        {
            return Err(AppError::ValidationError(format!(
                "Percentage for {} out of range: {}",
                entry.category, entry.percentage
            )));
        }

        if !self.breakdown.is_empty() {
            let total = self.breakdown_total();
            if (total - 100.0).abs() > PERCENTAGE_TOLERANCE {
                return Err(AppError::ValidationError(format!(
                    "Breakdown percentages sum to {total}, expected 100"
                )));
            }
        }

        Ok(())
    }

    /// Period labels and emission values for the trend chart
    pub fn trend_series(&self) -> (Vec<String>, Vec<f64>) {
        let labels = self.trend.iter().map(|t| t.period.clone()).collect();
        let values = self.trend.iter().map(|t| t.emissions).collect();
        (labels, values)
    }

    /// (percentage, category) pairs for the breakdown pie chart
    pub fn breakdown_series(&self) -> Vec<(f64, String)> {
        self.breakdown
            .iter()
            .map(|b| (b.percentage, b.category.clone()))
            .collect()
    }
}

/// Activity figures entered in the calculator form
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ActivityInput {
    /// Miles driven per week
    #[serde(rename = "miles", skip_serializing_if = "Option::is_none")]
    pub miles_driven: Option<f64>,
    #[serde(rename = "flights", skip_serializing_if = "Option::is_none")]
    pub flights_per_year: Option<u32>,
    /// kWh per month
    #[serde(rename = "energy", skip_serializing_if = "Option::is_none")]
    pub energy_usage: Option<f64>,
}

impl ActivityInput {
    /// Parses raw form values. Blank fields are absent; anything else must be
    /// a non-negative number.
    pub fn from_form(miles: &str, flights: &str, energy: &str) -> Result<Self, AppError> {
        Ok(Self {
            miles_driven: parse_quantity(miles, "Miles driven")?,
            flights_per_year: parse_count(flights, "Flights per year")?,
            energy_usage: parse_quantity(energy, "Energy usage")?,
        })
    }
}

fn parse_quantity(raw: &str, field: &str) -> Result<Option<f64>, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(AppError::ValidationError(format!(
            "{field} must be a non-negative number, got '{raw}'"
        ))),
    }
}

fn parse_count(raw: &str, field: &str) -> Result<Option<u32>, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    raw.parse::<u32>().map(Some).map_err(|_| {
        AppError::ValidationError(format!(
            "{field} must be a whole non-negative number, got '{raw}'"
        ))
    })
}
