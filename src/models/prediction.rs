//! Raw wire types for the `POST /predict` response.
//!
//! Decoding is deliberately lenient: everything the dashboard can live
//! without is optional or defaulted, so a response missing a field decodes
//! fine and the view-model substitutes its placeholder. Only
//! `predicted_price` is required.

use serde::Deserialize;

fn default_unit() -> String {
    "/unit".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResult {
    #[serde(default)]
    pub crop_type: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub season: String,
    pub predicted_price: f64,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Predicted monthly prices, first entry = next month
    #[serde(default)]
    pub future_prices: Vec<f64>,
    /// Oldest-to-newest, last entry = the current month
    #[serde(default)]
    pub historical_prices: Vec<f64>,
    /// Positionally aligned with `future_prices` when present
    #[serde(default)]
    pub confidence_scores: Option<Vec<f64>>,
    #[serde(default)]
    pub factors: FactorSet,
    #[serde(default)]
    pub recommendations: Recommendations,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactorSet {
    #[serde(default)]
    pub weather: Option<Factor>,
    #[serde(default)]
    pub supply: Option<Factor>,
    #[serde(default)]
    pub demand: Option<Factor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Factor {
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,
    /// CSS-style tone class from the backend, e.g. `text-green-600`
    #[serde(default)]
    pub impact_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub sell_time: Option<String>,
    #[serde(default)]
    pub trend_analysis: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_response_decodes() {
        let result: PredictionResult = serde_json::from_value(serde_json::json!({
            "crop_type": "Rice",
            "state": "Karnataka",
            "country": "India",
            "season": "Kharif (Monsoon)",
            "predicted_price": 2500.0,
            "current_price": 2400.0,
            "unit": "/quintal",
            "future_prices": [2500.0, 2550.0],
            "historical_prices": [2300.0, 2350.0],
            "confidence_scores": [92.5, 89.1],
            "factors": {
                "weather": {
                    "condition": "Normal monsoon expected",
                    "impact": "Generally favorable",
                    "impact_color": "text-green-600"
                }
            },
            "recommendations": {
                "sell_time": "Sell in 2-3 months",
                "trend_analysis": "Stable with slight seasonality"
            }
        }))
        .unwrap();

        assert_eq!(result.unit, "/quintal");
        assert_eq!(result.current_price, Some(2400.0));
        assert_eq!(result.future_prices.len(), 2);
        assert!(result.factors.weather.is_some());
        assert!(result.factors.supply.is_none());
    }

    #[test]
    fn sparse_response_decodes_with_defaults() {
        // Only the predicted price is present; everything else defaults
        let result: PredictionResult =
            serde_json::from_value(serde_json::json!({ "predicted_price": 42.0 })).unwrap();

        assert_eq!(result.unit, "/unit");
        assert_eq!(result.current_price, None);
        assert!(result.future_prices.is_empty());
        assert!(result.confidence_scores.is_none());
        assert!(result.recommendations.sell_time.is_none());
    }

    #[test]
    fn missing_predicted_price_is_rejected() {
        let result = serde_json::from_value::<PredictionResult>(serde_json::json!({
            "current_price": 100.0
        }));
        assert!(result.is_err());
    }
}
