//! The dashboard view-model: every display value derived from one raw
//! prediction response plus the as-of date.
//!
//! This is the domain model independent of UI/plotting concerns. The three
//! render targets (summary panel, charts, table) all read from one
//! `DashboardModel`, so a value like the price-change direction can never
//! disagree between them. Absence is modeled as `Option`/placeholder text,
//! never as a panic.

use chrono::NaiveDate;

use crate::domain::months::{long_month_label, shift_months, short_month_label};
use crate::models::prediction::{Factor, PredictionResult};

/// Placeholder shown when a factor has no condition text
pub const FACTOR_CONDITION_FALLBACK: &str = "N/A";
/// Placeholder shown when the backend sends no sell-time recommendation
pub const SELL_TIME_FALLBACK: &str = "No specific recommendation available.";
/// Placeholder shown when the backend sends no trend analysis
pub const TREND_ANALYSIS_FALLBACK: &str = "No detailed trend analysis available.";
/// Rendered wherever a percentage or confidence value is absent
pub const NOT_AVAILABLE: &str = "N/A";

/// Direction of a price movement, shared by the summary badge and the
/// per-row indicators so they can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// A zero delta counts as `Up`, matching the flat-month display
    pub fn from_delta(delta: f64) -> Self {
        if delta >= 0.0 { Trend::Up } else { Trend::Down }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "⬆",
            Trend::Down => "⬇",
        }
    }
}

/// Tone of a factor's impact text, classified from the backend's
/// CSS-style color class. Unknown classes fall back to neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImpactTone {
    Positive,
    Caution,
    Negative,
    #[default]
    Neutral,
}

impl ImpactTone {
    pub fn from_class(class: Option<&str>) -> Self {
        match class {
            Some(c) if c.contains("green") => ImpactTone::Positive,
            Some(c) if c.contains("yellow") => ImpactTone::Caution,
            Some(c) if c.contains("red") => ImpactTone::Negative,
            _ => ImpactTone::Neutral,
        }
    }
}

/// A signed percentage change with its display classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceChange {
    /// Signed percent; render with `.abs()` next to the trend arrow
    pub percent: f64,
    pub trend: Trend,
}

impl PriceChange {
    /// Percent change from `previous` to `next`. None when the previous
    /// price is absent or zero — that case renders as "N/A", not 0%.
    fn between(previous: Option<f64>, next: f64) -> Option<Self> {
        let previous = previous?;
        if previous == 0.0 {
            return None;
        }
        let percent = (next - previous) / previous * 100.0;
        Some(Self {
            percent,
            trend: Trend::from_delta(percent),
        })
    }

    /// Magnitude with two decimals, e.g. `4.17%`
    pub fn magnitude_text(&self) -> String {
        format!("{:.2}%", self.percent.abs())
    }
}

/// One future-month row of the forecast table
#[derive(Debug, Clone)]
pub struct PeriodRow {
    /// Long month label, e.g. `September 2026`
    pub label: String,
    pub price: f64,
    /// `₹{price}{unit}`, same formatting as the summary panel
    pub price_text: String,
    /// Change versus the previous period; None renders as "N/A"
    pub change: Option<PriceChange>,
    /// One-decimal percentage, or "N/A" when no score exists for this row
    pub confidence_text: String,
}

/// A plottable monthly price series with its axis labels.
/// `labels[i]` names the month of `points[i]`; x is the period index.
#[derive(Debug, Clone, Default)]
pub struct ChartSeries {
    pub points: Vec<[f64; 2]>,
    pub labels: Vec<String>,
}

impl ChartSeries {
    fn new(prices: &[f64], labels: Vec<String>) -> Self {
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, &price)| [i as f64, price])
            .collect();
        Self { points, labels }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One key-factor card (weather, supply or demand)
#[derive(Debug, Clone)]
pub struct FactorCard {
    pub title: &'static str,
    pub condition: String,
    pub impact: String,
    pub tone: ImpactTone,
}

impl FactorCard {
    fn from_factor(title: &'static str, factor: Option<&Factor>) -> Self {
        let condition = factor
            .and_then(|f| f.condition.clone())
            .unwrap_or_else(|| FACTOR_CONDITION_FALLBACK.to_string());
        let impact = factor.and_then(|f| f.impact.clone()).unwrap_or_default();
        let tone = ImpactTone::from_class(factor.and_then(|f| f.impact_color.as_deref()));

        Self {
            title,
            condition,
            impact,
            tone,
        }
    }
}

/// All presentation-ready values for one prediction session
#[derive(Debug, Clone)]
pub struct DashboardModel {
    /// `{crop_type} Price Prediction`
    pub title: String,
    /// `{state}, {country}`
    pub location: String,
    pub season: String,
    /// Long-format as-of date, e.g. `August 26, 2026`
    pub last_updated: String,
    /// `₹{predicted_price}{unit}`
    pub price_text: String,
    /// Overall change versus the current price; None renders the
    /// "current price not available" state
    pub change: Option<PriceChange>,
    pub future: ChartSeries,
    pub historical: ChartSeries,
    pub rows: Vec<PeriodRow>,
    /// Weather, supply, demand — in card order
    pub factors: Vec<FactorCard>,
    pub sell_time: String,
    pub trend_analysis: String,
    pub unit: String,
}

/// Rupee price text used by the summary, chart hover and table cells
pub fn format_price(price: f64, unit: &str) -> String {
    format!("₹{:.2}{}", price, unit)
}

impl DashboardModel {
    /// Pure derivation — no network, no UI, no hidden state.
    pub fn from_prediction(result: &PredictionResult, as_of: NaiveDate) -> Self {
        let change = PriceChange::between(result.current_price, result.predicted_price);

        // Future axis starts next month; historical axis ends at as_of
        let future_labels: Vec<String> = (0..result.future_prices.len())
            .map(|i| short_month_label(shift_months(as_of, i as i32 + 1)))
            .collect();
        let historical_len = result.historical_prices.len() as i32;
        let historical_labels: Vec<String> = (0..historical_len)
            .map(|i| short_month_label(shift_months(as_of, i - historical_len + 1)))
            .collect();

        let rows = Self::build_rows(result, as_of);

        let factors = vec![
            FactorCard::from_factor("Weather", result.factors.weather.as_ref()),
            FactorCard::from_factor("Supply", result.factors.supply.as_ref()),
            FactorCard::from_factor("Demand", result.factors.demand.as_ref()),
        ];

        let sell_time = result
            .recommendations
            .sell_time
            .clone()
            .unwrap_or_else(|| SELL_TIME_FALLBACK.to_string());
        let trend_analysis = result
            .recommendations
            .trend_analysis
            .clone()
            .unwrap_or_else(|| TREND_ANALYSIS_FALLBACK.to_string());

        Self {
            title: format!("{} Price Prediction", result.crop_type),
            location: format!("{}, {}", result.state, result.country),
            season: result.season.clone(),
            last_updated: as_of.format("%B %-d, %Y").to_string(),
            price_text: format_price(result.predicted_price, &result.unit),
            change,
            future: ChartSeries::new(&result.future_prices, future_labels),
            historical: ChartSeries::new(&result.historical_prices, historical_labels),
            rows,
            factors,
            sell_time,
            trend_analysis,
            unit: result.unit.clone(),
        }
    }

    fn build_rows(result: &PredictionResult, as_of: NaiveDate) -> Vec<PeriodRow> {
        result
            .future_prices
            .iter()
            .enumerate()
            .map(|(i, &price)| {
                // Row 0 compares against the current price; later rows
                // against the previous forecast period
                let previous = if i == 0 {
                    result.current_price
                } else {
                    Some(result.future_prices[i - 1])
                };

                let confidence_text = result
                    .confidence_scores
                    .as_ref()
                    .and_then(|scores| scores.get(i))
                    .map(|score| format!("{:.1}%", score))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string());

                PeriodRow {
                    label: long_month_label(shift_months(as_of, i as i32 + 1)),
                    price,
                    price_text: format_price(price, &result.unit),
                    change: PriceChange::between(previous, price),
                    confidence_text,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::prediction::{FactorSet, Recommendations};

    fn as_of() -> NaiveDate {
        // Mid-month on purpose: labels must still snap to whole months
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    fn rice_prediction() -> PredictionResult {
        serde_json::from_value(serde_json::json!({
            "crop_type": "Rice",
            "state": "Karnataka",
            "country": "India",
            "season": "Kharif (Monsoon)",
            "predicted_price": 2500.0,
            "current_price": 2400.0,
            "unit": "/quintal",
            "future_prices": [2500.0, 2550.0],
            "historical_prices": [2300.0, 2350.0],
        }))
        .unwrap()
    }

    fn without_current_price() -> PredictionResult {
        let mut result = rice_prediction();
        result.current_price = None;
        result
    }

    #[test]
    fn change_sign_matches_price_delta() {
        let model = DashboardModel::from_prediction(&rice_prediction(), as_of());
        let change = model.change.unwrap();
        assert!(change.percent > 0.0);
        assert_eq!(change.trend, Trend::Up);

        let mut falling = rice_prediction();
        falling.predicted_price = 2300.0;
        let model = DashboardModel::from_prediction(&falling, as_of());
        let change = model.change.unwrap();
        assert!(change.percent < 0.0);
        assert_eq!(change.trend, Trend::Down);
    }

    #[test]
    fn absent_current_price_yields_unavailable_change() {
        let model = DashboardModel::from_prediction(&without_current_price(), as_of());
        assert!(model.change.is_none());
        // Row 0 has no previous price either; it must degrade, not NaN
        assert!(model.rows[0].change.is_none());
        // Later rows still compare against the prior forecast period
        assert!(model.rows[1].change.is_some());
    }

    #[test]
    fn zero_current_price_yields_unavailable_change() {
        let mut result = rice_prediction();
        result.current_price = Some(0.0);
        let model = DashboardModel::from_prediction(&result, as_of());
        assert!(model.change.is_none());
        assert!(model.rows[0].change.is_none());
    }

    #[test]
    fn row_previous_price_chain() {
        // Row 0 vs current (2400 -> 2500), row 1 vs row 0 (2500 -> 2550)
        let model = DashboardModel::from_prediction(&rice_prediction(), as_of());
        let row0 = model.rows[0].change.unwrap();
        let row1 = model.rows[1].change.unwrap();
        assert!((row0.percent - (2500.0 - 2400.0) / 2400.0 * 100.0).abs() < 1e-9);
        assert!((row1.percent - (2550.0 - 2500.0) / 2500.0 * 100.0).abs() < 1e-9);
        assert_eq!(row0.trend, Trend::Up);
        assert_eq!(row1.trend, Trend::Up);
    }

    #[test]
    fn chart_labels_align_with_series_and_increase_in_time() {
        let mut result = rice_prediction();
        result.future_prices = vec![2500.0, 2550.0, 2510.0];
        result.historical_prices = vec![2300.0, 2350.0, 2340.0, 2400.0];
        let model = DashboardModel::from_prediction(&result, as_of());

        assert_eq!(model.future.labels.len(), model.future.points.len());
        assert_eq!(model.historical.labels.len(), model.historical.points.len());

        // as_of is August 2026: future starts next month...
        assert_eq!(model.future.labels, ["Sep '26", "Oct '26", "Nov '26"]);
        // ...and the historical axis ends at the as_of month
        assert_eq!(
            model.historical.labels,
            ["May '26", "Jun '26", "Jul '26", "Aug '26"]
        );
    }

    #[test]
    fn empty_series_derive_to_empty_not_panic() {
        let mut result = rice_prediction();
        result.future_prices.clear();
        result.historical_prices.clear();
        let model = DashboardModel::from_prediction(&result, as_of());
        assert!(model.future.is_empty());
        assert!(model.historical.is_empty());
        assert!(model.rows.is_empty());
    }

    #[test]
    fn confidence_is_one_decimal_or_na_per_row() {
        let mut result = rice_prediction();
        result.future_prices = vec![2500.0, 2550.0, 2600.0];
        result.confidence_scores = Some(vec![92.54, 88.0]); // shorter than prices
        let model = DashboardModel::from_prediction(&result, as_of());

        assert_eq!(model.rows[0].confidence_text, "92.5%");
        assert_eq!(model.rows[1].confidence_text, "88.0%");
        assert_eq!(model.rows[2].confidence_text, NOT_AVAILABLE);

        let mut result = rice_prediction();
        result.confidence_scores = None;
        let model = DashboardModel::from_prediction(&result, as_of());
        assert!(model.rows.iter().all(|r| r.confidence_text == NOT_AVAILABLE));
    }

    #[test]
    fn kharif_rice_end_to_end_derivation() {
        let model = DashboardModel::from_prediction(&rice_prediction(), as_of());

        assert_eq!(model.title, "Rice Price Prediction");
        assert_eq!(model.location, "Karnataka, India");
        assert_eq!(model.price_text, "₹2500.00/quintal");

        let change = model.change.unwrap();
        assert!((change.percent - 4.1666).abs() < 1e-3);
        assert_eq!(change.magnitude_text(), "4.17%");
        assert_eq!(change.trend, Trend::Up);

        assert_eq!(model.rows.len(), 2);
        assert_eq!(model.rows[0].label, "September 2026");
        assert_eq!(model.rows[0].price_text, "₹2500.00/quintal");
        assert!(model.rows.iter().all(|r| r.change.unwrap().trend == Trend::Up));
    }

    #[test]
    fn factor_and_recommendation_fallbacks() {
        let mut result = rice_prediction();
        result.factors = FactorSet::default();
        result.recommendations = Recommendations::default();
        let model = DashboardModel::from_prediction(&result, as_of());

        assert_eq!(model.factors.len(), 3);
        assert_eq!(model.factors[0].title, "Weather");
        for card in &model.factors {
            assert_eq!(card.condition, FACTOR_CONDITION_FALLBACK);
            assert!(card.impact.is_empty());
            assert_eq!(card.tone, ImpactTone::Neutral);
        }
        assert_eq!(model.sell_time, SELL_TIME_FALLBACK);
        assert_eq!(model.trend_analysis, TREND_ANALYSIS_FALLBACK);
    }

    #[test]
    fn impact_tone_classification() {
        assert_eq!(
            ImpactTone::from_class(Some("text-green-600")),
            ImpactTone::Positive
        );
        assert_eq!(
            ImpactTone::from_class(Some("text-yellow-600")),
            ImpactTone::Caution
        );
        assert_eq!(
            ImpactTone::from_class(Some("text-red-600")),
            ImpactTone::Negative
        );
        assert_eq!(ImpactTone::from_class(Some("text-gray-600")), ImpactTone::Neutral);
        assert_eq!(ImpactTone::from_class(None), ImpactTone::Neutral);
    }
}
