//! All user-facing strings in one place.

pub struct UiText {
    pub window_title: &'static str,

    // Selection form
    pub form_heading: &'static str,
    pub category_heading: &'static str,
    pub crop_type_heading: &'static str,
    pub country_heading: &'static str,
    pub state_heading: &'static str,
    pub season_heading: &'static str,
    pub select_placeholder: &'static str,
    pub predict_button: &'static str,
    pub predicting_button: &'static str,

    // Dashboard
    pub predicted_price_heading: &'static str,
    pub change_unavailable: &'static str,
    pub last_updated_prefix: &'static str,
    pub future_chart_heading: &'static str,
    pub historical_chart_heading: &'static str,
    pub chart_view_button: &'static str,
    pub table_view_button: &'static str,
    pub back_to_form_button: &'static str,
    pub factors_heading: &'static str,
    pub recommendations_heading: &'static str,
    pub sell_time_heading: &'static str,
    pub trend_analysis_heading: &'static str,

    // Table columns
    pub table_col_month: &'static str,
    pub table_col_price: &'static str,
    pub table_col_change: &'static str,
    pub table_col_confidence: &'static str,

    // Axes
    pub chart_x_axis: &'static str,
    pub chart_y_axis: &'static str,

    // Status / errors
    pub welcome_heading: &'static str,
    pub welcome_hint: &'static str,
    pub catalog_failed_heading: &'static str,
    pub prediction_failed_heading: &'static str,
    pub status_ready: &'static str,
    pub status_predicting: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    window_title: "Cropcast — Crop Price Forecast",

    form_heading: "Price Forecast",
    category_heading: "Crop Category",
    crop_type_heading: "Crop Type",
    country_heading: "Country",
    state_heading: "State / Province",
    season_heading: "Season",
    select_placeholder: "Select…",
    predict_button: "Predict Price",
    predicting_button: "Predicting…",

    predicted_price_heading: "Predicted Price",
    change_unavailable: "N/A (current price not available)",
    last_updated_prefix: "Last updated:",
    future_chart_heading: "Price Forecast (Next Months)",
    historical_chart_heading: "Historical Prices",
    chart_view_button: "📈 Charts",
    table_view_button: "▤ Table",
    back_to_form_button: "← Back to form",
    factors_heading: "Key Factors",
    recommendations_heading: "Recommendations",
    sell_time_heading: "Best time to sell",
    trend_analysis_heading: "Trend analysis",

    table_col_month: "Month",
    table_col_price: "Predicted Price",
    table_col_change: "Change",
    table_col_confidence: "Confidence",

    chart_x_axis: "Month",
    chart_y_axis: "Price (₹)",

    welcome_heading: "Crop Price Forecast",
    welcome_hint: "Complete the form on the left to request a forecast.",
    catalog_failed_heading: "⚠ Unable to Load Crop Catalog",
    prediction_failed_heading: "⚠ Prediction Failed",
    status_ready: "Ready",
    status_predicting: "Contacting prediction service…",
};
