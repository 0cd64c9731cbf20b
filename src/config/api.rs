//! Prediction service endpoints and request settings.

/// Default base URL of the prediction service. Overridable with
/// `--api-url` or the `CROPCAST_API_URL` environment variable.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

pub struct ApiConfig {
    pub metadata_path: &'static str,
    pub predict_path: &'static str,
    pub request_timeout_secs: u64,
}

pub static API: ApiConfig = ApiConfig {
    metadata_path: "/metadata",
    predict_path: "/predict",
    request_timeout_secs: 30,
};
