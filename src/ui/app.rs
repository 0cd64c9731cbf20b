use std::fmt;

use eframe::{Frame, egui};
use poll_promise::Promise;
use strum_macros::EnumIter;
use tokio::runtime::Handle;

use crate::data::{ApiError, PredictionClient};
use crate::domain::FormState;
use crate::models::{DashboardModel, MetadataCatalog, PredictionResult};
use crate::ui::config::UI_TEXT;
use crate::ui::utils::setup_custom_visuals;

/// Which top-level screen the central panel shows. A failed prediction
/// never leaves the form view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Form,
    Dashboard,
}

/// Chart/table toggle for the dashboard body
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum ViewMode {
    Charts,
    Table,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Charts => write!(f, "{}", UI_TEXT.chart_view_button),
            ViewMode::Table => write!(f, "{}", UI_TEXT.table_view_button),
        }
    }
}

/// Session-scoped state: at most one prediction result is authoritative
/// at a time, and a new success unconditionally replaces it.
#[derive(Default)]
pub struct SessionState {
    pub result: Option<PredictionResult>,
    pub dashboard: Option<DashboardModel>,
    pub last_error: Option<ApiError>,
}

impl SessionState {
    /// Replaces the current result with a freshly derived session. The
    /// model is fully derived before any render target can see it.
    pub fn replace(&mut self, result: PredictionResult, dashboard: DashboardModel) {
        self.result = Some(result);
        self.dashboard = Some(dashboard);
        self.last_error = None;
    }
}

pub struct CropcastApp {
    // Form state
    pub(super) form: FormState,
    pub(super) catalog: MetadataCatalog,
    /// Set when the startup metadata fetch failed; the form stays visible
    /// but has no options, so submission can never become enabled
    pub(super) catalog_error: Option<ApiError>,

    // Session state
    pub(super) session: SessionState,
    pub(super) view: AppView,
    pub(super) view_mode: ViewMode,

    // Network plumbing
    pub(super) client: PredictionClient,
    pub(super) runtime: Handle,
    pub(super) prediction_promise: Option<Promise<Result<PredictionResult, ApiError>>>,
}

impl CropcastApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        catalog: MetadataCatalog,
        catalog_error: Option<ApiError>,
        client: PredictionClient,
        runtime: Handle,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        Self {
            form: FormState::default(),
            catalog,
            catalog_error,
            session: SessionState::default(),
            view: AppView::Form,
            view_mode: ViewMode::Charts,
            client,
            runtime,
            prediction_promise: None,
        }
    }
}

impl eframe::App for CropcastApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_prediction_request(ctx);

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn session_with_result(price: f64) -> SessionState {
        let result: PredictionResult =
            serde_json::from_value(serde_json::json!({ "predicted_price": price })).unwrap();
        let as_of = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let dashboard = DashboardModel::from_prediction(&result, as_of);
        let mut session = SessionState::default();
        session.replace(result, dashboard);
        session
    }

    #[test]
    fn new_result_replaces_prior_session_and_clears_error() {
        let mut session = session_with_result(100.0);
        session.last_error = Some(ApiError::Network("timeout".to_string()));

        let replacement: PredictionResult =
            serde_json::from_value(serde_json::json!({ "predicted_price": 200.0 })).unwrap();
        let as_of = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let dashboard = DashboardModel::from_prediction(&replacement, as_of);
        session.replace(replacement, dashboard);

        assert!(session.last_error.is_none());
        assert_eq!(session.result.as_ref().unwrap().predicted_price, 200.0);
    }

    #[test]
    fn failed_request_keeps_prior_result() {
        let mut session = session_with_result(100.0);
        session.last_error = Some(ApiError::Request {
            status: 500,
            body: "boom".to_string(),
        });

        // The prior dashboard stays authoritative until a new success
        assert!(session.dashboard.is_some());
        assert_eq!(session.result.as_ref().unwrap().predicted_price, 100.0);
    }
}
