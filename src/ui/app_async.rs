use chrono::Local;
use eframe::egui;
use poll_promise::Promise;

use crate::models::DashboardModel;
use crate::ui::app::{AppView, CropcastApp, ViewMode};

impl CropcastApp {
    /// Starts the one in-flight prediction request. The submit control is
    /// disabled while `is_predicting`, so overlap cannot happen; the
    /// guard here only protects against double-fired events in one frame.
    pub(super) fn start_prediction_request(&mut self) {
        if self.prediction_promise.is_some() {
            return;
        }
        if !self.form.is_complete() {
            return;
        }

        let selection = self.form.selection().clone();
        let client = self.client.clone();
        let handle = self.runtime.clone();

        self.session.last_error = None;
        self.prediction_promise = Some(Promise::spawn_thread("prediction_request", move || {
            handle.block_on(client.predict(&selection))
        }));
    }

    /// Polled once per frame; applies a finished request to the session.
    pub(super) fn poll_prediction_request(&mut self, ctx: &egui::Context) {
        let outcome = self
            .prediction_promise
            .as_ref()
            .and_then(|promise| promise.ready().cloned());

        if let Some(result) = outcome {
            self.prediction_promise = None;

            match result {
                Ok(prediction) => {
                    // Derive the complete dashboard model before any
                    // render target is invoked with it
                    let as_of = Local::now().date_naive();
                    let dashboard = DashboardModel::from_prediction(&prediction, as_of);
                    self.session.replace(prediction, dashboard);

                    // Each new result opens on the chart view
                    self.view = AppView::Dashboard;
                    self.view_mode = ViewMode::Charts;
                }
                Err(error) => {
                    // Stay on the form view, selection untouched, ready
                    // to resubmit
                    log::error!("Prediction request failed: {}", error);
                    self.session.last_error = Some(error);
                }
            }
        } else if self.prediction_promise.is_some() {
            ctx.request_repaint();
        }
    }

    pub(super) fn is_predicting(&self) -> bool {
        self.prediction_promise.is_some()
    }
}
