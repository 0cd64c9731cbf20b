//! Tabular render target for the per-month forecast rows.

use eframe::egui::{Grid, RichText, Ui};

use crate::models::DashboardModel;
use crate::models::dashboard_view::NOT_AVAILABLE;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::utils::trend_color;

/// Paints the forecast table from the latest model. Rebuilt wholesale
/// every frame; an empty row set renders nothing.
pub fn show_forecast_table(ui: &mut Ui, model: &DashboardModel) {
    if model.rows.is_empty() {
        return;
    }

    Grid::new("forecast_table")
        .num_columns(4)
        .spacing([24.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            for heading in [
                UI_TEXT.table_col_month,
                UI_TEXT.table_col_price,
                UI_TEXT.table_col_change,
                UI_TEXT.table_col_confidence,
            ] {
                ui.label(RichText::new(heading).strong().color(UI_CONFIG.colors.heading));
            }
            ui.end_row();

            for row in &model.rows {
                ui.label(RichText::new(&row.label).strong());
                ui.label(&row.price_text);

                match &row.change {
                    Some(change) => {
                        ui.label(
                            RichText::new(format!(
                                "{} {}",
                                change.trend.arrow(),
                                change.magnitude_text()
                            ))
                            .color(trend_color(change.trend)),
                        );
                    }
                    None => {
                        ui.label(RichText::new(NOT_AVAILABLE).color(UI_CONFIG.colors.label));
                    }
                }

                ui.label(RichText::new(&row.confidence_text).color(UI_CONFIG.colors.label));
                ui.end_row();
            }
        });
}
