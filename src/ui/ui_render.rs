use eframe::egui::{
    CentralPanel, Context, Frame, Margin, RichText, ScrollArea, SidePanel, TopBottomPanel, Ui,
};

use crate::models::DashboardModel;
use crate::ui::app::{AppView, CropcastApp, ViewMode};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_charts::show_price_chart;
use crate::ui::ui_panels::{Panel, SelectionEvent, SelectionPanel, ViewModePanel};
use crate::ui::ui_table::show_forecast_table;
use crate::ui::utils::{colored_subsection_heading, section_heading, spaced_separator, tone_color, trend_color};

impl CropcastApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("selection_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let events = {
                    let mut panel =
                        SelectionPanel::new(&self.form, &self.catalog, self.is_predicting());
                    panel.render(ui)
                };

                for event in events {
                    self.apply_selection_event(event);
                }
            });
    }

    fn apply_selection_event(&mut self, event: SelectionEvent) {
        // The dropdowns only offer catalog values, so a rejected write
        // means panel and catalog disagree — worth a warning, never a crash
        let accepted = match &event {
            SelectionEvent::Category(value) => self.form.set_category(&self.catalog, value),
            SelectionEvent::CropType(value) => self.form.set_crop_type(&self.catalog, value),
            SelectionEvent::Country(value) => self.form.set_country(&self.catalog, value),
            SelectionEvent::State(value) => self.form.set_state(&self.catalog, value),
            SelectionEvent::Season(value) => self.form.set_season(&self.catalog, value),
            SelectionEvent::Submit => {
                self.start_prediction_request();
                true
            }
        };

        if !accepted {
            log::warn!("Rejected out-of-catalog selection event: {:?}", event);
        }
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                match self.view {
                    AppView::Form => self.render_form_view(ui),
                    AppView::Dashboard => self.render_dashboard_view(ui),
                }
            });
    }

    fn render_form_view(&mut self, ui: &mut Ui) {
        if let Some(error) = &self.catalog_error {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading(UI_TEXT.catalog_failed_heading);
                ui.add_space(10.0);
                ui.label_error(error.to_string());
                ui.add_space(20.0);
                ui.label("Please check the prediction service and restart.");
            });
            return;
        }

        if let Some(error) = &self.session.last_error {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading(UI_TEXT.prediction_failed_heading);
                ui.add_space(10.0);
                ui.label_error(error.to_string());
                ui.add_space(20.0);
                ui.label("Your selections are unchanged. Adjust them if needed and try again.");
            });
            return;
        }

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            if self.is_predicting() {
                ui.spinner();
                ui.add_space(12.0);
                ui.heading(UI_TEXT.status_predicting);
            } else {
                ui.heading(UI_TEXT.welcome_heading);
                ui.add_space(6.0);
                ui.label_subdued(UI_TEXT.welcome_hint);
            }
        });
    }

    fn render_dashboard_view(&mut self, ui: &mut Ui) {
        let mut go_back = false;
        let mut mode_events = Vec::new();
        let view_mode = self.view_mode;

        if ui.button(UI_TEXT.back_to_form_button).clicked() {
            go_back = true;
        }
        ui.add_space(6.0);

        if let Some(model) = &self.session.dashboard {
            ScrollArea::vertical().show(ui, |ui| {
                render_summary(ui, model);
                spaced_separator(ui);

                let mut panel = ViewModePanel::new(view_mode);
                mode_events = panel.render(ui);
                ui.add_space(10.0);

                match view_mode {
                    ViewMode::Charts => {
                        show_price_chart(
                            ui,
                            "future_chart",
                            UI_TEXT.future_chart_heading,
                            &model.future,
                            UI_CONFIG.colors.future_line,
                            &model.unit,
                        );
                        show_price_chart(
                            ui,
                            "historical_chart",
                            UI_TEXT.historical_chart_heading,
                            &model.historical,
                            UI_CONFIG.colors.historical_line,
                            &model.unit,
                        );
                    }
                    ViewMode::Table => show_forecast_table(ui, model),
                }

                spaced_separator(ui);
                render_factors(ui, model);
                spaced_separator(ui);
                render_recommendations(ui, model);
                ui.add_space(20.0);
            });
        }

        for mode in mode_events {
            self.view_mode = mode;
        }
        if go_back {
            self.view = AppView::Form;
        }
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if self.is_predicting() {
                        ui.spinner();
                        ui.label_warning(UI_TEXT.status_predicting);
                    } else {
                        ui.label_subdued(UI_TEXT.status_ready);
                    }
                    ui.separator();

                    ui.metric(
                        "🌾 Categories",
                        &self.catalog.crop_categories.len().to_string(),
                        UI_CONFIG.colors.label,
                    );
                    ui.metric(
                        "🌍 Countries",
                        &self.catalog.countries.len().to_string(),
                        UI_CONFIG.colors.label,
                    );
                    ui.separator();

                    ui.label_subdued(self.client.base_url().to_string());

                    if self.catalog_error.is_some() {
                        ui.separator();
                        ui.label_error("Catalog unavailable");
                    }
                });
            });
    }
}

fn render_summary(ui: &mut Ui, model: &DashboardModel) {
    section_heading(ui, &model.title);
    ui.label(colored_subsection_heading(&model.location));
    ui.label_subdued(&model.season);
    ui.label_subdued(format!(
        "{} {}",
        UI_TEXT.last_updated_prefix, model.last_updated
    ));
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label(colored_subsection_heading(UI_TEXT.predicted_price_heading));
        ui.heading(RichText::new(&model.price_text).strong());
        match &model.change {
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
                ui.label_subdued(UI_TEXT.change_unavailable);
            }
        }
    });
}

fn render_factors(ui: &mut Ui, model: &DashboardModel) {
    section_heading(ui, UI_TEXT.factors_heading);

    ui.horizontal_wrapped(|ui| {
        for card in &model.factors {
            ui.group(|ui| {
                ui.set_max_width(260.0);
                ui.vertical(|ui| {
                    ui.label(colored_subsection_heading(card.title));
                    ui.label(&card.condition);
                    if !card.impact.is_empty() {
                        ui.label(
                            RichText::new(&card.impact)
                                .small()
                                .color(tone_color(card.tone)),
                        );
                    }
                });
            });
            ui.add_space(6.0);
        }
    });
}

fn render_recommendations(ui: &mut Ui, model: &DashboardModel) {
    section_heading(ui, UI_TEXT.recommendations_heading);

    ui.label(colored_subsection_heading(UI_TEXT.sell_time_heading));
    ui.label(&model.sell_time);
    ui.add_space(8.0);
    ui.label(colored_subsection_heading(UI_TEXT.trend_analysis_heading));
    ui.label(&model.trend_analysis);
}
