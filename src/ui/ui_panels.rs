use eframe::egui::{Color32, ComboBox, RichText, Ui};
use strum::IntoEnumIterator;

use crate::domain::FormState;
use crate::models::MetadataCatalog;
use crate::ui::app::ViewMode;
use crate::ui::config::UI_TEXT;
use crate::ui::utils::{colored_subsection_heading, section_heading};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// One event per form interaction. The app applies these to the form
/// state controller; the panel itself never mutates the selection.
#[derive(Debug)]
pub enum SelectionEvent {
    Category(String),
    CropType(String),
    Country(String),
    State(String),
    Season(String),
    Submit,
}

/// The five-dropdown selection form plus the submit control
pub struct SelectionPanel<'a> {
    form: &'a FormState,
    catalog: &'a MetadataCatalog,
    in_flight: bool,
}

impl<'a> SelectionPanel<'a> {
    pub fn new(form: &'a FormState, catalog: &'a MetadataCatalog, in_flight: bool) -> Self {
        Self {
            form,
            catalog,
            in_flight,
        }
    }

    fn render_dropdown(
        ui: &mut Ui,
        id: &str,
        heading: &str,
        current: &str,
        options: &[String],
        enabled: bool,
    ) -> Option<String> {
        let mut changed = None;

        ui.label(colored_subsection_heading(heading));
        ui.add_enabled_ui(enabled, |ui| {
            let display = if current.is_empty() {
                UI_TEXT.select_placeholder
            } else {
                current
            };
            ComboBox::from_id_salt(id)
                .selected_text(display)
                .width(180.0)
                .show_ui(ui, |ui| {
                    for option in options {
                        let is_selected = current == option.as_str();
                        if ui.selectable_label(is_selected, option).clicked() && !is_selected {
                            changed = Some(option.clone());
                        }
                    }
                });
        });
        ui.add_space(8.0);

        changed
    }

    fn render_submit(&self, ui: &mut Ui) -> bool {
        if self.in_flight {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(
                    RichText::new(UI_TEXT.predicting_button)
                        .small()
                        .color(Color32::GRAY),
                );
            });
            return false;
        }

        let mut clicked = false;
        ui.add_enabled_ui(self.form.is_complete(), |ui| {
            if ui.button(UI_TEXT.predict_button).clicked() {
                clicked = true;
            }
        });
        clicked
    }
}

impl<'a> Panel for SelectionPanel<'a> {
    type Event = SelectionEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.form_heading);

        let selection = self.form.selection();

        if let Some(value) = Self::render_dropdown(
            ui,
            "crop_category",
            UI_TEXT.category_heading,
            &selection.crop_category,
            &self.catalog.crop_categories,
            true,
        ) {
            events.push(SelectionEvent::Category(value));
        }

        if let Some(value) = Self::render_dropdown(
            ui,
            "crop_type",
            UI_TEXT.crop_type_heading,
            &selection.crop_type,
            self.catalog.crop_types_for(&selection.crop_category),
            self.form.crop_type_enabled(),
        ) {
            events.push(SelectionEvent::CropType(value));
        }

        if let Some(value) = Self::render_dropdown(
            ui,
            "country",
            UI_TEXT.country_heading,
            &selection.country,
            &self.catalog.countries,
            true,
        ) {
            events.push(SelectionEvent::Country(value));
        }

        if let Some(value) = Self::render_dropdown(
            ui,
            "state",
            UI_TEXT.state_heading,
            &selection.state,
            self.catalog.states_for(&selection.country),
            self.form.state_enabled(),
        ) {
            events.push(SelectionEvent::State(value));
        }

        if let Some(value) = Self::render_dropdown(
            ui,
            "season",
            UI_TEXT.season_heading,
            &selection.season,
            &self.catalog.seasons,
            true,
        ) {
            events.push(SelectionEvent::Season(value));
        }

        ui.add_space(6.0);
        if self.render_submit(ui) {
            events.push(SelectionEvent::Submit);
        }
        ui.add_space(20.0);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions && !events.is_empty() {
            log::info!("Selection panel events: {:?}", events);
        }

        events
    }
}

/// Chart/table toggle shown above the dashboard body
pub struct ViewModePanel {
    selected: ViewMode,
}

impl ViewModePanel {
    pub fn new(selected: ViewMode) -> Self {
        Self { selected }
    }
}

impl Panel for ViewModePanel {
    type Event = ViewMode;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            for mode in ViewMode::iter() {
                let is_selected = self.selected == mode;
                if ui.selectable_label(is_selected, mode.to_string()).clicked() && !is_selected {
                    self.selected = mode;
                    events.push(mode);
                }
            }
        });

        events
    }
}
