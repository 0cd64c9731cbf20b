//! Line-chart render target. The charting dependency is confined to this
//! module; the view-model hands over plain points and labels.

use eframe::egui::{Color32, Ui};
use egui_plot::{AxisHints, HPlacement, Line, Plot, PlotPoints};

use crate::models::{ChartSeries, format_price};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::utils::colored_subsection_heading;

/// Paints one monthly price series. The plot is rebuilt wholesale from the
/// latest model every frame, so a new result can never leave a stale
/// series behind. An empty series renders nothing.
pub fn show_price_chart(
    ui: &mut Ui,
    id: &str,
    heading: &str,
    series: &ChartSeries,
    color: Color32,
    unit: &str,
) {
    if series.is_empty() {
        return;
    }

    ui.label(colored_subsection_heading(heading));

    let x_labels = series.labels.clone();
    let x_axis = AxisHints::new_x()
        .label(UI_TEXT.chart_x_axis)
        .formatter(move |mark, _range| {
            // Only whole period indices get a month label
            let index = mark.value.round();
            if (mark.value - index).abs() > 0.01 || index < 0.0 {
                return String::new();
            }
            x_labels.get(index as usize).cloned().unwrap_or_default()
        });
    let y_axis = AxisHints::new_y()
        .label(UI_TEXT.chart_y_axis)
        .formatter(|mark, _range| format!("₹{:.0}", mark.value))
        .placement(HPlacement::Left);

    let hover_labels = series.labels.clone();
    let hover_unit = unit.to_string();

    let line = Line::new(heading.to_string(), PlotPoints::new(series.points.clone()))
        .color(color)
        .width(2.0);

    Plot::new(id.to_string())
        .height(UI_CONFIG.chart_height)
        .custom_x_axes(vec![x_axis])
        .custom_y_axes(vec![y_axis])
        .label_formatter(move |_name, point| {
            let index = point.x.round();
            let month = if index >= 0.0 {
                hover_labels.get(index as usize).cloned()
            } else {
                None
            };
            match month {
                Some(month) => format!("{}\n{}", month, format_price(point.y, &hover_unit)),
                None => String::new(),
            }
        })
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });

    ui.add_space(10.0);
}
