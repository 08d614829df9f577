use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use energy_explorer::data::chart::{chart_title, group_series};
use energy_explorer::Outcome;

use crate::state::{AppState, Event};

// ---------------------------------------------------------------------------
// Chart tab – entity/feature pickers and the time-series plot
// ---------------------------------------------------------------------------

pub fn chart_tab(ui: &mut Ui, state: &AppState, events: &mut Vec<Event>) {
    let Some(dataset) = state.dataset() else {
        ui.label("No dataset loaded.");
        return;
    };

    ui.heading("Chart");

    ui.horizontal_top(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.strong(format!(
                "Select {} (up to {})",
                state.kind.entity_label(),
                state.config.chart_entity_limit
            ));
            ScrollArea::vertical()
                .id_salt("chart_entities")
                .max_height(180.0)
                .show(ui, |ui: &mut Ui| {
                    for entity in dataset.entities() {
                        let mut checked = state.chart_entities.contains(&entity);
                        if ui.checkbox(&mut checked, &entity).changed() {
                            events.push(Event::ToggleChartEntity(entity));
                        }
                    }
                });
            if state.chart_over_limit() {
                ui.label(
                    RichText::new("More lines than recommended; the chart may be hard to read.")
                        .color(Color32::YELLOW),
                );
            }
        });

        ui.vertical(|ui: &mut Ui| {
            ui.strong("Select Feature");
            let current = state.chart_feature.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("chart_feature")
                .selected_text(&current)
                .width(260.0)
                .show_ui(ui, |ui: &mut Ui| {
                    for feature in dataset.features() {
                        if ui.selectable_label(current == feature, &feature).clicked() {
                            events.push(Event::SetChartFeature(feature));
                        }
                    }
                });
        });
    });

    ui.separator();

    let (rows, feature) = match (&state.chart_rows, &state.chart_feature) {
        (Outcome::Found(rows), Some(feature)) => (rows, feature),
        _ => {
            ui.label(format!(
                "No data available for the selected feature and {}.",
                state.kind.entity_label().to_lowercase()
            ));
            return;
        }
    };

    ui.heading(chart_title(feature));

    Plot::new("time_series")
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Value")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in group_series(rows) {
                let color = state.color_map.color_for(&series.entity);

                // Null cells and non-numeric years are skipped.
                let points: Vec<[f64; 2]> = series
                    .points
                    .iter()
                    .filter_map(|(year, value)| {
                        Some([year.parse::<f64>().ok()?, value.as_f64()?])
                    })
                    .collect();

                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .name(&series.entity)
                        .color(color)
                        .width(1.5),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(&series.entity)
                        .color(color)
                        .radius(3.0),
                );
            }
        });
}
