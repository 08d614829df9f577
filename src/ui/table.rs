use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use energy_explorer::{Outcome, Table};

use crate::state::{AppState, Dimension, Event, ViewMode};

// ---------------------------------------------------------------------------
// Data tab – filter widgets and the result grid
// ---------------------------------------------------------------------------

pub fn data_tab(ui: &mut Ui, state: &AppState, events: &mut Vec<Event>) {
    let Some(dataset) = state.dataset() else {
        ui.label("No dataset loaded.");
        return;
    };

    ui.label("Select View Option");
    ui.horizontal(|ui: &mut Ui| {
        for (mode, label) in [
            (ViewMode::All, "View All Data"),
            (ViewMode::Filtered, "View with Filter"),
        ] {
            if ui.radio(state.view_mode == mode, label).clicked() {
                events.push(Event::SetViewMode(mode));
            }
        }
    });

    if state.view_mode == ViewMode::Filtered {
        ui.horizontal_top(|ui: &mut Ui| {
            let lists = [
                (
                    Dimension::Entities,
                    format!("Select {}", state.kind.entity_label()),
                    dataset.entities(),
                    &state.selection.entities,
                ),
                (
                    Dimension::Years,
                    "Select Years".to_string(),
                    dataset.years().to_vec(),
                    &state.selection.years,
                ),
                (
                    Dimension::Features,
                    "Select Features".to_string(),
                    dataset.features(),
                    &state.selection.features,
                ),
            ];
            for (dim, title, options, selected) in lists {
                ui.vertical(|ui: &mut Ui| {
                    multi_select(ui, dim, &title, &options, selected, events);
                });
            }
        });
    }

    ui.separator();

    match &state.projection {
        Outcome::Found(table) => {
            ui.strong("Data for your selection:");
            for line in state
                .effective_selection()
                .summary(state.kind.entity_label())
            {
                ui.label(line);
            }
            result_grid(ui, table);
        }
        Outcome::Empty => {
            ui.label("No data available for the selected criteria.");
        }
    }
}

/// A collapsible checkbox list. Nothing checked means "no constraint".
fn multi_select(
    ui: &mut Ui,
    dim: Dimension,
    title: &str,
    options: &[String],
    selected: &[String],
    events: &mut Vec<Event>,
) {
    let header = if selected.is_empty() {
        format!("{title}  (None)")
    } else {
        format!("{title}  ({}/{})", selected.len(), options.len())
    };

    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt(title)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            if ui.small_button("None").clicked() {
                events.push(Event::Clear(dim));
            }
            ScrollArea::vertical()
                .id_salt(title)
                .max_height(240.0)
                .show(ui, |ui: &mut Ui| {
                    for option in options {
                        let mut checked = selected.contains(option);
                        if ui.checkbox(&mut checked, option).changed() {
                            events.push(Event::Toggle(dim, option.clone()));
                        }
                    }
                });
        });
}

/// Scrollable grid of the projected table.
fn result_grid(ui: &mut Ui, table: &Table) {
    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(60.0), table.width())
            .header(20.0, |mut header| {
                for name in table.columns() {
                    header.col(|ui: &mut Ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, table.len(), |mut row| {
                    let cells = &table.rows()[row.index()];
                    for cell in cells {
                        row.col(|ui: &mut Ui| {
                            ui.label(cell.to_string());
                        });
                    }
                });
            });
    });
}
