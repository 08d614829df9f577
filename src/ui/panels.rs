use eframe::egui::{self, Color32, RichText, Ui};

use energy_explorer::DatasetKind;

use crate::state::{AppState, Event, Page};

// ---------------------------------------------------------------------------
// Left side panel – page navigation
// ---------------------------------------------------------------------------

/// Render the navigation sidebar.
pub fn nav_panel(ui: &mut Ui, state: &AppState, events: &mut Vec<Event>) {
    ui.heading("Navigation");
    ui.separator();

    for page in Page::ALL {
        let button = egui::Button::new(page.title()).selected(state.page == page);
        if ui.add_sized([ui.available_width(), 28.0], button).clicked() {
            events.push(Event::Navigate(page));
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &AppState, events: &mut Vec<Event>) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                if let Some(path) = open_file_dialog(state.kind) {
                    events.push(Event::OpenFile(path));
                }
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = state.dataset() {
            let source = ds
                .source()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            ui.label(format!(
                "{}: {} rows, {} features, {} years  {source}",
                state.kind,
                ds.table().len(),
                ds.schema().features().len(),
                ds.years().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Dataset chooser
// ---------------------------------------------------------------------------

/// "Choose the type of data to explore" radio row.
pub fn dataset_choice(ui: &mut Ui, state: &AppState, events: &mut Vec<Event>) {
    ui.label("Choose the type of data to explore:");
    ui.horizontal(|ui: &mut Ui| {
        for kind in DatasetKind::ALL {
            if ui.radio(state.kind == kind, kind.to_string()).clicked() {
                events.push(Event::SelectDataset(kind));
            }
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(kind: DatasetKind) -> Option<std::path::PathBuf> {
    rfd::FileDialog::new()
        .set_title(format!("Open {kind}"))
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file()
}
