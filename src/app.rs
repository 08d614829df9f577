use eframe::egui::{self, Ui};

use crate::state::{AppState, Event, Page, Tab};
use crate::ui::{pages, panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EnergyExplorerApp {
    pub state: AppState,
}

impl EnergyExplorerApp {
    pub fn new(mut state: AppState) -> Self {
        state.navigate(state.page);
        Self { state }
    }
}

impl eframe::App for EnergyExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();
        let state = &self.state;

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, state, &mut events);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("nav_panel")
            .default_width(180.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::nav_panel(ui, state, &mut events);
            });

        // ---- Central panel: current page ----
        egui::CentralPanel::default().show(ctx, |ui| match state.page {
            Page::Home => home(ui, state, &mut events),
            Page::About => pages::about(ui),
            Page::EnergyResources => pages::energy_resources(ui),
            Page::EducationCenter => pages::education_center(ui),
        });

        for event in events {
            self.state.apply(event);
        }
    }
}

fn home(ui: &mut Ui, state: &AppState, events: &mut Vec<Event>) {
    ui.heading("Home Page");
    panels::dataset_choice(ui, state, events);
    ui.heading(format!("{} Data from ACS", state.kind.entity_column()));
    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        for (tab, label) in [(Tab::Data, "Data"), (Tab::Chart, "Chart")] {
            if ui.selectable_label(state.tab == tab, label).clicked() {
                events.push(Event::SelectTab(tab));
            }
        }
    });
    ui.separator();

    match state.tab {
        Tab::Data => table::data_tab(ui, state, events),
        Tab::Chart => plot::chart_tab(ui, state, events),
    }
}
