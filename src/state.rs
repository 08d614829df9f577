use std::collections::HashMap;
use std::path::PathBuf;

use energy_explorer::config::AppConfig;
use energy_explorer::data::chart::PlotRow;
use energy_explorer::{Dataset, DatasetKind, Outcome, Selection, Table};

use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Navigation and view enums
// ---------------------------------------------------------------------------

/// Top-level page shown in the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    EnergyResources,
    EducationCenter,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Home,
        Page::About,
        Page::EnergyResources,
        Page::EducationCenter,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::EnergyResources => "Energy Resources",
            Page::EducationCenter => "Education Center",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Data,
    Chart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    All,
    Filtered,
}

/// Which filter list a toggle or clear applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Entities,
    Years,
    Features,
}

/// Everything the UI can ask the state to do. Widgets push events during a
/// frame and [`AppState::apply`] handles them afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Navigate(Page),
    SelectDataset(DatasetKind),
    SelectTab(Tab),
    SetViewMode(ViewMode),
    Toggle(Dimension, String),
    Clear(Dimension),
    ToggleChartEntity(String),
    SetChartFeature(String),
    OpenFile(PathBuf),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    pub page: Page,
    pub kind: DatasetKind,
    pub tab: Tab,
    pub view_mode: ViewMode,

    /// Loaded datasets, one per kind, each with its schema.
    datasets: HashMap<DatasetKind, Dataset>,

    /// Filter choices for the Data tab, in click order.
    pub selection: Selection,
    /// Result of the current selection (cached).
    pub projection: Outcome<Table>,

    /// Entities and feature drawn on the Chart tab.
    pub chart_entities: Vec<String>,
    pub chart_feature: Option<String>,
    /// Long-form rows for the chart (cached).
    pub chart_rows: Outcome<Vec<PlotRow>>,
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            page: Page::Home,
            kind: DatasetKind::State,
            tab: Tab::Data,
            view_mode: ViewMode::All,
            datasets: HashMap::new(),
            selection: Selection::default(),
            projection: Outcome::Empty,
            chart_entities: Vec::new(),
            chart_feature: None,
            chart_rows: Outcome::Empty,
            color_map: ColorMap::new(&[]),
            status_message: None,
        }
    }

    /// Dispatch a UI event.
    pub fn apply(&mut self, event: Event) {
        log::debug!("event {event:?}");
        match event {
            Event::Navigate(page) => self.navigate(page),
            Event::SelectDataset(kind) => self.select_dataset(kind),
            Event::SelectTab(tab) => self.tab = tab,
            Event::SetViewMode(mode) => {
                self.view_mode = mode;
                self.refresh();
            }
            Event::Toggle(dim, value) => {
                toggle(self.filter_list(dim), value);
                self.refresh();
            }
            Event::Clear(dim) => {
                self.filter_list(dim).clear();
                self.refresh();
            }
            Event::ToggleChartEntity(entity) => {
                toggle(&mut self.chart_entities, entity);
                self.refresh();
            }
            Event::SetChartFeature(feature) => {
                self.chart_feature = Some(feature);
                self.refresh();
            }
            Event::OpenFile(path) => self.open_file(path),
        }
    }

    pub fn navigate(&mut self, page: Page) {
        self.page = page;
        if page == Page::Home {
            self.ensure_loaded(self.kind);
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.datasets.get(&self.kind)
    }

    /// Switch between State and Metro data. Filter and chart choices do not
    /// carry over because entity names differ between kinds.
    pub fn select_dataset(&mut self, kind: DatasetKind) {
        let cached = self.datasets.contains_key(&kind);
        if cached {
            // An earlier load error belongs to another kind.
            self.status_message = None;
        }
        if kind == self.kind && cached {
            return;
        }
        self.kind = kind;
        self.ensure_loaded(kind);
        self.reset_selections();
    }

    /// Load the configured file for `kind` unless it is already cached.
    pub fn ensure_loaded(&mut self, kind: DatasetKind) {
        if self.datasets.contains_key(&kind) {
            return;
        }
        let path = self.config.data_path(kind).to_path_buf();
        match Dataset::open(&path, kind) {
            Ok(dataset) => self.set_dataset(kind, dataset),
            Err(e) => {
                log::error!("Failed to load {kind}: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                self.refresh();
            }
        }
    }

    /// Load an arbitrary file as the current kind, replacing the cached one.
    pub fn open_file(&mut self, path: PathBuf) {
        match Dataset::open(&path, self.kind) {
            Ok(dataset) => self.set_dataset(self.kind, dataset),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a loaded dataset and reset selections if it is the visible one.
    pub fn set_dataset(&mut self, kind: DatasetKind, dataset: Dataset) {
        self.datasets.insert(kind, dataset);
        self.status_message = None;
        if kind == self.kind {
            self.reset_selections();
        }
    }

    fn reset_selections(&mut self) {
        self.selection = Selection::default();
        let limit = self.config.chart_entity_limit;
        self.chart_entities = self
            .dataset()
            .map(|ds| ds.default_chart_entities(limit))
            .unwrap_or_default();
        self.chart_feature = self.dataset().and_then(|ds| ds.features().into_iter().next());
        self.refresh();
    }

    /// True when more chart entities are selected than the configured limit.
    pub fn chart_over_limit(&self) -> bool {
        self.chart_entities.len() > self.config.chart_entity_limit
    }

    /// Selection actually applied to the Data tab.
    pub fn effective_selection(&self) -> Selection {
        match self.view_mode {
            ViewMode::All => Selection::default(),
            ViewMode::Filtered => self.selection.clone(),
        }
    }

    /// Recompute the cached projection, chart rows and colours.
    pub fn refresh(&mut self) {
        let Some(ds) = self.datasets.get(&self.kind) else {
            self.projection = Outcome::Empty;
            self.chart_rows = Outcome::Empty;
            self.color_map = ColorMap::new(&[]);
            return;
        };

        self.projection = ds.project(&self.effective_selection(), self.config.column_match);
        self.chart_rows = match &self.chart_feature {
            Some(feature) => ds.reshape_for_chart(&self.chart_entities, feature),
            None => Outcome::Empty,
        };
        self.color_map = ColorMap::new(&self.chart_entities);
    }

    fn filter_list(&mut self, dim: Dimension) -> &mut Vec<String> {
        match dim {
            Dimension::Entities => &mut self.selection.entities,
            Dimension::Years => &mut self.selection.years,
            Dimension::Features => &mut self.selection.features,
        }
    }
}

/// Add `value` at the end, or remove it if already present.
fn toggle(list: &mut Vec<String>, value: String) {
    match list.iter().position(|v| *v == value) {
        Some(i) => {
            list.remove(i);
        }
        None => list.push(value),
    }
}
