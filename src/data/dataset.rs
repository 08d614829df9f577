use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::chart::{reshape_for_chart, PlotRow};
use super::filter::{project, ColumnMatch, Outcome, Selection};
use super::loader::load_table;
use super::model::Table;
use super::schema::{infer_schema, Schema};
use crate::error::SchemaError;

// ---------------------------------------------------------------------------
// DatasetKind – the two survey tables the dashboard ships with
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    State,
    Metro,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 2] = [DatasetKind::State, DatasetKind::Metro];

    /// Name of the entity column that must lead the header.
    pub fn entity_column(self) -> &'static str {
        match self {
            DatasetKind::State => "State",
            DatasetKind::Metro => "Metro",
        }
    }

    /// Plural label used in selectors and summaries.
    pub fn entity_label(self) -> &'static str {
        match self {
            DatasetKind::State => "States",
            DatasetKind::Metro => "Metros",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetKind::State => write!(f, "State Data"),
            DatasetKind::Metro => write!(f, "Metro Data"),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – a table paired with the schema inferred from its header
// ---------------------------------------------------------------------------

/// A loaded table plus its entity column and schema. The schema is computed
/// once here and reused by every query.
#[derive(Debug, Clone)]
pub struct Dataset {
    table: Table,
    entity_column: String,
    schema: Schema,
    source: Option<PathBuf>,
}

impl Dataset {
    pub fn new(table: Table, entity_column: &str) -> Result<Self, SchemaError> {
        let schema = infer_schema(table.columns(), entity_column)?;
        Ok(Dataset {
            table,
            entity_column: entity_column.to_string(),
            schema,
            source: None,
        })
    }

    /// Load `path` and infer its schema for `kind`.
    pub fn open(path: &Path, kind: DatasetKind) -> Result<Self> {
        let table = load_table(path)?;
        let mut dataset = Dataset::new(table, kind.entity_column())
            .with_context(|| format!("inferring schema of {}", path.display()))?;
        dataset.source = Some(path.to_path_buf());

        log::info!(
            "Loaded {} from {}: {} rows, {} features, {} years",
            kind,
            path.display(),
            dataset.table.len(),
            dataset.schema.features().len(),
            dataset.schema.years().len()
        );
        Ok(dataset)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn entity_column(&self) -> &str {
        &self.entity_column
    }

    /// File the dataset was read from, if it came from disk.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Distinct entity names in first-occurrence order.
    pub fn entities(&self) -> Vec<String> {
        self.table
            .unique_values(&self.entity_column)
            .iter()
            .filter_map(|v| v.entity_key())
            .collect()
    }

    pub fn features(&self) -> Vec<String> {
        self.schema.feature_names().map(str::to_string).collect()
    }

    pub fn years(&self) -> &[String] {
        self.schema.years()
    }

    /// The first `limit` entities, used as the chart's initial selection.
    pub fn default_chart_entities(&self, limit: usize) -> Vec<String> {
        let mut entities = self.entities();
        entities.truncate(limit);
        entities
    }

    pub fn project(&self, selection: &Selection, matching: ColumnMatch) -> Outcome<Table> {
        project(
            &self.table,
            &self.schema,
            &self.entity_column,
            selection,
            matching,
        )
    }

    /// Long-form rows for `feature` across every year in the schema.
    pub fn reshape_for_chart<S: AsRef<str>>(
        &self,
        entities: &[S],
        feature: &str,
    ) -> Outcome<Vec<PlotRow>> {
        reshape_for_chart(
            &self.table,
            &self.entity_column,
            entities,
            feature,
            self.schema.years(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn metro() -> Dataset {
        let columns = ["Metro", "Solar Homes 2019", "Solar Homes 2020", "Gas 2020"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        let rows = ["Austin", "Boise", "Austin", "Tulsa"]
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let i = i as i64;
                vec![(*m).into(), i.into(), (i * 10).into(), CellValue::Null]
            })
            .collect();
        Dataset::new(Table::new(columns, rows).unwrap(), "Metro").unwrap()
    }

    #[test]
    fn entities_are_unique_in_table_order() {
        let ds = metro();
        assert_eq!(ds.entities(), ["Austin", "Boise", "Tulsa"]);
        assert_eq!(ds.default_chart_entities(2), ["Austin", "Boise"]);
        assert_eq!(ds.default_chart_entities(5).len(), 3);
    }

    #[test]
    fn schema_is_built_once_from_the_header() {
        let ds = metro();
        assert_eq!(ds.features(), ["Solar Homes", "Gas"]);
        assert_eq!(ds.years(), ["2019", "2020"]);
        assert_eq!(ds.entity_column(), "Metro");
        assert!(ds.source().is_none());
    }

    #[test]
    fn wrong_entity_column_is_rejected() {
        let table = metro().table().clone();
        assert!(matches!(
            Dataset::new(table, "State"),
            Err(SchemaError::EntityColumnMismatch { .. })
        ));
    }

    #[test]
    fn queries_delegate_to_the_engine() {
        let ds = metro();
        let sel = Selection::default()
            .with_entities(["Boise"])
            .with_features(["Solar Homes"]);
        let out = ds.project(&sel, ColumnMatch::Exact).into_found().unwrap();
        assert_eq!(out.columns(), ["Metro", "Solar Homes 2019", "Solar Homes 2020"]);
        assert_eq!(out.len(), 1);

        let rows = ds
            .reshape_for_chart(&["Austin"], "Solar Homes")
            .into_found()
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].value, CellValue::Integer(0));
    }

    #[test]
    fn kinds_know_their_entity_column() {
        assert_eq!(DatasetKind::State.entity_column(), "State");
        assert_eq!(DatasetKind::Metro.entity_label(), "Metros");
        assert_eq!(DatasetKind::Metro.to_string(), "Metro Data");
    }
}
