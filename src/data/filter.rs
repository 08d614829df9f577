use serde::{Deserialize, Serialize};

use super::model::Table;
use super::schema::{split_header, Schema};

// ---------------------------------------------------------------------------
// Selection: which entities / years / features the user constrained
// ---------------------------------------------------------------------------

/// A user's filter triple. An empty list means "no constraint" on that
/// dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub entities: Vec<String>,
    pub years: Vec<String>,
    pub features: Vec<String>,
}

impl Selection {
    pub fn with_entities<I, S>(mut self, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entities = entities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_years<I, S>(mut self, years: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.years = years.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// True when no dimension is constrained (the "View All Data" case).
    pub fn is_unconstrained(&self) -> bool {
        self.entities.is_empty() && self.years.is_empty() && self.features.is_empty()
    }

    /// Human-readable lines describing the constrained dimensions, e.g.
    /// `"States: Ohio, Iowa"`.
    pub fn summary(&self, entity_label: &str) -> Vec<String> {
        [
            (entity_label, &self.entities),
            ("Years", &self.years),
            ("Features", &self.features),
        ]
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(label, values)| format!("{label}: {}", values.join(", ")))
        .collect()
    }
}

// ---------------------------------------------------------------------------
// Column matching policy for the single-dimension filter modes
// ---------------------------------------------------------------------------

/// How a selected year or feature is matched against column headers when only
/// one of the two dimensions is constrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnMatch {
    /// Containment anywhere in the header: year `"201"` matches `"A 2010"`.
    #[default]
    Substring,
    /// Equality with the parsed feature or year token.
    Exact,
}

impl ColumnMatch {
    fn year_matches(self, column: &str, years: &[String]) -> bool {
        match self {
            ColumnMatch::Substring => years.iter().any(|y| column.contains(y.as_str())),
            ColumnMatch::Exact => split_header(column)
                .map(|(_, year)| years.iter().any(|y| y == year))
                .unwrap_or(false),
        }
    }

    fn feature_matches(self, column: &str, features: &[String]) -> bool {
        match self {
            ColumnMatch::Substring => features.iter().any(|f| column.contains(f.as_str())),
            ColumnMatch::Exact => split_header(column)
                .map(|(feature, _)| features.iter().any(|f| f == feature))
                .unwrap_or(false),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome: a result or the explicit "nothing matched" signal
// ---------------------------------------------------------------------------

/// Result of a projection or chart reshape.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Found(T),
    /// The selection matched nothing; callers show a "no data" message.
    Empty,
}

impl<T> Outcome<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    pub fn found(&self) -> Option<&T> {
        match self {
            Outcome::Found(v) => Some(v),
            Outcome::Empty => None,
        }
    }

    pub fn into_found(self) -> Option<T> {
        match self {
            Outcome::Found(v) => Some(v),
            Outcome::Empty => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tabular projection
// ---------------------------------------------------------------------------

/// Apply `selection` to `table` and return the projected table.
///
/// `schema` must be the one inferred from `table`'s header. Rows are kept when
/// their entity value is selected (or when no entity is selected). Columns:
/// * years and features both selected → the entity column plus every existing
///   `"<feature> <year>"` header in feature-major selection order;
/// * only years, or only features → the entity column plus every measurement
///   column matching under `matching`, in table order;
/// * neither → every column.
///
/// An empty column selection and an empty row set both yield [`Outcome::Empty`].
pub fn project(
    table: &Table,
    schema: &Schema,
    entity_column: &str,
    selection: &Selection,
    matching: ColumnMatch,
) -> Outcome<Table> {
    let rows = if selection.entities.is_empty() {
        table.clone()
    } else {
        match table.column_index(entity_column) {
            Some(idx) => table.filter_rows(|row| {
                row[idx]
                    .entity_key()
                    .is_some_and(|key| selection.entities.contains(&key))
            }),
            None => {
                log::warn!("entity column {entity_column:?} missing; no rows can match");
                return Outcome::Empty;
            }
        }
    };

    let years_set = !selection.years.is_empty();
    let features_set = !selection.features.is_empty();

    let selected: Option<Vec<String>> = match (years_set, features_set) {
        (false, false) => None,
        (true, true) => Some(
            selection
                .features
                .iter()
                .flat_map(|f| selection.years.iter().map(move |y| (f, y)))
                .filter_map(|(f, y)| schema.column_for(f, y))
                .filter(|c| table.column_index(c).is_some())
                .map(str::to_string)
                .collect(),
        ),
        (true, false) => Some(
            measurement_columns(table, entity_column)
                .filter(|c| matching.year_matches(c, &selection.years))
                .cloned()
                .collect(),
        ),
        (false, true) => Some(
            measurement_columns(table, entity_column)
                .filter(|c| matching.feature_matches(c, &selection.features))
                .cloned()
                .collect(),
        ),
    };

    let projected = match selected {
        None => rows,
        Some(columns) if columns.is_empty() => {
            log::debug!("selection {selection:?} matched no columns");
            return Outcome::Empty;
        }
        Some(columns) => {
            let mut names = Vec::with_capacity(columns.len() + 1);
            names.push(entity_column.to_string());
            names.extend(columns);
            rows.select_columns(&names)
        }
    };

    if projected.is_empty() {
        log::debug!("selection {selection:?} matched no rows");
        return Outcome::Empty;
    }

    log::debug!(
        "projected {} rows x {} columns",
        projected.len(),
        projected.width()
    );
    Outcome::Found(projected)
}

fn measurement_columns<'a>(
    table: &'a Table,
    entity_column: &'a str,
) -> impl Iterator<Item = &'a String> + 'a {
    table
        .columns()
        .iter()
        .filter(move |c| c.as_str() != entity_column)
}
