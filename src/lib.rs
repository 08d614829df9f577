//! Schema inference and filtering engine for wide "Feature Year" survey
//! tables, plus the loader and configuration used by the dashboard binary.

pub mod config;
pub mod data;
pub mod error;

pub use data::chart::{group_series, reshape_for_chart, PlotRow, Series};
pub use data::dataset::{Dataset, DatasetKind};
pub use data::filter::{project, ColumnMatch, Outcome, Selection};
pub use data::model::{CellValue, Table};
pub use data::schema::{infer_schema, split_header, Schema};
pub use error::{SchemaError, TableError};
