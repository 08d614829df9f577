//! Data layer: core types, loading, schema inference, and filtering.
//!
//! Architecture:
//! ```text
//!  .csv / .json / .parquet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Table
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  schema   │  "<feature> <year>" headers → feature → years
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  dataset  │  Table + entity column + Schema (built once)
//!   └──────────┘
//!      │     │
//!      ▼     ▼
//!  ┌──────┐ ┌───────┐
//!  │filter│ │ chart │  projected Table / long-form rows, or Empty
//!  └──────┘ └───────┘
//! ```

pub mod chart;
pub mod dataset;
pub mod filter;
pub mod loader;
pub mod model;
pub mod schema;
