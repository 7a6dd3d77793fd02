//! # Tables
//!
//! Pipe-table handling for mentor prose.
//!
//! ## Modules
//!
//! - **`syntax`**: `PipeTable` delimiter knowledge (pipe, dash run, fencing)
//! - **`detect`**: Table Detector; `detect_regions()` tiles text into prose
//!   and table-candidate regions, `split_tables()` confirms candidates
//! - **`cells`**: Table Cell Parser; `parse_table()` and the lenient
//!   `parse_concept_table()`
//! - **`types`**: `TablePayload`, `Region`, `Section`
//!
//! Detection is a heuristic (pipe line followed by a pipe line with `---`)
//! matched to what the mentor generator emits, not a markdown grammar.

pub mod cells;
pub mod detect;
pub mod syntax;
pub mod types;

pub use cells::{parse_concept_table, parse_table};
pub use detect::{detect_regions, detect_regions_at, split_tables, split_tables_at};
pub use syntax::PipeTable;
pub use types::{Region, RegionKind, Section, TablePayload};
