//! Repository layer for run outputs.
//!
//! Repositories hold what a run produces and keeps after exit: the results
//! table. Inputs (config, event log) are handled by `race-content` loaders.

mod error;
mod result_table;

pub use error::{RepositoryError, Result};
pub use result_table::ResultTableWriter;
