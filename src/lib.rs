//! Record Viewer (recview)
//!
//! TUI browser for paginated user records: filter by name, status and date,
//! sort by column, and reveal rows progressively as the end of the table
//! scrolls into view.
//!
//! Pure Core / Impure Shell: `model` and `state` are pure values and
//! transitions; `source` and `view` own threads, files and the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
