//! dashdemo - terminal demo dashboard
//!
//! The binary wires configuration and logging together and starts either the
//! ratatui frontend from `dashdemo-tui` or the NDJSON headless runner.

pub mod headless;

pub use dashdemo_tui::run;
pub use headless::runner::{run_headless, HeadlessOutcome};
