//! dashdemo-tui - Terminal UI for dashdemo
//!
//! Creates an Engine from dashdemo-app and adds terminal rendering, event
//! polling and the widget set.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
