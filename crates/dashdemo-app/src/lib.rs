//! # dashdemo-app - Application State and Orchestration
//!
//! The TEA core of dashdemo: [`AppState`] is the model, [`Message`] the
//! input, [`handler::update`] the pure transition function. Side effects are
//! returned as [`UpdateAction`]s and executed by [`actions::handle_action`].
//! [`Engine`] ties these together for the TUI and headless frontends.
//!
//! This crate has no terminal dependency; keys arrive as [`InputKey`].

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod dashboard;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod login;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

pub use config::Settings;
pub use dashboard::{DashboardState, DashboardTab, LoadPhase, LoadStatus, MenuItem};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use login::{LoginError, LoginField, LoginFormState};
pub use message::Message;
pub use state::{AppPhase, AppState, UiMode};
