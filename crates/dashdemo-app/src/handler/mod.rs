//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `session`: Login form and session transitions
//! - `dashboard`: Fetch results, tabs, tasks and the overflow menu

pub(crate) mod dashboard;
pub(crate) mod keys;
pub(crate) mod session;
pub(crate) mod update;


use crate::message::Message;

pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Call the provider and report back with `Message::DashboardFetched`
    FetchDashboard { generation: u64 },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Issue a fetch for `generation`, if one was started
    pub(crate) fn fetch(generation: Option<u64>) -> Self {
        match generation {
            Some(generation) => Self::action(UpdateAction::FetchDashboard { generation }),
            None => Self::none(),
        }
    }
}
