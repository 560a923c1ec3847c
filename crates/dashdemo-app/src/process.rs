//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use dashdemo_provider::DashboardProvider;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function, following up on any
/// chained messages and spawning the resulting actions
pub fn process_message<P>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    provider: &Arc<P>,
) where
    P: DashboardProvider + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), provider.clone());
        }

        msg = result.message;
    }
}
