//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use dashdemo_provider::{fetch_guarded, DashboardProvider};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<P>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, provider: Arc<P>)
where
    P: DashboardProvider + Sync + 'static,
{
    match action {
        UpdateAction::FetchDashboard { generation } => {
            spawn_fetch(generation, msg_tx, provider);
        }
    }
}

/// Run one guarded provider call and report its outcome
fn spawn_fetch<P>(generation: u64, msg_tx: mpsc::Sender<Message>, provider: Arc<P>)
where
    P: DashboardProvider + Sync + 'static,
{
    debug!("Fetching dashboard data (generation {})", generation);
    tokio::spawn(async move {
        let outcome = fetch_guarded(provider).await;
        if msg_tx
            .send(Message::DashboardFetched {
                generation,
                outcome,
            })
            .await
            .is_err()
        {
            warn!(
                "Dropping fetch result for generation {}: message channel closed",
                generation
            );
        }
    });
}
