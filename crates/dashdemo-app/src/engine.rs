//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the application state, the message channel, the data
//! provider and the event broadcaster. Frontends feed it messages and render
//! `engine.state`.

use std::sync::Arc;

use dashdemo_core::SessionState;
use dashdemo_provider::DashboardProvider;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::Settings;
use crate::dashboard::{DashboardTab, LoadPhase};
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    session: SessionState,
    login_rejections: u64,
    dashboard: Option<(u64, LoadPhase)>,
    tab: Option<DashboardTab>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            session: state.session,
            login_rejections: state.login_rejections,
            dashboard: state
                .dashboard
                .as_ref()
                .map(|d| (d.generation, d.status.phase())),
            tab: state
                .dashboard
                .as_ref()
                .filter(|d| d.is_loaded())
                .map(|d| d.selected_tab),
        }
    }
}

/// Orchestration engine for dashdemo.
pub struct Engine<P> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, fetch tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    provider: Arc<P>,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,

    signal_task: Option<JoinHandle<()>>,
}

impl<P> Engine<P>
where
    P: DashboardProvider + Sync + 'static,
{
    /// Create an engine around `provider`. Signal handling is opt-in via
    /// [`Engine::spawn_signal_handler`].
    pub fn new(settings: Settings, provider: P) -> Self {
        Self::with_shared_provider(settings, Arc::new(provider))
    }

    pub fn with_shared_provider(settings: Settings, provider: Arc<P>) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            provider,
            event_tx,
            signal_task: None,
        }
    }

    /// Turn SIGINT/SIGTERM into `Message::Quit`
    pub fn spawn_signal_handler(&mut self) {
        if self.signal_task.is_none() {
            self.signal_task = Some(signals::spawn_signal_handler(self.msg_tx.clone()));
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.provider);

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns false once every sender is gone, which cannot happen while the
    /// engine holds its own sender.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Announce shutdown to subscribers. In-flight fetches are abandoned.
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        if let Some(task) = self.signal_task.take() {
            task.abort();
        }
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if post.login_rejections != pre.login_rejections {
            if let Some(error) = self.state.login.error.clone() {
                self.emit(EngineEvent::LoginRejected { error });
            }
        }

        if pre.session != post.session {
            self.emit(EngineEvent::SessionChanged {
                old: pre.session,
                new: post.session,
            });
        }

        if pre.dashboard != post.dashboard {
            if let Some((generation, phase)) = post.dashboard {
                let error = self
                    .state
                    .dashboard
                    .as_ref()
                    .and_then(|d| d.error_message())
                    .map(str::to_string);
                self.emit(EngineEvent::DashboardStatusChanged {
                    generation,
                    phase,
                    error,
                });
            }
        }

        if pre.tab != post.tab {
            if let Some(tab) = post.tab {
                self.emit(EngineEvent::TabChanged { tab });
            }
        }
    }

    /// send() only fails without subscribers, which is fine.
    fn emit(&self, event: EngineEvent) {
        debug!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::login::LoginField;
    use dashdemo_provider::test_utils::ScriptedProvider;

    fn engine(provider: ScriptedProvider) -> Engine<ScriptedProvider> {
        Engine::new(Settings::default(), provider)
    }

    fn fill(engine: &mut Engine<ScriptedProvider>, username: &str, password: &str) {
        engine.process_message(Message::LoginFieldChanged {
            field: LoginField::Username,
            value: username.to_string(),
        });
        engine.process_message(Message::LoginFieldChanged {
            field: LoginField::Password,
            value: password.to_string(),
        });
    }

    #[tokio::test]
    async fn test_login_emits_session_and_loading_events() {
        let mut engine = engine(ScriptedProvider::new());
        let mut events = engine.subscribe();

        fill(&mut engine, "admin", "admin");
        engine.process_message(Message::SubmitLogin);

        assert_eq!(
            events.recv().await.unwrap(),
            EngineEvent::SessionChanged {
                old: SessionState::LoggedOut,
                new: SessionState::LoggedIn,
            }
        );
        assert_eq!(
            events.recv().await.unwrap(),
            EngineEvent::DashboardStatusChanged {
                generation: 1,
                phase: LoadPhase::Loading,
                error: None,
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_result_arrives_through_channel() {
        let mut engine = engine(ScriptedProvider::new().then_fail("network down"));
        let mut events = engine.subscribe();

        fill(&mut engine, "admin", "admin");
        engine.process_message(Message::SubmitLogin);
        assert!(engine.process_next().await);

        let mut last = None;
        while let Ok(event) = events.try_recv() {
            last = Some(event);
        }
        assert_eq!(
            last,
            Some(EngineEvent::DashboardStatusChanged {
                generation: 1,
                phase: LoadPhase::Failed,
                error: Some("network down".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn test_repeated_rejection_emits_each_time() {
        let mut engine = engine(ScriptedProvider::new());
        let mut events = engine.subscribe();

        engine.process_message(Message::SubmitLogin);
        engine.process_message(Message::SubmitLogin);

        for _ in 0..2 {
            assert_eq!(
                events.recv().await.unwrap(),
                EngineEvent::LoginRejected {
                    error: crate::login::LoginError::MissingFields
                }
            );
        }
    }

    #[tokio::test]
    async fn test_quit_and_shutdown() {
        let mut engine = engine(ScriptedProvider::new());
        let mut events = engine.subscribe();

        engine.msg_sender().send(Message::Quit).await.unwrap();
        assert_eq!(engine.drain_pending_messages(), 1);
        assert!(engine.should_quit());

        engine.shutdown();
        assert_eq!(events.recv().await.unwrap(), EngineEvent::Shutdown);
    }

    #[tokio::test]
    async fn test_shutdown_stops_signal_listener() {
        let mut engine = engine(ScriptedProvider::new());
        engine.spawn_signal_handler();
        engine.spawn_signal_handler();

        engine.shutdown();

        assert!(engine.signal_task.is_none());
    }
}
