//! Headless mode runner - drives the engine without a terminal

use dashdemo_app::{AppState, Engine, EngineEvent, LoadPhase, LoginField, Message, Settings};
use dashdemo_core::prelude::*;
use dashdemo_core::SessionState;
use dashdemo_provider::DashboardProvider;
use tokio::sync::broadcast;

use super::HeadlessEvent;

/// How a headless run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessOutcome {
    Loaded,
    LoginFailed,
    LoadFailed,
    /// Quit (e.g. SIGINT) before the first load settled
    Interrupted,
}

impl HeadlessOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Loaded => 0,
            Self::LoginFailed => 1,
            Self::LoadFailed => 2,
            Self::Interrupted => 130,
        }
    }
}

/// Run in headless mode - output NDJSON events instead of the TUI
pub async fn run_headless<P>(
    settings: Settings,
    provider: P,
    username: &str,
    password: &str,
) -> Result<HeadlessOutcome>
where
    P: DashboardProvider + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("dashdemo starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings, provider);
    engine.spawn_signal_handler();

    let outcome = drive(&mut engine, username, password, |event| event.emit()).await;

    engine.shutdown();
    info!("Headless mode exiting: {:?}", outcome);
    Ok(outcome)
}

/// Log in, wait for the first dashboard load to settle, then log out.
///
/// Every step is reported to `sink`.
pub async fn drive<P, F>(
    engine: &mut Engine<P>,
    username: &str,
    password: &str,
    mut sink: F,
) -> HeadlessOutcome
where
    P: DashboardProvider + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    let mut events = engine.subscribe();

    engine.process_message(Message::LoginFieldChanged {
        field: LoginField::Username,
        value: username.to_string(),
    });
    engine.process_message(Message::LoginFieldChanged {
        field: LoginField::Password,
        value: password.to_string(),
    });
    engine.process_message(Message::SubmitLogin);

    let mut settled = forward_events(&mut events, &engine.state, &mut sink);
    while settled.is_none() {
        if engine.should_quit() || !engine.process_next().await {
            settled = Some(HeadlessOutcome::Interrupted);
            break;
        }
        settled = forward_events(&mut events, &engine.state, &mut sink);
    }

    if engine.state.session.is_logged_in() {
        engine.process_message(Message::Logout);
        forward_events(&mut events, &engine.state, &mut sink);
    }

    settled.unwrap_or(HeadlessOutcome::Interrupted)
}

/// Translate pending engine events, returning the outcome once the run settles
fn forward_events<F>(
    events: &mut broadcast::Receiver<EngineEvent>,
    state: &AppState,
    sink: &mut F,
) -> Option<HeadlessOutcome>
where
    F: FnMut(HeadlessEvent),
{
    let mut settled = None;
    while let Ok(event) = events.try_recv() {
        match event {
            EngineEvent::LoginRejected { error } => {
                warn!("Headless login rejected: {}", error);
                sink(HeadlessEvent::login_failed(error));
                settled = Some(HeadlessOutcome::LoginFailed);
            }
            EngineEvent::SessionChanged { new, .. } => match new {
                SessionState::LoggedIn => sink(HeadlessEvent::logged_in()),
                SessionState::LoggedOut => sink(HeadlessEvent::logged_out()),
            },
            EngineEvent::DashboardStatusChanged {
                generation,
                phase,
                error,
            } => match phase {
                LoadPhase::Loading => sink(HeadlessEvent::dashboard_loading(generation)),
                LoadPhase::Loaded => {
                    if let Some(data) = state.dashboard.as_ref().and_then(|d| d.data()) {
                        sink(HeadlessEvent::dashboard_loaded(generation, data.clone()));
                        settled = Some(HeadlessOutcome::Loaded);
                    }
                }
                LoadPhase::Failed => {
                    sink(HeadlessEvent::dashboard_failed(
                        generation,
                        error.unwrap_or_default(),
                    ));
                    settled = Some(HeadlessOutcome::LoadFailed);
                }
                LoadPhase::Idle => {}
            },
            EngineEvent::TabChanged { .. } | EngineEvent::Shutdown => {}
        }
    }
    settled
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashdemo_provider::test_utils::ScriptedProvider;

    async fn run(
        provider: ScriptedProvider,
        username: &str,
        password: &str,
    ) -> (HeadlessOutcome, Vec<HeadlessEvent>) {
        let mut engine = Engine::new(Settings::default(), provider);
        let mut emitted = Vec::new();
        let outcome = drive(&mut engine, username, password, |e| emitted.push(e)).await;
        (outcome, emitted)
    }

    fn names(events: &[HeadlessEvent]) -> Vec<&'static str> {
        events.iter().map(HeadlessEvent::name).collect()
    }

    #[tokio::test]
    async fn test_successful_run() {
        let (outcome, events) = run(ScriptedProvider::new(), "admin", "admin").await;

        assert_eq!(outcome, HeadlessOutcome::Loaded);
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(
            names(&events),
            vec!["logged_in", "dashboard_loading", "dashboard_loaded", "logged_out"]
        );
    }

    #[tokio::test]
    async fn test_bad_credentials() {
        let (outcome, events) = run(ScriptedProvider::new(), "admin", "wrong").await;

        assert_eq!(outcome, HeadlessOutcome::LoginFailed);
        assert_ne!(outcome.exit_code(), 0);
        assert_eq!(names(&events), vec!["login_failed"]);
        match &events[0] {
            HeadlessEvent::LoginFailed { error, .. } => {
                assert_eq!(error, "Invalid username or password")
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_failure() {
        let provider = ScriptedProvider::new().then_fail("network down");
        let (outcome, events) = run(provider, "admin", "admin").await;

        assert_eq!(outcome, HeadlessOutcome::LoadFailed);
        assert!(events.iter().any(|e| matches!(
            e,
            HeadlessEvent::DashboardFailed { generation: 1, error, .. } if error == "network down"
        )));
        assert_eq!(names(&events).last(), Some(&"logged_out"));
    }

    #[tokio::test]
    async fn test_quit_before_load_settles() {
        let provider = ScriptedProvider::new().with_latency(std::time::Duration::from_secs(60));
        let mut engine = Engine::new(Settings::default(), provider);
        engine.msg_sender().send(Message::Quit).await.unwrap();

        let outcome = drive(&mut engine, "admin", "admin", |_| {}).await;

        assert_eq!(outcome, HeadlessOutcome::Interrupted);
    }
}
