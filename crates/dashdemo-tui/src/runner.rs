//! Main TUI runner - entry point and event loop

use dashdemo_app::{Engine, Settings};
use dashdemo_core::prelude::*;
use dashdemo_provider::DashboardProvider;
use ratatui::DefaultTerminal;

use crate::{event, render, terminal};

/// Run the interactive dashboard until the user quits
pub async fn run<P>(settings: Settings, provider: P) -> Result<()>
where
    P: DashboardProvider + Sync + 'static,
{
    terminal::install_panic_hook();

    let tick_rate = settings.ui.tick_rate();
    info!(
        "Starting TUI: latency={:?} failure_rate={}",
        settings.provider.latency(),
        settings.provider.failure_rate
    );

    let mut engine = Engine::new(settings, provider);
    engine.spawn_signal_handler();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let result = run_loop(&mut term, &mut engine, tick_rate);

    engine.shutdown();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("TUI exited with error: {}", e);
    }
    result
}

fn run_loop<P>(
    term: &mut DefaultTerminal,
    engine: &mut Engine<P>,
    tick_rate: std::time::Duration,
) -> Result<()>
where
    P: DashboardProvider + Sync + 'static,
{
    while !engine.should_quit() {
        // Fetch results and signals arrive through the channel
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        term.draw(|frame| render::view(frame, &engine.state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll(tick_rate)? {
            engine.process_message(message);
        }
    }
    Ok(())
}
