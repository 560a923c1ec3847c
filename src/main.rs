//! dashdemo - terminal demo dashboard with a login gate and mock data
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use dashdemo_app::config::{self, Settings};
use tracing::info;

/// dashdemo - terminal demo dashboard
#[derive(Parser, Debug)]
#[command(name = "dashdemo")]
#[command(about = "A terminal demo dashboard with a login gate and mock data", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Simulated fetch latency in milliseconds
    #[arg(long, value_name = "MS")]
    latency_ms: Option<u64>,

    /// Probability (0.0 - 1.0) that a fetch fails
    #[arg(long, value_name = "RATE")]
    failure_rate: Option<f64>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Username submitted in headless mode
    #[arg(long, default_value = "", requires = "headless")]
    username: String,

    /// Password submitted in headless mode
    #[arg(long, default_value = "", requires = "headless")]
    password: String,
}

impl Args {
    fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(config::default_config_path)
    }

    /// File settings with CLI overrides applied
    fn settings(&self) -> Settings {
        let mut settings = match self.config_path() {
            Some(path) => config::load_settings(&path),
            None => Settings::default(),
        };
        if let Some(latency_ms) = self.latency_ms {
            settings.provider.latency_ms = latency_ms;
        }
        if let Some(failure_rate) = self.failure_rate {
            settings.provider.failure_rate = failure_rate;
        }
        settings
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config_path()
            .ok_or_else(|| color_eyre::eyre::eyre!("No config directory available; pass --config"))?;
        config::init_config_file(&path)?;
        println!("Config file: {}", path.display());
        return Ok(());
    }

    dashdemo_core::logging::init()?;

    let settings = args.settings();
    info!("Settings: {:?}", settings);
    let provider = settings.provider.build_mock();

    if args.headless {
        let outcome =
            dashdemo::run_headless(settings, provider, &args.username, &args.password).await?;
        let code = outcome.exit_code();
        if code != 0 {
            std::process::exit(code);
        }
        return Ok(());
    }

    dashdemo::run(settings, provider).await?;
    Ok(())
}
