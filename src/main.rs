//! Terminal NotFlappyBird runner (default binary).
//!
//! Loads the content pack, waits for a large enough console, then hands the
//! terminal to the cooperative game loop until the player quits.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use not_flappy_bird::core::{DirAssets, GameState};
use not_flappy_bird::engine::{wait_for_viewport, EngineConfig, GameLoop, FAREWELL};
use not_flappy_bird::input::TerminalInput;
use not_flappy_bird::term::TerminalRenderer;
use not_flappy_bird::types::RESIZE_POLL_MS;

const LOG_FILE: &str = "not-flappy-bird.log";

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    let _log_guard = setup_logging(&config.log_dir)?;

    let assets = DirAssets::new(&config.asset_dir);
    let state = GameState::new(&assets, config.field, config.seed).inspect_err(|err| {
        tracing::error!(error = %err, asset_dir = %config.asset_dir.display(), "content pack rejected");
    })?;
    let mut game = GameLoop::new(state, config.frame_period_ms)?;

    let mut term = TerminalRenderer::new();
    let mut input = TerminalInput::new();
    term.enter()?;

    let result = run(&mut game, &mut term, &mut input, &config);

    // Always try to restore terminal state.
    let _ = input.exit();
    let _ = term.exit();
    result?;

    println!("{FAREWELL}");
    Ok(())
}

fn run(
    game: &mut GameLoop,
    term: &mut TerminalRenderer,
    input: &mut TerminalInput,
    config: &EngineConfig,
) -> Result<()> {
    input.enter()?;
    tracing::info!(release_events = input.reports_releases(), "input ready");

    wait_for_viewport(
        term,
        config.field.width,
        config.field.height,
        Duration::from_millis(RESIZE_POLL_MS),
        std::thread::sleep,
    )?;

    game.run(term, input)?;
    game.shutdown(term)
}

/// Log to a file only; stdout belongs to the game display.
fn setup_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE).display());
    Ok(guard)
}
