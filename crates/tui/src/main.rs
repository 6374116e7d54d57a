use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

use anyhow::Context;
use crossterm::cursor::Show;
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brainlogger_tui::api::LogApiClient;
use brainlogger_tui::app::{self, App};
use brainlogger_tui::config::ClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ClientConfig::from_env();

    // --- Tracing ---
    // The terminal belongs to the UI, so diagnostics go to a file.
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file))?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brainlogger_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(log_file))
                .with_ansi(false),
        )
        .init();
    tracing::info!(api_url = %config.api_url, "Starting BrainLogger");

    let api = Arc::new(LogApiClient::new(config.api_url.clone()));
    let (tx, rx) = mpsc::unbounded_channel();

    let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
    let mut terminal = setup_terminal(enhanced_keys)?;

    let result = app::run(&mut terminal, App::new(api, tx), rx).await;

    restore_terminal(&mut terminal, enhanced_keys);

    if let Err(e) = &result {
        tracing::error!(error = %e, "Terminal UI exited with error");
    }
    result
}

fn setup_terminal(enhanced_keys: bool) -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    if enhanced_keys {
        // Lets Ctrl+Enter arrive as a distinct key.
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )
        .context("Failed to enable keyboard enhancement")?;
    }

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>, enhanced_keys: bool) {
    if enhanced_keys {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags).ok();
    }
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show).ok();
}
