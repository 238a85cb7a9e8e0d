mod app;
mod config;
mod logging;

use crate::app::handlers::handle_key;
use crate::app::state::summarize_all;
use crate::app::system::{BootConfig, LiveProbe, Services, SettingsStore, ShellRunner};
use crate::app::view::draw_ui;
use crate::app::AppState;
use crate::config::Config;
use crate::logging::init_logging;
use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::time::Duration;
use tracing::{info, warn};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

struct TerminalRestoreGuard;

impl Drop for TerminalRestoreGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    }
}

fn build_services(config: &Config) -> Result<Services, Box<dyn std::error::Error>> {
    let store = SettingsStore::load(&config.store_path)?;
    let boot_config = BootConfig::open(&config.boot_config_path)?;
    if config.dry_run {
        warn!("dry run: system commands are logged, not executed");
    }
    Ok(Services::new(
        store,
        boot_config,
        Box::new(ShellRunner::new(config.dry_run)),
        Box::new(LiveProbe),
    ))
}

fn print_summary(services: &Services) -> Result<(), Box<dyn std::error::Error>> {
    let entries = summarize_all(&services.store, services.probe.as_ref());
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn run_tui(mut app: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = std::io::stdout();
    let _restore_guard = TerminalRestoreGuard;
    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            terminal.draw(|f| draw_ui(f, &app))?;
            needs_redraw = false;
        }
        if app.should_exit {
            break;
        }
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key(&mut app, key.code, key.modifiers) {
                    needs_redraw = true;
                }
            }
            Event::Resize(_, _) => {
                needs_redraw = true;
            }
            _ => {}
        }
    }
    info!("settings closed");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    if let Err(error) = init_logging(&config.log_file) {
        eprintln!("[kano-settings] logging disabled: {error}");
    }
    info!(
        store = %config.store_path.display(),
        boot_config = %config.boot_config_path.display(),
        "starting"
    );

    let services = build_services(&config)?;
    if config.summary_only {
        return print_summary(&services);
    }
    run_tui(AppState::new(services))
}
