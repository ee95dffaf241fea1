mod app;
mod config;
mod error;
mod events;
mod log;
mod picker;
mod scroll;
mod tui;

use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;

use app::App;
use config::Config;
use error::ConfigError;
use events::EventHandler;
use picker::Picker;

const USAGE: &str = "\
Usage: hpicker [OPTIONS]

Options:
  -i, --items <A,B,C>    Comma-separated labels to pick from
  -v, --visible <N>      Number of labels visible at once
  -c, --config <PATH>    Config file (default: ~/.config/hpicker/config.toml)
  -h, --help             Print this help";

/// Command line overrides, applied on top of the config file
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    items: Option<Vec<String>>,
    visible_items: Option<usize>,
    config_path: Option<PathBuf>,
    help: bool,
}

fn parse_args(args: &[String]) -> std::result::Result<CliArgs, ConfigError> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--items" | "-i" => {
                let value = iter.next().ok_or(ConfigError::InvalidArgument {
                    flag: "--items",
                    value: String::new(),
                })?;
                let items: Vec<String> = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                cli.items = Some(items);
            }
            "--visible" | "-v" => {
                let value = iter.next().cloned().unwrap_or_default();
                let count = value.parse().map_err(|_| ConfigError::InvalidArgument {
                    flag: "--visible",
                    value,
                })?;
                cli.visible_items = Some(count);
            }
            "--config" | "-c" => {
                let value = iter.next().ok_or(ConfigError::InvalidArgument {
                    flag: "--config",
                    value: String::new(),
                })?;
                cli.config_path = Some(PathBuf::from(value));
            }
            "--help" | "-h" => cli.help = true,
            other => {
                eprintln!("Warning: ignoring unknown argument '{}'", other);
            }
        }
    }

    Ok(cli)
}

/// Config file (explicit path or the default location) with CLI overrides.
/// An explicit path that fails to load is an error; the default one falls
/// back to defaults.
fn load_config(cli: CliArgs) -> error::Result<Config> {
    let config = match &cli.config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    Ok(config.with_overrides(cli.items, cli.visible_items))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args)?;
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = load_config(cli)?;

    // Reject bad item lists before touching the terminal
    let mut app = App::new(&config)?;

    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }
    log::log(&format!(
        "{} items, {} visible",
        app.picker.len(),
        app.picker.visible_items()
    ));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::log(&format!("Exited with error: {}", e));
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        if app.should_quit {
            return Ok(());
        }

        // Handle events with timeout so resizes are picked up
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.apply(action);
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }
            _ = tokio::time::sleep(Duration::from_millis(250)) => {}
        }
    }
}
