//! Safe Clothing TUI Application
//!
//! A terminal storefront: browse the catalog, fill the cart, switch screens
//! from the bottom bar.

use std::{fs::File, io, path::PathBuf, time::Duration};

use clap::Parser;
use crossterm::event;
use log::LevelFilter;
use ratatui::{backend::Backend, Terminal};

use safe_clothing::{
    tui::{handle_event, process_state, render, restore_terminal, setup_terminal, AppState},
    Config,
};

#[derive(Parser, Debug)]
#[command(
    name = "safe-clothing",
    version = env!("CARGO_PKG_VERSION"),
    about = "Browse a sample clothing catalog and fill a cart",
    long_about = None,
)]
struct Cli {
    /// Directory containing the bundled images/ folder
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
    /// Seed for reproducible catalog prices
    #[arg(long)]
    seed: Option<u64>,
    /// Write logs to this file (logging is off otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn into_config(self) -> Result<Config, String> {
        let log_level: LevelFilter = self
            .log_level
            .parse()
            .map_err(|_| format!("Unknown log level '{}'", self.log_level))?;

        Ok(Config {
            assets_dir: self.assets,
            seed: self.seed,
            log_file: self.log_file,
            log_level,
        })
    }
}

fn init_logging(config: &Config) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.effective_log_level())
        .format_target(false)
        .format_timestamp_secs();

    if let Some(path) = &config.log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn run<B: Backend>(terminal: &mut Terminal<B>, state: &mut AppState) -> safe_clothing::Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        process_state(state);

        if state.should_quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            handle_event(event, state);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;
    init_logging(&config)?;

    let mut state = AppState::from_config(&config);
    let mut terminal = setup_terminal()?;

    let result = run(&mut terminal, &mut state);

    state.shutdown();
    restore_terminal(&mut terminal)?;
    result?;
    Ok(())
}
