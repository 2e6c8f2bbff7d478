//! Main entry point for rusty-hstr.
//!
//! This file loads the history, runs the picker full-screen, restores the
//! terminal and hands the selected command back to the shell.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use rusty_hstr::config::{Cli, Config, OutputMode};
use rusty_hstr::event;
use rusty_hstr::history::History;
use rusty_hstr::shell::{self, Injector, PrintInjector, TiocstiInjector};
use rusty_hstr::ui::TerminalGuard;
use rusty_hstr::utils;
use rusty_hstr::App;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging before anything else
    let _log_guard = utils::logger::init_logging();

    let result = run(cli);
    if let Err(e) = &result {
        error!("{:#}", e);
        eprintln!("rusty-hstr: {:#}", e);
    }
    ExitCode::from(utils::exit::exit_code(&result))
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;
    let history = History::load(&config.histfile)?;
    if history.is_empty() {
        info!("Starting with empty history");
    }

    let command = {
        // Drawn on /dev/tty; the guard restores it before anything is injected
        let mut guard = TerminalGuard::new()?;
        let rows = guard.rows()?;
        let mut app = App::new(&history, config.prompt.as_str(), rows);
        app.run(&mut guard.terminal, event::next_user_event)?
    };

    match config.output {
        OutputMode::Print => PrintInjector::stdout().inject(&command)?,
        OutputMode::Inject => shell::hand_off(
            &mut TiocstiInjector::stdin(),
            &mut PrintInjector::stdout(),
            &command,
        )?,
    }
    Ok(())
}
