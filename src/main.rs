use anyhow::{Context, Result};
use std::io::{self, BufRead};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::game::settings::Settings;
use crate::game::Game;
use crate::output::terminal::TerminalOutput;

mod commands;
mod error;
mod game;
mod output;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("knowledge=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let settings = Settings::from_env();
    info!(
        "Questions from {:?}, scores in {:?}",
        settings.questions_path, settings.scores_path
    );

    println!("Knowledge");
    let mut game = Game::new(&settings, TerminalOutput::stdout());

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Could not read from standard input")?;
        if read == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let result = line
            .parse::<Command>()
            .and_then(|command| commands::dispatch(&mut game, command));
        match result {
            Ok(true) => (),
            Ok(false) => break,
            Err(e) => {
                warn!("{:#}", e);
                println!("{}", e);
            }
        }
    }

    Ok(())
}
