use anyhow::{anyhow, Error, Result};
use std::str::FromStr;

use crate::game::Game;
use crate::output::GameOutput;

pub const HELP: &str = "\
start [name]  start a new game
1-4           select an answer
next          submit the selected answer
save          save your score
delete        delete your saved score
scores        list saved scores
reset         clear a finished game
quit          exit";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Start(String),
    Select(usize),
    Next,
    Save,
    Delete,
    Scores,
    Reset,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Command> {
        let line = line
            .trim_end_matches(|c| c == '\n' || c == '\r')
            .trim_start();
        // The player name is kept exactly as typed after a single separator
        let (keyword, rest) = match line.find(char::is_whitespace) {
            Some(split) => {
                let mut rest = line[split..].chars();
                rest.next();
                (&line[..split], rest.as_str())
            }
            None => (line, ""),
        };

        let command = match keyword.to_lowercase().as_str() {
            "start" => Command::Start(rest.to_owned()),
            "next" | "n" => Command::Next,
            "save" => Command::Save,
            "delete" => Command::Delete,
            "scores" => Command::Scores,
            "reset" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            number => match number.parse::<usize>() {
                Ok(n) if (1..=4).contains(&n) => Command::Select(n - 1),
                _ => return Err(anyhow!("Unknown command `{}`, try `help`", line.trim())),
            },
        };

        match command {
            Command::Start(_) => Ok(command),
            _ if rest.trim().is_empty() => Ok(command),
            _ => Err(anyhow!("`{}` does not take arguments", keyword)),
        }
    }
}

/// Runs one command against the game. Returns false once the player wants to quit.
pub fn dispatch<O: GameOutput>(game: &mut Game<O>, command: Command) -> Result<bool> {
    match command {
        Command::Start(name) => game.begin(&name)?,
        Command::Select(option) => game.select(option)?,
        Command::Next => game.next()?,
        Command::Save => game.save()?,
        Command::Delete => game.delete()?,
        Command::Scores => game.list_scores(),
        Command::Reset => game.reset()?,
        Command::Help => {
            println!("{}", HELP);
            game.show_controls();
        }
        Command::Quit => return Ok(false),
    }
    Ok(true)
}
