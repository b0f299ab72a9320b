use std::io::{self, Write};
use tracing::warn;

use crate::output::{Controls, GameOutput, Message};

pub struct TerminalOutput<W: Write> {
    writer: W,
}

impl TerminalOutput<io::Stdout> {
    pub fn stdout() -> Self {
        TerminalOutput::new(io::stdout())
    }
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(writer: W) -> Self {
        TerminalOutput { writer }
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{}", text).and_then(|_| self.writer.flush()) {
            warn!("Could not write to terminal: {}", e);
        }
    }
}

fn interpret_message(message: &Message) -> String {
    use Message::*;
    match message {
        ConfirmDeletion => "Are you sure you want to delete your score? [y/N]".into(),
        GameOver(score) => format!("Game Over! Your score: {}", score),
        QuestionBegins {
            number,
            total,
            text,
            options,
        } => {
            let mut message = format!("\nQuestion {}/{}: {}", number, total, text);
            for (index, option) in options.iter().enumerate() {
                message += &format!("\n  {}) {}", index + 1, option);
            }
            message
        }
        QuestionsUnavailable(reason) => format!("Could not read all questions: {}", reason),
        ScoreDeleted(_, 1) => "Score deleted successfully!".into(),
        ScoreDeleted(_, removed) => format!("Score deleted successfully! ({} lines)", removed),
        ScoreDeleteFailed => "Failed to delete score.".into(),
        ScoreNotFound(record) => format!("No saved score matches {}.", record),
        ScoreSaved(_) => "Score saved successfully!".into(),
        ScoreSaveFailed => "Failed to save score.".into(),
        ScoresListFailed => "Failed to read saved scores.".into(),
        ScoresRecap(records) => {
            if records.is_empty() {
                return "No scores saved yet.".into();
            }
            let mut recap = "Saved scores:".to_owned();
            for record in records {
                recap += &format!("\n- {}: {}", record.player_name, record.score);
            }
            recap
        }
    }
}

fn describe_controls(controls: &Controls) -> String {
    let mut commands = Vec::new();
    if controls.start {
        if controls.name_input {
            commands.push("start <name>");
        } else {
            commands.push("start");
        }
    }
    if controls.answer {
        commands.push("1-4");
        commands.push("next");
    }
    if controls.save {
        commands.push("save");
    }
    if controls.delete {
        commands.push("delete");
    }
    commands.push("scores");
    commands.push("quit");
    format!("Commands: {}", commands.join(", "))
}

pub fn is_affirmative(reply: &str) -> bool {
    match reply.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        _ => false,
    }
}

impl<W: Write> GameOutput for TerminalOutput<W> {
    fn say(&mut self, message: &Message) {
        self.write(&interpret_message(message));
    }

    fn confirm(&mut self, message: &Message) -> bool {
        self.write(&interpret_message(message));
        let mut reply = String::new();
        match io::stdin().read_line(&mut reply) {
            Ok(_) => is_affirmative(&reply),
            Err(e) => {
                warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }

    fn update_controls(&mut self, controls: &Controls) {
        self.write(&describe_controls(controls));
    }
}
