use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::mem;
use tracing::{debug, error, info, warn};

pub mod quiz;
pub mod scores;
pub mod settings;

use crate::game::quiz::definition::QuestionStore;
use crate::game::quiz::QuizSession;
use crate::game::scores::ScoreStore;
use crate::game::settings::Settings;
use crate::output::{Controls, GameOutput, Message};


#[derive(Debug)]
struct Round {
    session: QuizSession,
    options: Vec<String>,
    selected: Option<usize>,
}

#[derive(Debug)]
enum Phase {
    NotStarted,
    InProgress(Round),
    Finished(QuizSession),
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not started",
            Phase::InProgress(_) => "in progress",
            Phase::Finished(_) => "finished",
        }
    }

    fn controls(&self) -> Controls {
        match self {
            Phase::NotStarted => Controls {
                name_input: true,
                start: true,
                ..Default::default()
            },
            Phase::InProgress(_) => Controls {
                answer: true,
                ..Default::default()
            },
            Phase::Finished(_) => Controls {
                name_input: true,
                start: true,
                answer: false,
                save: true,
                delete: true,
            },
        }
    }
}

pub struct Game<O: GameOutput> {
    current_phase: Phase,
    question_store: QuestionStore,
    score_store: ScoreStore,
    rng: StdRng,
    output: O,
}

impl<O: GameOutput> Game<O> {
    pub fn new(settings: &Settings, output: O) -> Game<O> {
        Game::with_rng(settings, output, StdRng::from_entropy())
    }

    pub fn with_rng(settings: &Settings, output: O, rng: StdRng) -> Game<O> {
        let mut game = Game {
            current_phase: Phase::NotStarted,
            question_store: QuestionStore::new(&settings.questions_path),
            score_store: ScoreStore::new(&settings.scores_path),
            rng,
            output,
        };
        game.set_current_phase(Phase::NotStarted);
        game
    }

    fn set_current_phase(&mut self, phase: Phase) {
        debug!("Entering game phase: {}", phase.name());
        self.current_phase = phase;
        self.show_controls();
    }

    pub fn show_controls(&mut self) {
        let controls = self.current_phase.controls();
        self.output.update_controls(&controls);
    }

    pub fn is_in_progress(&self) -> bool {
        match self.current_phase {
            Phase::InProgress(_) => true,
            _ => false,
        }
    }

    /// Reloads the questions and starts a fresh session for `player_name`.
    pub fn begin(&mut self, player_name: &str) -> Result<()> {
        if self.is_in_progress() {
            return Err(anyhow!("A game is already in progress"));
        }

        let loaded = self.question_store.load_all();
        if let Some(e) = &loaded.error {
            error!(
                "Could not load questions from {:?}: {}",
                self.question_store.source(),
                e
            );
            self.output
                .say(&Message::QuestionsUnavailable(e.to_string()));
        }

        let session = QuizSession::start(player_name, loaded.questions, &mut self.rng);
        info!(
            "Starting game for `{}` with {} questions",
            player_name,
            session.questions().len()
        );
        self.present(session);
        Ok(())
    }

    pub fn select(&mut self, option: usize) -> Result<()> {
        match &mut self.current_phase {
            Phase::InProgress(round) => {
                if option >= round.options.len() {
                    return Err(anyhow!("There is no answer #{}", option + 1));
                }
                round.selected = Some(option);
                Ok(())
            }
            _ => Err(anyhow!("There is no active question")),
        }
    }

    /// Submits the selected option, if any, and shows the next question or the results.
    pub fn next(&mut self) -> Result<()> {
        let round = match mem::replace(&mut self.current_phase, Phase::NotStarted) {
            Phase::InProgress(round) => round,
            other => {
                self.current_phase = other;
                return Err(anyhow!("There is no active question"));
            }
        };

        let Round {
            mut session,
            options,
            selected,
        } = round;
        let answer = selected.and_then(|i| options.get(i)).map(String::as_str);
        let is_correct = session.submit_answer(answer)?;
        debug!(
            "Answer {:?} to question {} was {}",
            answer,
            session.current_index(),
            if is_correct { "correct" } else { "incorrect" }
        );

        self.present(session);
        Ok(())
    }

    fn present(&mut self, session: QuizSession) {
        let prompt = session.current_question().map(|question| {
            (
                question.text.clone(),
                question.shuffled_options(&mut self.rng),
            )
        });

        match prompt {
            Some((text, options)) => {
                self.output.say(&Message::QuestionBegins {
                    number: session.current_index() + 1,
                    total: session.questions().len(),
                    text,
                    options: options.clone(),
                });
                self.set_current_phase(Phase::InProgress(Round {
                    session,
                    options,
                    selected: None,
                }));
            }
            None => {
                debug_assert!(session.is_over());
                let score = session.correct_count();
                info!("`{}` finished with score {}", session.player_name(), score);
                self.output.say(&Message::GameOver(score));
                self.set_current_phase(Phase::Finished(session));
            }
        }
    }

    pub fn save(&mut self) -> Result<()> {
        let record = match &self.current_phase {
            Phase::Finished(session) => session.score_record(),
            _ => return Err(anyhow!("Scores can only be saved once a game is over")),
        };

        match self.score_store.append(&record) {
            Ok(()) => self.output.say(&Message::ScoreSaved(record)),
            Err(e) => {
                error!("Could not save score `{}`: {}", record, e);
                self.output.say(&Message::ScoreSaveFailed);
            }
        }
        Ok(())
    }

    /// Deletes every saved line equal to the current player name and score.
    pub fn delete(&mut self) -> Result<()> {
        let record = match &self.current_phase {
            Phase::Finished(session) => session.score_record(),
            _ => return Err(anyhow!("Scores can only be deleted once a game is over")),
        };

        if !self.output.confirm(&Message::ConfirmDeletion) {
            debug!("Deletion of `{}` cancelled", record);
            return Ok(());
        }

        match self.score_store.delete(&record) {
            Ok(removed) => self.output.say(&Message::ScoreDeleted(record, removed)),
            Err(e) if e.is_not_found() => {
                warn!("No saved score matches `{}`", record);
                self.output.say(&Message::ScoreNotFound(record));
            }
            Err(e) => {
                error!("Could not delete score `{}`: {}", record, e);
                self.output.say(&Message::ScoreDeleteFailed);
            }
        }
        Ok(())
    }

    pub fn list_scores(&mut self) {
        match self.score_store.records() {
            Ok(records) => self.output.say(&Message::ScoresRecap(records)),
            Err(e) => {
                error!(
                    "Could not read scores from {:?}: {}",
                    self.score_store.source(),
                    e
                );
                self.output.say(&Message::ScoresListFailed);
            }
        }
    }

    pub fn reset(&mut self) -> Result<()> {
        match self.current_phase {
            Phase::Finished(_) => {
                self.set_current_phase(Phase::NotStarted);
                Ok(())
            }
            _ => Err(anyhow!("Only a finished game can be reset")),
        }
    }
}
