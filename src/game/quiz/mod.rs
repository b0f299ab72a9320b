use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;

use self::definition::Question;
use crate::game::scores::ScoreRecord;

pub mod definition;


/// One playthrough: a shuffled copy of the questions and the player's progress.
#[derive(Clone, Debug)]
pub struct QuizSession {
    player_name: String,
    questions: Vec<Question>,
    current_index: usize,
    correct_count: u32,
}

impl QuizSession {
    pub fn start<R: Rng + ?Sized>(
        player_name: &str,
        mut questions: Vec<Question>,
        rng: &mut R,
    ) -> QuizSession {
        questions.shuffle(rng);
        QuizSession {
            player_name: player_name.to_owned(),
            questions,
            current_index: 0,
            correct_count: 0,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn is_over(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Scores the answer against the current question and moves on, whether or
    /// not it was right. `None` means nothing was selected.
    pub fn submit_answer(&mut self, answer: Option<&str>) -> Result<bool> {
        let question = self
            .current_question()
            .context("There are no questions left")?;
        let is_correct = answer.map_or(false, |a| question.is_answer_correct(a));
        if is_correct {
            self.correct_count += 1;
        }
        self.current_index += 1;
        Ok(is_correct)
    }

    pub fn score_record(&self) -> ScoreRecord {
        ScoreRecord::new(&self.player_name, self.correct_count)
    }
}
