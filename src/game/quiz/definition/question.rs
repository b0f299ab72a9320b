use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::fmt;

#[derive(Deserialize, PartialEq, Eq)]
pub struct RawQuestion {
    pub question: String,
    pub correct_answer: String,
    pub distractor_1: String,
    pub distractor_2: String,
    pub distractor_3: String,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub correct_answer: String,
    pub distractors: [String; 3],
}

impl Question {
    pub fn is_answer_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    /// Correct answer and distractors in a fresh random order.
    pub fn shuffled_options<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let mut options = Vec::with_capacity(4);
        options.push(self.correct_answer.clone());
        options.extend(self.distractors.iter().cloned());
        options.shuffle(rng);
        options
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{};{}",
            self.text,
            self.correct_answer,
            self.distractors.join(";")
        )
    }
}

impl From<RawQuestion> for Question {
    fn from(raw_question: RawQuestion) -> Self {
        Question {
            text: raw_question.question,
            correct_answer: raw_question.correct_answer,
            distractors: [
                raw_question.distractor_1,
                raw_question.distractor_2,
                raw_question.distractor_3,
            ],
        }
    }
}
