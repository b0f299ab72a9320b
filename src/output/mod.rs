use crate::game::scores::ScoreRecord;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    ConfirmDeletion,
    GameOver(u32),
    QuestionBegins {
        number: usize,
        total: usize,
        text: String,
        options: Vec<String>,
    },
    QuestionsUnavailable(String),
    ScoreDeleted(ScoreRecord, usize),
    ScoreDeleteFailed,
    ScoreNotFound(ScoreRecord),
    ScoreSaved(ScoreRecord),
    ScoreSaveFailed,
    ScoresListFailed,
    ScoresRecap(Vec<ScoreRecord>),
}

/// Which player actions are currently allowed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Controls {
    pub name_input: bool,
    pub start: bool,
    pub answer: bool,
    pub save: bool,
    pub delete: bool,
}

pub trait GameOutput {
    fn say(&mut self, message: &Message);

    fn confirm(&mut self, message: &Message) -> bool;

    fn update_controls(&mut self, controls: &Controls);
}
