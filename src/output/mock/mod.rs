use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{Controls, GameOutput, Message};

#[derive(Clone)]
pub struct MockGameOutput {
    messages: Arc<RwLock<Vec<Message>>>,
    prompts: Arc<RwLock<Vec<Message>>>,
    controls: Arc<RwLock<Option<Controls>>>,
    confirmation: Arc<RwLock<bool>>,
}

impl MockGameOutput {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            prompts: Arc::new(RwLock::new(Vec::new())),
            controls: Arc::new(RwLock::new(None)),
            confirmation: Arc::new(RwLock::new(true)),
        }
    }

    pub fn flush(&mut self) -> Vec<Message> {
        std::mem::replace(&mut *self.messages.write(), Vec::new())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.messages.read().iter().any(|m| m == message)
    }

    pub fn last_question(&self) -> Option<(String, Vec<String>)> {
        self.messages.read().iter().rev().find_map(|m| match m {
            Message::QuestionBegins { text, options, .. } => Some((text.clone(), options.clone())),
            _ => None,
        })
    }

    pub fn prompts(&self) -> Vec<Message> {
        self.prompts.read().clone()
    }

    pub fn controls(&self) -> Option<Controls> {
        *self.controls.read()
    }

    pub fn answer_confirmations(&self, answer: bool) {
        *self.confirmation.write() = answer;
    }
}

impl GameOutput for MockGameOutput {
    fn say(&mut self, message: &Message) {
        self.messages.write().push(message.clone());
    }

    fn confirm(&mut self, message: &Message) -> bool {
        self.prompts.write().push(message.clone());
        *self.confirmation.read()
    }

    fn update_controls(&mut self, controls: &Controls) {
        *self.controls.write() = Some(*controls);
    }
}
