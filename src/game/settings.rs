use std::env;
use std::path::PathBuf;

pub const QUESTIONS_PATH_VAR: &str = "KNOWLEDGE_QUESTIONS";
pub const SCORES_PATH_VAR: &str = "KNOWLEDGE_SCORES";

#[derive(Clone, Debug)]
pub struct Settings {
    pub questions_path: PathBuf,
    pub scores_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            questions_path: PathBuf::from("questions.txt"),
            scores_path: PathBuf::from("scores.txt"),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        let defaults = Settings::default();
        Settings {
            questions_path: env::var_os(QUESTIONS_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.questions_path),
            scores_path: env::var_os(SCORES_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.scores_path),
        }
    }
}
