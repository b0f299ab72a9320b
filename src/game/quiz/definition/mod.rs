use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::StoreError;

pub mod question;

pub use question::{Question, RawQuestion};


const FIELD_COUNT: usize = 5;

/// Questions read from the source, plus the error that interrupted reading, if any.
#[derive(Debug)]
pub struct LoadedQuestions {
    pub questions: Vec<Question>,
    pub error: Option<StoreError>,
}

#[derive(Clone, Debug)]
pub struct QuestionStore {
    source: PathBuf,
}

impl QuestionStore {
    pub fn new<P: AsRef<Path>>(source: P) -> Self {
        QuestionStore {
            source: source.as_ref().to_path_buf(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn load_all(&self) -> LoadedQuestions {
        match File::open(&self.source) {
            Ok(file) => read_questions(file),
            Err(e) => LoadedQuestions {
                questions: Vec::new(),
                error: Some(e.into()),
            },
        }
    }
}

/// Reads `question;answer;distractor;distractor;distractor` lines in order.
/// Lines of any other shape are skipped. An I/O error stops reading.
pub fn read_questions<R: Read>(reader: R) -> LoadedQuestions {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut questions = Vec::new();
    for record in csv_reader.records() {
        match record {
            Ok(record) => {
                if let Some(question) = parse_record(record) {
                    questions.push(question);
                }
            }
            Err(e) if e.is_io_error() => {
                warn!("Stopped reading questions after {}: {}", questions.len(), e);
                return LoadedQuestions {
                    questions,
                    error: Some(e.into()),
                };
            }
            Err(e) => debug!("Skipping unreadable question line: {}", e),
        }
    }

    LoadedQuestions {
        questions,
        error: None,
    }
}

fn parse_record(mut record: StringRecord) -> Option<Question> {
    // Trailing empty fields do not count
    let mut len = record.len();
    while len > 0 && record.get(len - 1) == Some("") {
        len -= 1;
    }
    record.truncate(len);

    if record.len() != FIELD_COUNT {
        debug!("Skipping question line with {} fields", record.len());
        return None;
    }

    match record.deserialize::<RawQuestion>(None) {
        Ok(raw_question) => Some(raw_question.into()),
        Err(e) => {
            debug!("Skipping malformed question line: {}", e);
            None
        }
    }
}
