use serde::Deserialize;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Result, StoreError};


#[derive(Clone, Debug, Deserialize, Hash, PartialEq, Eq)]
pub struct ScoreRecord {
    pub player_name: String,
    pub score: u32,
}

impl ScoreRecord {
    pub fn new(player_name: &str, score: u32) -> Self {
        ScoreRecord {
            player_name: player_name.to_owned(),
            score,
        }
    }
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.player_name, self.score)
    }
}

#[derive(Clone, Debug)]
pub struct ScoreStore {
    source: PathBuf,
}

impl ScoreStore {
    pub fn new<P: AsRef<Path>>(source: P) -> Self {
        ScoreStore {
            source: source.as_ref().to_path_buf(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn append(&self, record: &ScoreRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.source)?;
        writeln!(file, "{}", record)?;
        file.flush()?;
        info!("Appended score `{}` to {:?}", record, self.source);
        Ok(())
    }

    /// Removes every line equal to `name;score` (ignoring surrounding whitespace)
    /// and returns how many were removed. Lines are compared as raw bytes, so
    /// lines in other encodings survive untouched. The source is only replaced
    /// once the rewritten copy is complete; with nothing to remove it is left as is.
    pub fn delete(&self, record: &ScoreRecord) -> Result<usize> {
        let target = record.to_string();
        let contents = match fs::read(&self.source) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(target));
            }
            Err(e) => return Err(e.into()),
        };

        let mut rewrite = NamedTempFile::new_in(self.parent_dir())?;
        let mut removed = 0;
        {
            let mut writer = BufWriter::new(rewrite.as_file_mut());
            for line in split_lines(&contents) {
                if trim(line) == trim(target.as_bytes()) {
                    removed += 1;
                } else {
                    writer.write_all(line)?;
                    writer.write_all(b"\n")?;
                }
            }
            writer.flush()?;
        }

        if removed == 0 {
            return Err(StoreError::NotFound(target));
        }

        replace(rewrite, &self.source)?;
        info!("Deleted {} line(s) matching `{}`", removed, target);
        Ok(removed)
    }

    /// Every well-formed record in file order. A missing source has no records.
    pub fn records(&self) -> Result<Vec<ScoreRecord>> {
        let file = match File::open(&self.source) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut records = Vec::new();
        for record in csv_reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    debug!("Skipping unreadable score line: {}", e);
                    continue;
                }
            };
            match record.deserialize::<ScoreRecord>(None) {
                Ok(score) if record.len() == 2 => records.push(score),
                _ => debug!("Skipping malformed score line: {:?}", record),
            }
        }
        Ok(records)
    }

    fn parent_dir(&self) -> &Path {
        match self.source.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

/// Swaps `rewrite` in for `target`. On failure `target` is left as it was.
fn replace(rewrite: NamedTempFile, target: &Path) -> Result<()> {
    rewrite.as_file().sync_all()?;
    let permissions = fs::metadata(target)?.permissions();
    fs::set_permissions(rewrite.path(), permissions)?;
    rewrite
        .persist(target)
        .map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}

/// Lines ended by `\n`, `\r\n` or a lone `\r`, without their terminators.
fn split_lines(contents: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < contents.len() {
        match contents[i] {
            b'\n' => {
                lines.push(&contents[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&contents[start..i]);
                if contents.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => (),
        }
        i += 1;
    }
    if start < contents.len() {
        lines.push(&contents[start..]);
    }
    lines
}

/// Strips spaces and control bytes from both ends.
fn trim(line: &[u8]) -> &[u8] {
    let start = line.iter().position(|b| *b > b' ').unwrap_or(line.len());
    let end = line.iter().rposition(|b| *b > b' ').map_or(start, |i| i + 1);
    &line[start..end]
}
