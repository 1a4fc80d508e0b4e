//! High score persistence
//!
//! The file holds a single decimal integer and nothing else.

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored high score
    ///
    /// A missing, unreadable or malformed file counts as a high score of 0.
    pub fn load(&self) -> u32 {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high score at {}, starting fresh", self.path.display());
                return 0;
            }
            Err(err) => {
                log::warn!("Could not read high score {}: {}", self.path.display(), err);
                return 0;
            }
        };

        match contents.trim().parse::<u32>() {
            Ok(score) => {
                log::info!("Loaded high score {}", score);
                score
            }
            Err(err) => {
                log::warn!(
                    "Ignoring malformed high score {:?} in {}: {}",
                    contents.trim(),
                    self.path.display(),
                    err
                );
                0
            }
        }
    }

    /// Overwrite the file with `score`
    pub fn save(&self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())
            .wrap_err_with(|| format!("failed to write high score to {}", self.path.display()))?;
        log::info!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}
