use std::fmt;
use std::path::PathBuf;

/// The file could not be parsed as JavaScript. Linting is skipped for the
/// whole file; other files are unaffected.
#[derive(Debug)]
pub struct ParseError {
    pub filename: PathBuf,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to parse `{}`: the file contains syntax errors",
            self.filename.display()
        )
    }
}

impl std::error::Error for ParseError {}
