use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AocError {
    #[error("cannot read puzzle input {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("patrol ran for more than {cap} steps without exiting or repeating a state")]
    SimulationInvariantViolation { cap: usize },

    #[error(transparent)]
    Regex(#[from] regex::Error),
}

impl AocError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        AocError::MalformedInput { line, reason: reason.into() }
    }
}
