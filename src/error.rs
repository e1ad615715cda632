use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which kind of record a count mismatch refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Street,
    Route,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Street => write!(f, "street"),
            RecordKind::Route => write!(f, "route"),
        }
    }
}

/// Everything that can go wrong while turning one input file into a schedule file.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("input is empty, expected a header line")]
    EmptyInput,
    #[error("malformed header {0:?}, expected five integers")]
    MalformedHeader(String),
    /// `line` is 1-based.
    #[error("malformed street record on line {line}: {reason}")]
    MalformedStreet { line: usize, reason: String },
    #[error("malformed route record on line {line}: {reason}")]
    MalformedRoute { line: usize, reason: String },
    #[error("header declares {declared} {kind} records but {found} were found")]
    CountMismatch {
        kind: RecordKind,
        declared: usize,
        found: usize,
    },
    /// A schedule file that does not follow the submission format.
    #[error("malformed schedule file on line {line}: {reason}")]
    MalformedOutput { line: usize, reason: String },
    /// Two inputs of one batch map to the same output file.
    #[error("output {} is already written by {}", .output.display(), .first.display())]
    OutputCollision { output: PathBuf, first: PathBuf },
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("run report error: {0}")]
    Report(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScheduleError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScheduleError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failing_record() {
        let err = ScheduleError::CountMismatch {
            kind: RecordKind::Route,
            declared: 2,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "header declares 2 route records but 3 were found"
        );

        let err = ScheduleError::OutputCollision {
            output: PathBuf::from("out/a_out.txt"),
            first: PathBuf::from("x/a.txt"),
        };
        assert_eq!(
            err.to_string(),
            "output out/a_out.txt is already written by x/a.txt"
        );
    }

    #[test]
    fn test_io_error_keeps_its_source() {
        use std::error::Error as _;
        let err = ScheduleError::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().starts_with("I/O error on missing.txt"));
        assert!(err.source().is_some());
    }
}
