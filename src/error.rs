use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// ConvertError – everything that can stop a conversion
// ---------------------------------------------------------------------------

/// Errors raised while pairing, decoding or writing a spectrum.
///
/// The first group is detected before any file content is read.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("no input or output file specified")]
    FileNotSpecified,

    #[error("input file doesn't exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("parameter file doesn't exist: {}", .0.display())]
    ParamNotFound(PathBuf),

    #[error("not a {expected} file: {}", path.display())]
    WrongExtension { path: PathBuf, expected: String },

    #[error("no {0} folder specified")]
    FolderNotSpecified(&'static str),

    #[error("input folder doesn't exist: {}", .0.display())]
    InputFolderMissing(PathBuf),

    /// A recognised label whose value is not the expected number type.
    #[error("line {line}: cannot parse {label} value '{value}'")]
    Parse {
        label: &'static str,
        value: String,
        line: usize,
    },

    /// A required label never appeared in the parameter file.
    #[error("parameter {0} is missing from the parameter file")]
    UndefinedScalar(&'static str),

    #[error("point count is zero, sampling interval is undefined")]
    DivideByZero,

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write error for '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConvertError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is a usage/validation failure rather than a data failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ConvertError::FileNotSpecified
                | ConvertError::InputNotFound(_)
                | ConvertError::ParamNotFound(_)
                | ConvertError::WrongExtension { .. }
                | ConvertError::FolderNotSpecified(_)
                | ConvertError::InputFolderMissing(_)
        )
    }

    /// Process exit status for this error: 2 for validation, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_validation() {
            2
        } else {
            1
        }
    }
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
