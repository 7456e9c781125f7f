use miette::Diagnostic;
use thiserror::Error;

/// Main error type for assetsuite operations
#[derive(Error, Diagnostic, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    #[diagnostic(code(assetsuite::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(assetsuite::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Malformed document: {message}")]
    #[diagnostic(
        code(assetsuite::document),
        help("Expected a JSON object with an `appearances` array (or an item list for legacy files)")
    )]
    MalformedDocument { message: String },

    #[error("Unsupported sprite sheet: magic {found:#010x} (expected {expected:#010x})")]
    #[diagnostic(
        code(assetsuite::sheet::format),
        help("Only SPSH sprite sheets can be read")
    )]
    UnsupportedFormat { found: u32, expected: u32 },

    #[error("Corrupt sprite sheet payload: {message}")]
    #[diagnostic(code(assetsuite::sheet::payload))]
    CorruptPayload { message: String },

    #[error("Cannot write a sprite sheet without sprites")]
    #[diagnostic(code(assetsuite::sheet::empty))]
    EmptyInput,

    #[error("Sprite at position {index} is {found_width}x{found_height}, but the sheet is {width}x{height}")]
    #[diagnostic(
        code(assetsuite::sheet::dimensions),
        help("Every sprite in a sheet must share the dimensions of the first sprite")
    )]
    DimensionMismatch {
        index: usize,
        width: u32,
        height: u32,
        found_width: u32,
        found_height: u32,
    },

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(assetsuite::precondition))]
    Precondition { message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(assetsuite::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(assetsuite::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl AssetError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        AssetError::MalformedDocument {
            message: message.into(),
        }
    }

    pub(crate) fn corrupt(message: impl Into<String>) -> Self {
        AssetError::CorruptPayload {
            message: message.into(),
        }
    }

    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        AssetError::Precondition {
            message: message.into(),
        }
    }

    pub(crate) fn io_at(path: &std::path::Path, action: &str, err: impl std::fmt::Display) -> Self {
        AssetError::Io {
            path: path.to_path_buf(),
            message: format!("{}: {}", action, err),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;
