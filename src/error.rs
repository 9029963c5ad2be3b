use miette::Diagnostic;
use thiserror::Error;

use crate::types::{Point, Size};

/// Main error type for shadowpaste operations
#[derive(Error, Diagnostic, Debug)]
pub enum PasteError {
    #[error("IO error: {0}")]
    #[diagnostic(code(shadowpaste::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(shadowpaste::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to decode {path}: {message}")]
    #[diagnostic(code(shadowpaste::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to write {path}: {message}")]
    #[diagnostic(code(shadowpaste::encode))]
    Encode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Overlay of {overlay} at {position} does not fit inside the {base} base image")]
    #[diagnostic(
        code(shadowpaste::bounds),
        help("Pass an explicit in-bounds position with --at X,Y")
    )]
    OutOfBounds {
        position: Point,
        overlay: Size,
        base: Size,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(shadowpaste::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PasteError>;
