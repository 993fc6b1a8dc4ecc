//! Error taxonomy for the viewer
//!
//! Every failure in this program is fatal at the point it is detected; the
//! variants exist so the binary can print a useful message and pick the right
//! exit code. Degenerate camera math (zero-length vectors) is deliberately
//! not represented here: the camera controller guards it and skips the frame.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("missing .XYZ file\nusage:\n    blockview path/to/file.XYZ")]
    MissingArgument,

    #[error("input file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("input path is a directory, not a file: {0}")]
    NotAFile(PathBuf),

    #[error("input file must have the .XYZ extension: {0}")]
    WrongExtension(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing or invalid block count: {0:?}")]
    MalformedCount(String),

    #[error("invalid coordinate value: {0:?}")]
    MalformedCoordinate(String),

    #[error("file ended after {found} of {expected} coordinate triples")]
    UnexpectedEof { expected: usize, found: usize },

    #[error("initialization failed: {0}")]
    Init(String),
}

impl ViewerError {
    /// Process exit code for this error.
    ///
    /// `-1` for windowing/GPU initialization failures, `-2` for everything
    /// the user handed us (missing argument, bad input file).
    pub fn exit_code(&self) -> i32 {
        match self {
            ViewerError::Init(_) => -1,
            _ => -2,
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_cli_contract() {
        assert_eq!(ViewerError::MissingArgument.exit_code(), -2);
        assert_eq!(ViewerError::FileNotFound(PathBuf::from("a.XYZ")).exit_code(), -2);
        assert_eq!(ViewerError::MalformedCount("x".into()).exit_code(), -2);
        assert_eq!(ViewerError::Init("no adapter".into()).exit_code(), -1);
    }
}
