use std::path::PathBuf;
use thiserror::Error;

use crate::store::TextBoxId;

/// Errors raised by the annotation stores and the edit mode controller.
///
/// None of these are ever shown to the user; callers log them and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// There is no completed stroke or text box left to remove
    #[error("nothing to undo")]
    NothingToUndo,

    /// Undo was requested in a mode that has no history (the idle mode)
    #[error("undo is not available in {0} mode")]
    UndoUnavailable(&'static str),

    /// The requested mode transition is not part of the state machine
    #[error("cannot transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    /// Input arrived for a tool that is not active, e.g. a text drag
    /// after leaving text mode
    #[error("{action} is not accepted in {mode} mode")]
    WrongMode {
        action: &'static str,
        mode: &'static str,
    },

    /// The text box was removed (by undo) before this input arrived
    #[error("text box {0} no longer exists")]
    StaleTextBox(TextBoxId),
}

/// Errors that can occur while loading an [`EditorConfig`](crate::EditorConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur while loading the base photo
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("failed to read photo {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode photo: {0}")]
    Decode(#[from] image::ImageError),
}

pub type EditorResult<T> = Result<T, EditorError>;
