use std::path::PathBuf;

use crate::game::{Coord, Player};

/// Errors from resolving a raw move token against the current position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("malformed move token {0:?}")]
    Format(String),

    #[error("illegal move {0}")]
    Illegal(Coord),
}

/// Errors that can occur while obtaining a move from a move source.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("input stream closed before a move was entered")]
    InputClosed,

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no legal move available for {0}")]
    NoLegalMove(Player),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
