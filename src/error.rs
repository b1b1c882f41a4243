//! Error types for the Reversi crate
//!
//! The game core reports illegal moves through `bool` results; these errors
//! belong to the layer around it (configuration, parsing input, output).

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Pos;

/// Main error type for the Reversi crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("invalid configuration file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid position '{input}' (expected 'row,col' with both in 0..8)")]
    InvalidPosition { input: String },

    #[error("illegal move at {pos}")]
    IllegalMove { pos: Pos },
}

/// Result type alias for Reversi operations
pub type Result<T> = std::result::Result<T, Error>;
