//! Configuration for the demo harness and engine

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{INITIAL_DISKS, TOTAL_CELLS};
use crate::engine::{DEFAULT_DEPTH, MAX_SEARCH_DEPTH};
use crate::error::{Error, Result};

/// Settings shared by the CLI commands.
///
/// Loaded from JSON; missing fields take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Plies searched by the AI
    pub search_depth: u8,

    /// Disks on the board before "display all actions" lists the moves
    pub display_all_actions_disks: usize,

    /// Moves printed one by one by the methodical demo
    pub methodical_shown_moves: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_DEPTH,
            display_all_actions_disks: 7,
            methodical_shown_moves: 5,
        }
    }
}

impl GameConfig {
    /// Read and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.search_depth == 0 || self.search_depth > MAX_SEARCH_DEPTH {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "search_depth must be between 1 and {MAX_SEARCH_DEPTH}, got {}",
                    self.search_depth
                ),
            });
        }
        if !(INITIAL_DISKS..=TOTAL_CELLS).contains(&self.display_all_actions_disks) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "display_all_actions_disks must be between {INITIAL_DISKS} and {TOTAL_CELLS}, got {}",
                    self.display_all_actions_disks
                ),
            });
        }
        Ok(())
    }
}
