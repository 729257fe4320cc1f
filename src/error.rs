use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Precondition failures raised by the pattern types
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("a staff adapter needs a caster to wrap, but none was given")]
    MissingCaster,

    #[error("index {index} is out of bounds for a category with {len} children")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("actor '{actor}' cannot be given an absent reaction")]
    MissingReaction { actor: String },

    #[error("child at index {index} is an item, not a category")]
    NotACategory { index: usize },
}

impl PatternError {
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    pub fn missing_reaction(actor: impl Into<String>) -> Self {
        Self::MissingReaction {
            actor: actor.into(),
        }
    }
}

pub type Result<T, E = PatternError> = std::result::Result<T, E>;

// =============================================================================
// Configuration loading failures
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
