use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = SpellError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SpellError {
    /// The dictionary could not be opened or read. Fatal for the whole run.
    #[error("cannot read dictionary {}: {source}", .path.display())]
    DictionaryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dictionary exceeds capacity of {limit} words")]
    DictionaryCapacityExceeded { limit: usize },

    #[error("failed to build dictionary index: {0}")]
    DictionaryIndex(#[from] fst::Error),

    /// A single input could not be opened or read. The run continues.
    #[error("cannot read input {name}: {source}")]
    InputUnreadable {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
