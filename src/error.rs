use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or reading the Pokémon store
#[derive(Error, Debug)]
pub enum PickerError {
    /// Failed to fetch the Pokémon list
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The fetched document does not contain a usable table
    #[error("Failed to parse Pokémon table: {0}")]
    ParseError(String),

    /// Reading or writing the store failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// The store file could not be opened for reading
    #[error("Store {} does not exist", .0.display())]
    StoreNotFound(PathBuf),

    /// The store file exists but holds no records
    #[error("Store {} is empty", .0.display())]
    EmptyStore(PathBuf),

    /// A persisted line did not split into exactly five fields
    #[error("Malformed store line {line}: expected 5 fields, found {fields}")]
    MalformedLine { line: usize, fields: usize },

    /// A record field would break the line format of the store
    #[error("Record #{id} contains the store delimiter {delimiter:?} or a line break")]
    DelimiterInField { id: String, delimiter: char },
}
