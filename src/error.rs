use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClosestError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The candidate sequence handed to the finder was empty.
    #[error("Configuration error: reference set is empty")]
    EmptyReferenceSet,

    #[error("Unknown {kind}: {value}, possible options are: {options}")]
    UnknownOption {
        kind: &'static str,
        value: String,
        options: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ClosestError>;
