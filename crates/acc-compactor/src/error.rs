use thiserror::Error;

/// Why an accession cannot take part in a range.
///
/// These never escape [`crate::compact`]; a failed parse only breaks the
/// current run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessionError {
    #[error("Accession has no digit suffix: {accession}")]
    MissingDigits { accession: String },
    #[error("Accession suffix is not numeric: {accession} ({digits})")]
    NonNumeric { accession: String, digits: String },
    #[error("Accession suffix out of range: {accession} ({digits})")]
    Overflow { accession: String, digits: String },
}

#[derive(Error, Debug)]
pub enum CompactError {
    #[error(transparent)]
    Accession(#[from] AccessionError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CompactError>;
