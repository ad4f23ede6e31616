use std::path::PathBuf;

/// Errors raised while loading the address hierarchy source file.
///
/// None of these fail a request: the store logs them and serves an empty hierarchy.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("address hierarchy file does not exist: {}", .0.display())]
    SourceUnavailable(PathBuf),
    #[error("failed to read address hierarchy file {path}: {source}", path = path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed address hierarchy file {path}: {source}", path = path.display())]
    MalformedSource {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },
}

pub type AddressResult<T> = std::result::Result<T, AddressError>;

/// Errors raised by person address sources.
#[derive(Debug, thiserror::Error)]
pub enum PersonError {
    #[error("failed to read person address file {path}: {source}", path = path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to deserialize person addresses: {0}")]
    Deserialization(serde_json::Error),
}

pub type PersonResult<T> = std::result::Result<T, PersonError>;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    #[error("age cannot be empty")]
    Empty,
    #[error("invalid age number: {0}")]
    InvalidNumber(String),
    #[error("unknown age unit '{0}' (expected y, m, w or d)")]
    UnknownUnit(char),
    #[error("age out of range: {0}")]
    OutOfRange(String),
}

pub type AgeResult<T> = std::result::Result<T, AgeError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
