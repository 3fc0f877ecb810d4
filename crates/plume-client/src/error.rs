use plume_protocol::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(ErrorCode),

    #[error("Metadata lookup failed: {0}")]
    Metadata(String),

    #[error("Response missing the expected topic/partition block")]
    IncompleteResponse,

    #[error("Partitioner returned an index outside the partition list")]
    InvalidPartition,
}

pub type Result<T> = std::result::Result<T, Error>;
