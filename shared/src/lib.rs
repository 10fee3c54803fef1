// shared/src/lib.rs

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("snapshot schema version {found}, expected {expected}")]
    SchemaVersion { found: u16, expected: u16 },
    #[error("store: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
pub mod ttl;

pub use ttl::TtlSecs;
