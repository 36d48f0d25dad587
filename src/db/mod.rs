pub mod file;
pub mod format;

pub use file::{load, save};

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Corrupt database: {0}")]
    Corrupt(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DbResult<T> = Result<T, DbError>;
