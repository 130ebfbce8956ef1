use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("no catalog file found; tried: {0}")]
    NotFound(String),

    #[error("catalog file has no header row")]
    NoHeaders,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
