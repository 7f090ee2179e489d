use thiserror::Error as ThisError;
#[derive(ThisError, Debug)]
pub enum ScraperError {
    #[error("Selector error: {0}")]
    SelectorError(String),
    #[error("Fetch error: {0}")]
    FetchError(#[from] reqwest::Error),
    #[error("Request failed with status: {0}")]
    StatusError(reqwest::StatusCode),
    #[error("Json error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("SqliteConnectionError: {0}")]
    SqliteConnectionError(#[from] rusqlite::Error),
}
