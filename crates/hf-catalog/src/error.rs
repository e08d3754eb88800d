use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to marshal JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("Unsupported output format: {0} (use 'table' or 'json')")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
