//! Error types. None of these are fatal: every caller degrades to a narrower
//! presentation (error card, neutral fill, list instead of map).

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("device id `{0}` appears more than once")]
    DuplicateDevice(String),

    #[error("dataset contains no devices")]
    NoDevices,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid hex colour `{0}`")]
pub struct ColorError(pub String);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP error: {status} {text}")]
    Status { status: u16, text: String },

    #[error("failed to read response: {0}")]
    Body(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("document is not well-formed XML: {0}")]
    Xml(String),

    #[error("document has no <svg> root")]
    NotSvg,

    #[error("document has no identifiable regions")]
    NoRegions,
}
