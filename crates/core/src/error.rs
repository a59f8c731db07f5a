#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Malformed event: missing 'detail'")]
    MissingDetail,

    #[error("Malformed event: 'detail' must be an object")]
    MalformedDetail,

    #[error("Invalid heart rate reading: {0}")]
    InvalidReading(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
