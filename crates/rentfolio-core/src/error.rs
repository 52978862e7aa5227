use thiserror::Error;

#[derive(Debug, Error)]
pub enum RentfolioError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RentfolioError {
    fn from(e: serde_json::Error) -> Self {
        RentfolioError::SerializationError(e.to_string())
    }
}
