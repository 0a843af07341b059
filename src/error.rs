use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unsupported language: {input} (expected en or es)")]
    UnsupportedLanguage { input: String },

    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Pet {id} not found")]
    PetNotFound { id: String },

    #[error("{0}")]
    InvalidPet(#[from] RecordError),
}

/// A pet record that violates the data model at the ingestion boundary.
#[derive(Debug, Error, PartialEq)]
pub(crate) enum RecordError {
    #[error("pet {id}: unknown kind \"{kind}\"")]
    UnknownKind { id: String, kind: String },

    #[error("pet {id}: cats must have a positive number_of_lives")]
    MissingLives { id: String },

    #[error("pet {id}: number_of_lives {value} is out of range")]
    LivesOutOfRange { id: String, value: i64 },

    #[error("pet {id}: number_of_lives is only valid for cats")]
    UnexpectedLives { id: String },

    #[error("pet {id}: malformed record: {reason}")]
    Malformed { id: String, reason: String },

    #[error("pet {id}: {field} must be a positive number, got {value}")]
    NonPositive {
        id: String,
        field: &'static str,
        value: f64,
    },
}

impl AppError {
    /// Transport failures and server-side errors are worth another attempt.
    pub(crate) fn is_retryable(&self) -> bool {
        match self {
            AppError::Http { .. } => true,
            AppError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
