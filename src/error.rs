use thiserror::Error;

/// Failures while gathering the play set for a profile. Any of these aborts
/// the evaluation before aggregation begins.
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("Request to the osu! API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Database query failed: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("User '{0}' was not found")]
    UserNotFound(String),

    #[error("Malformed record: field '{field}' has value '{value}'")]
    MalformedRecord { field: &'static str, value: String },

    #[error("Beatmap cache I/O failed: {0}")]
    Cache(#[from] std::io::Error),

    #[error("Beatmap {0} could not be downloaded")]
    BeatmapUnavailable(u32),

    #[error("Ingestion task failed: {0}")]
    Join(String)
}

impl IngestionError {
    pub fn malformed(field: &'static str, value: impl ToString) -> Self {
        IngestionError::MalformedRecord {
            field,
            value: value.to_string()
        }
    }
}

#[derive(Debug, Error)]
#[error("Failed to evaluate play on beatmap {beatmap_id}: {reason}")]
pub struct PlayEvaluationError {
    pub beatmap_id: u32,
    pub reason: String
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Ingestion(#[from] IngestionError),

    #[error(transparent)]
    PlayEvaluation(#[from] PlayEvaluationError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error)
}
