// Tipos de error del crate.
use std::path::PathBuf;

/// Errores del motor de asignación de temas.
#[derive(Debug, thiserror::Error)]
pub enum TopicError {
    /// El evento no tiene ningún tema candidato (lista canónica vacía).
    #[error("no candidates available for topic assignment (event {event_id})")]
    NoCandidates { event_id: i64 },

    /// La búsqueda terminó sin cubrir todos los eventos.
    #[error("could not assign topics to all events ({assigned} of {expected})")]
    IncompleteAssignment { assigned: usize, expected: usize },
}

/// Errores del pipeline que lee y escribe la carpeta de un periodo.
#[derive(Debug, thiserror::Error)]
pub enum PeriodError {
    #[error("{} not found", .0.display())]
    MissingFile(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("period_config.json {0}")]
    InvalidConfig(String),

    #[error("topics list contains a blank topic.")]
    BlankTopic,

    #[error("topics list contains duplicate topics after normalization: '{first}' and '{second}'")]
    DuplicateTopic { first: String, second: String },

    #[error(transparent)]
    Topic(#[from] TopicError),
}
