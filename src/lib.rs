// Biblioteca raíz del crate `topicshift`.
// Reexporta los módulos principales: el motor de asignación de temas
// (`algorithm`), el pipeline sobre la carpeta de un periodo (`period`) y la
// API HTTP (`api_json` + `server`).
pub mod algorithm;
pub mod api_json;
pub mod config;
pub mod error;
pub mod models;
pub mod period;
pub mod server;

pub use algorithm::{TopicOutcome, assign_topics};
pub use error::{PeriodError, TopicError};
pub use period::{PeriodOutcome, assign_topics_for_period};

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
