// Módulo de alto nivel para la asignación de temas a eventos.
// Declarar submódulos (archivos en la carpeta `src/algorithm`)
pub mod ledger;
pub mod profile;
pub mod report;
pub mod search;

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use tracing::info;

use crate::error::TopicError;
use crate::models::{EventTopicProfile, ScheduledEvent, SearchStats, TopicAssignment};

// Reexportar solo la API pública que queremos exponer desde aquí
pub use profile::build_event_profiles;
pub use report::{TopicRecord, apply_assignment, log_assignment_scores, score_trace_lines};
pub use search::{Objective, choose_best_assignment};

/// Resultado completo de una corrida: perfiles (para reportes), asignación y contadores.
#[derive(Debug, Clone)]
pub struct TopicOutcome<A: Eq + Hash> {
    pub profiles: Vec<EventTopicProfile<A>>,
    pub assignment: TopicAssignment,
    pub stats: SearchStats,
}

/// Elige un tema por evento maximizando los votos de los asistentes, sin
/// repetir tema entre eventos que comparten asistentes.
pub fn assign_topics<A: Eq + Hash + Clone>(
    events: &[ScheduledEvent<A>],
    votes: &HashMap<A, HashSet<String>>,
    topics: &[String],
) -> Result<TopicOutcome<A>, TopicError> {
    // 1) Puntajes y candidatos por evento
    let profiles = build_event_profiles(events, votes, topics)?;

    // 2) Búsqueda de la mejor asignación
    let (assignment, stats) = choose_best_assignment(&profiles)?;

    // 3) Traza de los puntajes que llevaron a la asignación
    log_assignment_scores(&profiles, &assignment);
    info!(
        events = assignment.len(),
        total_score = assignment.total_score,
        min_score = assignment.min_score,
        "topics assigned"
    );

    Ok(TopicOutcome { profiles, assignment, stats })
}
