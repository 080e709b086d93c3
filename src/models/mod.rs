// Estructuras de datos principales del motor de temas
use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Evento ya agendado con sus asistentes confirmados (sin alternates).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEvent<A: Eq + Hash> {
    pub id: i64,
    pub attendees: HashSet<A>,
}

impl<A: Eq + Hash> ScheduledEvent<A> {
    pub fn new<I: IntoIterator<Item = A>>(id: i64, attendees: I) -> Self {
        ScheduledEvent { id, attendees: attendees.into_iter().collect() }
    }
}

/// Par (tema, puntaje). Se serializa como `{"topic": .., "score": ..}`,
/// que es la forma que espera `results.json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopicScore {
    pub topic: String,
    pub score: u32,
}

impl TopicScore {
    pub fn new(topic: impl Into<String>, score: u32) -> Self {
        TopicScore { topic: topic.into(), score }
    }
}

/// Perfil inmutable de un evento para una corrida de asignación.
#[derive(Debug, Clone)]
pub struct EventTopicProfile<A: Eq + Hash> {
    pub event_id: i64,
    pub attendee_ids: HashSet<A>,
    /// Orden en que la búsqueda prueba temas: positivos primero, luego fallbacks.
    pub candidates: Vec<TopicScore>,
    /// Todos los temas canónicos, (score desc, nombre asc). Solo para reportes.
    pub score_summary: Vec<TopicScore>,
}

impl<A: Eq + Hash> EventTopicProfile<A> {
    pub fn max_score(&self) -> u32 {
        self.candidates.iter().map(|c| c.score).max().unwrap_or(0)
    }

    /// Puntaje del tema dentro del resumen (0 si no aparece).
    pub fn score_of(&self, topic: &str) -> u32 {
        self.score_summary
            .iter()
            .find(|c| c.topic == topic)
            .map(|c| c.score)
            .unwrap_or(0)
    }
}

/// Asignación ganadora: un tema por evento, en el orden original de entrada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicAssignment {
    pub event_ids: Vec<i64>,
    pub topics: Vec<String>,
    pub total_score: u32,
    pub min_score: u32,
}

impl TopicAssignment {
    pub fn empty() -> Self {
        TopicAssignment { event_ids: Vec::new(), topics: Vec::new(), total_score: 0, min_score: 0 }
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Tema asignado al evento con ese id (el primero si hubiera ids repetidos).
    pub fn topic_for(&self, event_id: i64) -> Option<&str> {
        self.event_ids
            .iter()
            .position(|id| *id == event_id)
            .map(|idx| self.topics[idx].as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.event_ids.iter().copied().zip(self.topics.iter().map(String::as_str))
    }
}

/// Contadores de la búsqueda, útiles para el log de depuración.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub nodes: u64,
    pub pruned: u64,
    pub leaves: u64,
}
