pub mod handlers;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::algorithm::{TopicRecord, apply_assignment, assign_topics};
use crate::error::TopicError;
use crate::models::{ScheduledEvent, TopicScore};

/// Parámetros de entrada para POST /topics/assign
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "topics": ["Topic A", "Topic C"],
///   "events": [
///     {"id": 1, "attendees": ["p1", "p2"], "alternates": ["p9"]},
///     {"id": 2, "attendees": ["p2", "p3"]}
///   ],
///   "votes": {
///     "p1": ["Topic A"],
///     "p2": ["Topic A"],
///     "p3": ["Topic A", "Topic C"]
///   }
/// }
/// ```
///
/// # Campos:
/// - `topics`: lista canónica de temas del periodo (ya normalizada)
/// - `events`: eventos agendados; sólo `attendees` cuenta para el puntaje,
///   `alternates` se acepta pero se ignora
/// - `votes`: temas votados por cada asistente (puede faltar o venir vacío)
#[derive(Debug, Serialize, Deserialize)]
pub struct AssignTopicsRequest {
    pub topics: Vec<String>,
    pub events: Vec<EventInput>,
    #[serde(default)]
    pub votes: HashMap<String, Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventInput {
    pub id: i64,
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub alternates: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignedEvent {
    pub id: i64,
    pub topic: Option<String>,
    pub topic_scores: Vec<TopicScore>,
}

impl TopicRecord for AssignedEvent {
    fn set_topic(&mut self, topic: &str, topic_scores: &[TopicScore]) {
        self.topic = Some(topic.to_string());
        self.topic_scores = topic_scores.to_vec();
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignTopicsResponse {
    pub events: Vec<AssignedEvent>,
    pub total_score: u32,
    pub min_score: u32,
}

pub fn parse_json_input(json_str: &str) -> Result<AssignTopicsRequest, serde_json::Error> {
    serde_json::from_str::<AssignTopicsRequest>(json_str)
}

/// Corre el motor sobre un request ya parseado.
pub fn run_assign_request(request: &AssignTopicsRequest) -> Result<AssignTopicsResponse, TopicError> {
    let events: Vec<ScheduledEvent<String>> = request
        .events
        .iter()
        .map(|e| ScheduledEvent::new(e.id, e.attendees.iter().cloned()))
        .collect();
    let votes: HashMap<String, HashSet<String>> = request
        .votes
        .iter()
        .map(|(who, topics)| (who.clone(), topics.iter().cloned().collect()))
        .collect();

    let outcome = assign_topics(&events, &votes, &request.topics)?;

    let mut assigned: Vec<AssignedEvent> = request
        .events
        .iter()
        .map(|e| AssignedEvent { id: e.id, topic: None, topic_scores: Vec::new() })
        .collect();
    apply_assignment(&mut assigned, &outcome.profiles, &outcome.assignment);

    Ok(AssignTopicsResponse {
        events: assigned,
        total_score: outcome.assignment.total_score,
        min_score: outcome.assignment.min_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_defaults() {
        let req = parse_json_input(r#"{"topics": ["A"], "events": [{"id": 4}]}"#).unwrap();
        assert!(req.votes.is_empty());
        assert!(req.events[0].attendees.is_empty());
        assert!(req.events[0].alternates.is_empty());
    }

    #[test]
    fn test_run_assign_request_ignores_alternates() {
        let req = parse_json_input(
            r#"{
                "topics": ["Topic A", "Topic B"],
                "events": [{"id": 1, "attendees": ["alice"], "alternates": ["bob"]}],
                "votes": {"alice": ["Write In"], "bob": ["Topic B"]}
            }"#,
        )
        .unwrap();
        let resp = run_assign_request(&req).unwrap();
        assert_eq!(resp.events[0].topic.as_deref(), Some("Topic A"));
        assert_eq!(resp.total_score, 0);
    }
}
