// Formateo del resultado: aplica el tema elegido a los registros de eventos
// y deja una traza determinista con los puntajes.
use std::hash::Hash;

use serde_json::{Value, json};
use tracing::debug;

use crate::models::{EventTopicProfile, TopicAssignment, TopicScore};

/// Registro de evento al que se le puede escribir el tema asignado.
pub trait TopicRecord {
    fn set_topic(&mut self, topic: &str, topic_scores: &[TopicScore]);
}

/// Objeto de evento de `results.json` (`topic` + `topic_scores`).
impl TopicRecord for Value {
    fn set_topic(&mut self, topic: &str, topic_scores: &[TopicScore]) {
        if let Some(obj) = self.as_object_mut() {
            obj.insert("topic".to_string(), json!(topic));
            obj.insert("topic_scores".to_string(), json!(topic_scores));
        }
    }
}

/// Una línea por evento: tema elegido, su puntaje y el desglose completo.
pub fn score_trace_lines<A: Eq + Hash>(
    profiles: &[EventTopicProfile<A>],
    assignment: &TopicAssignment,
) -> Vec<String> {
    profiles
        .iter()
        .enumerate()
        .map(|(idx, profile)| {
            let assigned = assignment.topics.get(idx).map(String::as_str).unwrap_or("");
            let details = profile
                .score_summary
                .iter()
                .map(|c| format!("{}: {}", c.topic, c.score))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "event {} -> {} ({}): {}",
                profile.event_id,
                assigned,
                profile.score_of(assigned),
                details
            )
        })
        .collect()
}

pub fn log_assignment_scores<A: Eq + Hash>(profiles: &[EventTopicProfile<A>], assignment: &TopicAssignment) {
    for line in score_trace_lines(profiles, assignment) {
        debug!("topic assignment scores for {}", line);
    }
}

/// Escribe tema y desglose en cada registro. `records[i]` corresponde al
/// evento `i` de la corrida; los ids no se usan porque pueden repetirse.
/// Registros sobrantes no se tocan. Devuelve cuántos se actualizaron.
pub fn apply_assignment<A: Eq + Hash, R: TopicRecord>(
    records: &mut [R],
    profiles: &[EventTopicProfile<A>],
    assignment: &TopicAssignment,
) -> usize {
    let mut updated = 0;
    for ((record, profile), topic) in records.iter_mut().zip(profiles).zip(&assignment.topics) {
        record.set_topic(topic, &profile.score_summary);
        updated += 1;
    }
    updated
}
