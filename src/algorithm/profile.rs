// Construcción de perfiles por evento: puntajes por tema y lista de candidatos.
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::TopicError;
use crate::models::{EventTopicProfile, ScheduledEvent, TopicScore};

// score desc, luego nombre asc
fn by_score_then_name(a: &TopicScore, b: &TopicScore) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.topic.cmp(&b.topic))
}

/// Cuenta, para cada tema canónico, cuántos asistentes del evento lo votaron.
/// Votos a temas fuera de la lista canónica se ignoran.
pub fn score_topics<A: Eq + Hash>(
    attendees: &HashSet<A>,
    votes: &HashMap<A, HashSet<String>>,
    topics: &[String],
) -> Vec<TopicScore> {
    topics
        .iter()
        .map(|topic| {
            let score = attendees
                .iter()
                .filter(|a| votes.get(*a).is_some_and(|v| v.contains(topic)))
                .count() as u32;
            TopicScore::new(topic.clone(), score)
        })
        .collect()
}

/// Arma los candidatos: temas con puntaje > 0 ordenados (score desc, nombre asc)
/// seguidos del resto de temas canónicos en orden alfabético con puntaje 0.
pub fn build_candidates(scores: &[TopicScore]) -> Vec<TopicScore> {
    let mut positive: Vec<TopicScore> = scores.iter().filter(|s| s.score > 0).cloned().collect();
    positive.sort_by(by_score_then_name);

    let taken: HashSet<&str> = positive.iter().map(|c| c.topic.as_str()).collect();
    let mut fallback: Vec<TopicScore> = scores
        .iter()
        .filter(|s| !taken.contains(s.topic.as_str()))
        .map(|s| TopicScore::new(s.topic.clone(), 0))
        .collect();
    fallback.sort_by(|a, b| a.topic.cmp(&b.topic));

    positive.extend(fallback);
    positive
}

/// Lista canónica sin repetidos, conservando la primera aparición.
pub fn unique_topics(topics: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    topics.iter().filter(|t| seen.insert(t.as_str())).cloned().collect()
}

/// Un perfil por evento, en el mismo orden de entrada. Falla si algún evento
/// queda sin candidatos (solo ocurre con la lista de temas vacía).
pub fn build_event_profiles<A: Eq + Hash + Clone>(
    events: &[ScheduledEvent<A>],
    votes: &HashMap<A, HashSet<String>>,
    topics: &[String],
) -> Result<Vec<EventTopicProfile<A>>, TopicError> {
    let topics = unique_topics(topics);
    let mut profiles = Vec::with_capacity(events.len());
    for event in events {
        let scores = score_topics(&event.attendees, votes, &topics);
        let candidates = build_candidates(&scores);
        if candidates.is_empty() {
            return Err(TopicError::NoCandidates { event_id: event.id });
        }

        let mut score_summary = scores;
        score_summary.sort_by(by_score_then_name);

        profiles.push(EventTopicProfile {
            event_id: event.id,
            attendee_ids: event.attendees.clone(),
            candidates,
            score_summary,
        });
    }
    Ok(profiles)
}
