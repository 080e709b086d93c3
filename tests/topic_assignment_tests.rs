use std::collections::{HashMap, HashSet};

use topicshift::algorithm::{Objective, assign_topics};
use topicshift::error::TopicError;
use topicshift::models::ScheduledEvent;

fn topics(names: &str) -> Vec<String> {
    names.split(',').map(|s| s.to_string()).collect()
}

// "A,B" -> {"A", "B"}
fn votes(entries: &[(u32, &str)]) -> HashMap<u32, HashSet<String>> {
    entries
        .iter()
        .map(|(id, ts)| (*id, ts.split(',').map(|t| t.to_string()).collect()))
        .collect()
}

#[test]
fn test_overlapping_events_get_different_topics() {
    let events = vec![ScheduledEvent::new(1, [1u32, 2]), ScheduledEvent::new(2, [2u32, 3])];
    let v = votes(&[(1, "Topic A"), (2, "Topic A"), (3, "Topic A,Topic C")]);

    let outcome = assign_topics(&events, &v, &topics("Topic A,Topic C")).unwrap();
    assert_eq!(outcome.assignment.topic_for(1), Some("Topic A"));
    assert_eq!(outcome.assignment.topic_for(2), Some("Topic C"));
    assert_eq!(outcome.profiles[0].score_of("Topic A"), 2);
    assert_eq!(outcome.profiles[1].score_of("Topic C"), 1);
    assert_eq!(outcome.assignment.total_score, 3);
}

#[test]
fn test_disjoint_events_reuse_topic() {
    let events = vec![ScheduledEvent::new(1, [1u32]), ScheduledEvent::new(2, [2u32])];
    let v = votes(&[(1, "Topic A"), (2, "Topic A")]);

    let outcome = assign_topics(&events, &v, &topics("Topic A")).unwrap();
    assert_eq!(outcome.assignment.topics, topics("Topic A,Topic A"));
    assert_eq!(outcome.assignment.total_score, 2);
    assert_eq!(outcome.assignment.min_score, 1);
}

#[test]
fn test_total_score_beats_fairness() {
    // Eventos 1 y 2 comparten al asistente 5 (que no votó). El evento 3 no
    // comparte a nadie y puede repetir tema.
    // A/B/A suma 4 + 0 + 1 = 5 con mínimo 0; B/A/A suma 1 + 2 + 1 = 4 con
    // mínimo 1. Gana el total aunque la otra opción sea más pareja.
    let events = vec![
        ScheduledEvent::new(1, [1u32, 2, 3, 4, 5]),
        ScheduledEvent::new(2, [5u32, 6, 7]),
        ScheduledEvent::new(3, [8u32]),
    ];
    let v = votes(&[
        (1, "A"),
        (2, "A,B"),
        (3, "A"),
        (4, "A"),
        (6, "A"),
        (7, "A"),
        (8, "A"),
    ]);

    let outcome = assign_topics(&events, &v, &topics("A,B")).unwrap();
    assert_eq!(outcome.assignment.topics, topics("A,B,A"));
    assert_eq!(outcome.assignment.total_score, 5);
    assert_eq!(outcome.assignment.min_score, 0);
}

#[test]
fn test_no_votes_falls_back_to_first_topic() {
    let events = vec![ScheduledEvent::new(1, [1u32])];
    let v = votes(&[(1, "Write In")]);
    let outcome = assign_topics(&events, &v, &topics("Topic B,Topic A")).unwrap();
    assert_eq!(outcome.assignment.topic_for(1), Some("Topic A"));
    assert_eq!(outcome.assignment.total_score, 0);
}

#[test]
fn test_score_tie_picks_alphabetically_first() {
    let events = vec![ScheduledEvent::new(1, [1u32, 2])];
    let v = votes(&[(1, "Topic B"), (2, "Topic A")]);
    let outcome = assign_topics(&events, &v, &topics("Topic B,Topic A,Topic C")).unwrap();
    assert_eq!(outcome.assignment.topic_for(1), Some("Topic A"));

    let summary: Vec<(&str, u32)> = outcome.profiles[0]
        .score_summary
        .iter()
        .map(|s| (s.topic.as_str(), s.score))
        .collect();
    assert_eq!(summary, vec![("Topic A", 1), ("Topic B", 1), ("Topic C", 0)]);
}

#[test]
fn test_alternates_do_not_score() {
    // El llamador sólo pasa asistentes confirmados: el voto del alternate (2) no cuenta.
    let events = vec![ScheduledEvent::new(1, [1u32])];
    let v = votes(&[(1, "Write In"), (2, "Topic B")]);
    let outcome = assign_topics(&events, &v, &topics("Topic A,Topic B")).unwrap();
    assert_eq!(outcome.assignment.topic_for(1), Some("Topic A"));
}

#[test]
fn test_empty_topic_list_fails_fast() {
    let events = vec![ScheduledEvent::new(5, [1u32])];
    let err = assign_topics(&events, &HashMap::new(), &[]).unwrap_err();
    assert!(matches!(err, TopicError::NoCandidates { event_id: 5 }));
}

#[test]
fn test_no_events_yields_empty_assignment() {
    let events: Vec<ScheduledEvent<u32>> = Vec::new();
    let outcome = assign_topics(&events, &HashMap::new(), &topics("A")).unwrap();
    assert!(outcome.assignment.is_empty());
}

#[test]
fn test_string_attendees() {
    let events = vec![
        ScheduledEvent::new(10, ["alice@example.com".to_string(), "bob@example.com".to_string()]),
        ScheduledEvent::new(11, ["bob@example.com".to_string()]),
    ];
    let v: HashMap<String, HashSet<String>> = [
        ("alice@example.com".to_string(), ["X".to_string()].into_iter().collect()),
        ("bob@example.com".to_string(), ["X".to_string(), "Y".to_string()].into_iter().collect()),
    ]
    .into_iter()
    .collect();
    let outcome = assign_topics(&events, &v, &topics("X,Y")).unwrap();
    assert_eq!(outcome.assignment.topics, topics("X,Y"));
}

// --- Comparación contra fuerza bruta en instancias chicas ---

struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

fn brute_force(events: &[ScheduledEvent<u32>], v: &HashMap<u32, HashSet<String>>, t: &[String]) -> Option<Objective> {
    let n = events.len();
    let mut best: Option<Objective> = None;
    let combos = t.len().pow(n as u32);
    for mut code in 0..combos {
        let mut choice = Vec::with_capacity(n);
        for _ in 0..n {
            choice.push(code % t.len());
            code /= t.len();
        }
        let feasible = (0..n).all(|i| {
            (i + 1..n).all(|j| choice[i] != choice[j] || events[i].attendees.is_disjoint(&events[j].attendees))
        });
        if !feasible {
            continue;
        }
        let scores: Vec<u32> = (0..n)
            .map(|i| {
                events[i]
                    .attendees
                    .iter()
                    .filter(|a| v.get(*a).is_some_and(|s| s.contains(&t[choice[i]])))
                    .count() as u32
            })
            .collect();
        let candidate = Objective {
            total: scores.iter().sum(),
            min: scores.iter().copied().min().unwrap_or(0),
            topics: choice.iter().map(|&c| t[c].clone()).collect(),
        };
        if best.as_ref().is_none_or(|b| candidate.beats(b)) {
            best = Some(candidate);
        }
    }
    best
}

#[test]
fn test_matches_brute_force_on_random_instances() {
    let t = topics("Alpha,Beta,Gamma");
    let mut rng = Lcg(42);
    for _ in 0..60 {
        let n_events = 1 + rng.next(4) as usize;
        let events: Vec<ScheduledEvent<u32>> = (0..n_events)
            .map(|i| {
                let size = rng.next(4) as usize;
                let attendees: Vec<u32> = (0..size).map(|_| rng.next(6) as u32).collect();
                ScheduledEvent::new(rng.next(3) as i64 + i as i64, attendees)
            })
            .collect();
        let v: HashMap<u32, HashSet<String>> = (0..6u32)
            .map(|p| {
                let picks: HashSet<String> = t.iter().filter(|_| rng.next(2) == 0).cloned().collect();
                (p, picks)
            })
            .collect();

        let Some(expected) = brute_force(&events, &v, &t) else {
            // Más eventos solapados que temas: no hay asignación completa.
            let err = assign_topics(&events, &v, &t).unwrap_err();
            assert!(matches!(err, TopicError::IncompleteAssignment { .. }));
            continue;
        };
        let outcome = assign_topics(&events, &v, &t).unwrap();
        assert_eq!(outcome.assignment.topics, expected.topics);
        assert_eq!(outcome.assignment.total_score, expected.total);
        assert_eq!(outcome.assignment.min_score, expected.min);

        // Nunca el mismo tema entre eventos que comparten asistentes.
        for i in 0..events.len() {
            for j in (i + 1)..events.len() {
                if !events[i].attendees.is_disjoint(&events[j].attendees) {
                    assert_ne!(outcome.assignment.topics[i], outcome.assignment.topics[j]);
                }
            }
        }
    }
}
