// Pipeline sobre la carpeta de un periodo: lee votos, miembros y eventos,
// corre el motor de temas y escribe el resultado en results.json.
pub mod members;
pub mod responses;
pub mod topics;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::algorithm::{apply_assignment, assign_topics};
use crate::error::PeriodError;
use crate::models::{ScheduledEvent, TopicAssignment};

pub use members::{build_member_email_map, member_key, member_key_from_json};
pub use responses::{TOPICS_COLUMN, load_topics_by_email, normalize_email, responses_has_topics_column};
pub use topics::{build_topic_lookup, load_valid_topics, normalize_topic, parse_topics_value, strip_parenthetical};

pub const RESULTS_FILE: &str = "results.json";
pub const RESPONSES_FILE: &str = "responses.csv";
pub const MEMBERS_FILE: &str = "members.csv";
pub const PERIOD_CONFIG_FILE: &str = "period_config.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodOutcome {
    /// responses.csv no trae votos de temas; results.json no se modifica.
    Skipped,
    Assigned(TopicAssignment),
}

// Id para trazas y perfiles (el índice si el evento no trae `id`).
fn event_id_or_index(event: &Value, idx: usize) -> i64 {
    event.get("id").and_then(Value::as_i64).unwrap_or(idx as i64)
}

/// Asistentes confirmados del evento como e-mails. Los `alternates` no cuentan
/// y los ids sin e-mail conocido se descartan.
fn event_attendee_emails(event: &Value, id_to_email: &HashMap<String, String>) -> HashSet<String> {
    event
        .get("attendees")
        .and_then(Value::as_array)
        .map(|attendees| {
            attendees
                .iter()
                .filter_map(|a| a.get("id").and_then(member_key_from_json))
                .filter_map(|key| id_to_email.get(&key))
                .filter(|email| !email.is_empty())
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

fn require(path: &Path) -> Result<(), PeriodError> {
    if path.exists() { Ok(()) } else { Err(PeriodError::MissingFile(path.to_path_buf())) }
}

/// Asigna un tema a cada evento de `results.json` dentro de `period_path`.
pub fn assign_topics_for_period(period_path: &Path) -> Result<PeriodOutcome, PeriodError> {
    let results_path = period_path.join(RESULTS_FILE);
    let responses_path = period_path.join(RESPONSES_FILE);
    let members_path = period_path.join(MEMBERS_FILE);
    let period_config_path = period_path.join(PERIOD_CONFIG_FILE);

    require(&responses_path)?;
    require(&members_path)?;
    require(&results_path)?;

    if !responses_has_topics_column(&responses_path)? {
        return Ok(PeriodOutcome::Skipped);
    }

    require(&period_config_path)?;
    let valid_topics = load_valid_topics(&period_config_path)?;
    let topic_lookup = build_topic_lookup(&valid_topics)?;
    let topics_by_email = load_topics_by_email(&responses_path, &topic_lookup)?;
    let id_to_email = build_member_email_map(&members_path)?;
    info!(
        period = %period_path.display(),
        topics = valid_topics.len(),
        voters = topics_by_email.len(),
        "loaded topic votes"
    );

    let mut results: Value = serde_json::from_str(&fs::read_to_string(&results_path)?)?;
    let mut no_events = Vec::new();
    let events_json: &mut Vec<Value> = match results.get_mut("valid_events").and_then(Value::as_array_mut) {
        Some(events) => events,
        None => &mut no_events,
    };

    let events: Vec<ScheduledEvent<String>> = events_json
        .iter()
        .enumerate()
        .map(|(idx, event)| ScheduledEvent {
            id: event_id_or_index(event, idx),
            attendees: event_attendee_emails(event, &id_to_email),
        })
        .collect();

    let outcome = assign_topics(&events, &topics_by_email, &valid_topics)?;

    // Un perfil por evento en el mismo orden: se aplica por posición.
    let updated = apply_assignment(events_json.as_mut_slice(), &outcome.profiles, &outcome.assignment);
    info!(updated, "writing topics to {}", results_path.display());

    fs::write(&results_path, serde_json::to_string_pretty(&results)?)?;
    Ok(PeriodOutcome::Assigned(outcome.assignment))
}
