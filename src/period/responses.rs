// Lectura de responses.csv: votos de temas por e-mail.
use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::warn;

use crate::error::PeriodError;
use crate::period::topics::parse_topics_value;

pub const TOPICS_COLUMN: &str = "Deep Dive Topics";
pub const EMAIL_COLUMN: &str = "Email Address";

/// Minúsculas y sin espacios; en gmail se ignoran los puntos del usuario.
pub fn normalize_email(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    match normalized.strip_suffix("@gmail.com") {
        Some(local) => format!("{}@gmail.com", local.replace('.', "")),
        None => normalized,
    }
}

fn reader(path: &Path) -> Result<csv::Reader<std::fs::File>, PeriodError> {
    Ok(csv::ReaderBuilder::new().has_headers(false).flexible(true).from_path(path)?)
}

fn read_headers(rdr: &mut csv::Reader<std::fs::File>) -> Result<Option<Vec<String>>, PeriodError> {
    match rdr.records().next() {
        None => Ok(None),
        Some(record) => Ok(Some(record?.iter().map(|h| h.trim().to_string()).collect())),
    }
}

/// Sin la columna de temas (o con el archivo vacío) no hay nada que asignar.
pub fn responses_has_topics_column(responses_path: &Path) -> Result<bool, PeriodError> {
    let mut rdr = reader(responses_path)?;
    let Some(headers) = read_headers(&mut rdr)? else {
        warn!("responses.csv is empty; skipping topic assignment.");
        return Ok(false);
    };
    if !headers.iter().any(|h| h == TOPICS_COLUMN) {
        warn!("{} column not found in responses.csv; skipping topic assignment.", TOPICS_COLUMN);
        return Ok(false);
    }
    Ok(true)
}

// Filas con más celdas que encabezados: las comas sin comillas partieron el
// campo de temas, se vuelve a unir. Filas cortas se completan con "".
fn repair_row(mut row: Vec<String>, expected_len: usize, topics_index: usize) -> Vec<String> {
    if row.len() < expected_len {
        row.resize(expected_len, String::new());
    } else if row.len() > expected_len {
        let extra = row.len() - expected_len;
        let merged = row[topics_index..=topics_index + extra].join(",");
        let tail = row.split_off(topics_index + extra + 1);
        row.truncate(topics_index);
        row.push(merged);
        row.extend(tail);
    }
    row
}

/// e-mail normalizado -> temas canónicos votados. Votos a temas desconocidos
/// se descartan; varias filas del mismo e-mail se unen.
pub fn load_topics_by_email(
    responses_path: &Path,
    topic_lookup: &HashMap<String, String>,
) -> Result<HashMap<String, HashSet<String>>, PeriodError> {
    let mut topics_by_email: HashMap<String, HashSet<String>> = HashMap::new();
    let mut rdr = reader(responses_path)?;
    let Some(headers) = read_headers(&mut rdr)? else {
        return Ok(topics_by_email);
    };

    let topics_index = headers
        .iter()
        .position(|h| h == TOPICS_COLUMN)
        .ok_or_else(|| PeriodError::InvalidConfig(format!("responses.csv missing {} column.", TOPICS_COLUMN)))?;
    let Some(email_index) = headers.iter().position(|h| h == EMAIL_COLUMN) else {
        return Ok(topics_by_email);
    };

    for record in rdr.records() {
        let record = record?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        let row = repair_row(record.iter().map(str::to_string).collect(), headers.len(), topics_index);

        let email = normalize_email(&row[email_index]);
        if email.is_empty() {
            continue;
        }

        let valid: HashSet<String> = parse_topics_value(row[topics_index].trim())
            .into_iter()
            .filter_map(|t| topic_lookup.get(&t).cloned())
            .collect();
        if valid.is_empty() {
            continue;
        }
        topics_by_email.entry(email).or_default().extend(valid);
    }

    Ok(topics_by_email)
}
