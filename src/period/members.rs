// members.csv: id de miembro -> e-mail normalizado.
use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::error::PeriodError;
use crate::period::responses::{EMAIL_COLUMN, normalize_email};

/// Clave de miembro: ids numéricos se comparan como número ("007" == 7).
pub fn member_key(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(n) => n.to_string(),
        Err(_) => trimmed.to_string(),
    }
}

/// Misma clave a partir del `id` de un asistente en results.json.
pub fn member_key_from_json(id: &Value) -> Option<String> {
    match id {
        Value::Number(n) => Some(member_key(&n.to_string())),
        Value::String(s) => Some(member_key(s)),
        _ => None,
    }
}

pub fn build_member_email_map(members_path: &Path) -> Result<HashMap<String, String>, PeriodError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(members_path)?;
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();

    let mut mapping = HashMap::new();
    let Some(id_index) = headers.iter().position(|h| h == "id") else {
        return Ok(mapping);
    };
    let email_index = headers.iter().position(|h| h == EMAIL_COLUMN);

    for record in rdr.records() {
        let record = record?;
        let raw_id = record.get(id_index).unwrap_or("").trim();
        if raw_id.is_empty() {
            continue;
        }
        let email = email_index
            .and_then(|idx| record.get(idx))
            .map(normalize_email)
            .unwrap_or_default();
        mapping.insert(member_key(raw_id), email);
    }
    Ok(mapping)
}
