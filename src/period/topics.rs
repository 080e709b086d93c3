// Lista canónica de temas (period_config.json) y normalización de nombres.
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::PeriodError;

/// Quita descripciones entre paréntesis: "R&B (swung timing)" -> "R&B ".
/// Un paréntesis sin cerrar se conserva tal cual.
pub fn strip_parenthetical(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(open) = rest.find('(') {
        match rest[open..].find(')') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

pub fn normalize_topic(value: &str) -> String {
    strip_parenthetical(value).split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Separa el valor de la columna de temas por comas (después de quitar
/// paréntesis, que pueden contener comas) y normaliza cada parte.
pub fn parse_topics_value(value: &str) -> Vec<String> {
    strip_parenthetical(value)
        .split(',')
        .map(normalize_topic)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Mapa nombre normalizado -> nombre canónico.
pub fn build_topic_lookup(valid_topics: &[String]) -> Result<HashMap<String, String>, PeriodError> {
    let mut lookup: HashMap<String, String> = HashMap::new();
    for topic in valid_topics {
        let normalized = normalize_topic(topic);
        if normalized.is_empty() {
            return Err(PeriodError::BlankTopic);
        }
        match lookup.get(&normalized) {
            Some(existing) if existing != topic => {
                return Err(PeriodError::DuplicateTopic { first: existing.clone(), second: topic.clone() });
            }
            Some(_) => {}
            None => {
                lookup.insert(normalized, topic.clone());
            }
        }
    }
    Ok(lookup)
}

pub fn load_valid_topics(period_config_path: &Path) -> Result<Vec<String>, PeriodError> {
    let data: Value = serde_json::from_str(&fs::read_to_string(period_config_path)?)?;
    let topics = data
        .as_object()
        .and_then(|obj| obj.get("topics"))
        .ok_or_else(|| PeriodError::InvalidConfig("must contain a 'topics' list.".to_string()))?;
    let list = topics
        .as_array()
        .ok_or_else(|| PeriodError::InvalidConfig("'topics' must be a list.".to_string()))?;
    Ok(list
        .iter()
        .map(|t| match t {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect())
}
