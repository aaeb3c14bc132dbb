use serde_json::Value;
use std::path::Path;

use crate::error::{Error, Result};

pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    let text = std::fs::read_to_string(path)?;
    parse_records(&text)
}

/// Reads raw job records from either a JSON document (an array of records or
/// a single record) or JSON Lines.
pub fn parse_records(text: &str) -> Result<Vec<Value>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Ok(match value {
            Value::Array(records) => records,
            record => vec![record],
        });
    }

    trimmed
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line)
                .map_err(|e| Error::ParseError(format!("line {}: {}", i + 1, e)))
        })
        .collect()
}

/// The single example job shipped with the CLI.
pub fn sample_records() -> Vec<Value> {
    vec![serde_json::json!({
        "id": "sample1",
        "title": "React Developer Needed",
        "description": "Looking for a React developer to build a modern web application",
        "budget": "$500-1000",
        "timeline": "2 weeks",
        "client_location": "USA",
        "client_history": "Established client",
        "proposals": 15
    })]
}
