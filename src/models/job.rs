use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// A classified and scored job post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPost {
    pub job_id: String,
    pub title: String,
    pub budget: BudgetTier,
    pub timeline: String,
    pub skills_required: BTreeSet<String>,
    pub client_location: String,
    pub client_history: String,
    pub proposals: u32,
    pub description: String,
    pub opportunity_score: u8,
    pub category: String,
    pub subcategory: String,
    #[serde(default)]
    pub notes: String,
}

impl JobPost {
    /// `"category.subcategory"`, the key used by the category histogram.
    pub fn category_key(&self) -> String {
        format!("{}.{}", self.category, self.subcategory)
    }

    pub fn competition(&self) -> CompetitionLevel {
        CompetitionLevel::from_proposals(self.proposals)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Micro,
    Small,
    Medium,
    Large,
    Unknown,
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetTier::Micro => write!(f, "micro"),
            BudgetTier::Small => write!(f, "small"),
            BudgetTier::Medium => write!(f, "medium"),
            BudgetTier::Large => write!(f, "large"),
            BudgetTier::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
}

impl CompetitionLevel {
    pub fn from_proposals(proposals: u32) -> Self {
        match proposals {
            0..=9 => CompetitionLevel::Low,
            10..=50 => CompetitionLevel::Medium,
            _ => CompetitionLevel::High,
        }
    }
}

impl std::fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompetitionLevel::Low => write!(f, "low"),
            CompetitionLevel::Medium => write!(f, "medium"),
            CompetitionLevel::High => write!(f, "high"),
        }
    }
}

/// Borrowed view over one raw input record with lenient field coercion.
#[derive(Debug, Clone, Copy)]
pub struct RawJobRecord<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> RawJobRecord<'a> {
    pub fn from_value(value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(Error::InvalidRecord(format!(
                "expected an object, got {}",
                value_kind(other)
            ))),
        }
    }

    /// Text field; absent or `null` yields an empty string, scalars are stringified.
    pub fn text(&self, field: &str) -> Result<String> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::Bool(b)) => Ok(b.to_string()),
            Some(other) => Err(Error::InvalidField {
                field: field.to_string(),
                reason: format!("expected text, got {}", value_kind(other)),
            }),
        }
    }

    /// Proposal count; anything that is not a usable non-negative number becomes 0.
    pub fn proposals(&self) -> u32 {
        match self.fields.get("proposals") {
            Some(Value::Number(n)) => {
                if let Some(v) = n.as_u64() {
                    v.min(u32::MAX as u64) as u32
                } else if let Some(v) = n.as_f64() {
                    clamp_count(v)
                } else {
                    0
                }
            }
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                trimmed
                    .parse::<u64>()
                    .map(|v| v.min(u32::MAX as u64) as u32)
                    .or_else(|_| trimmed.parse::<f64>().map(clamp_count))
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Identifier used when reporting a failed record.
    pub fn id_for_log(value: &Value) -> String {
        match value.get("id") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => "unknown".to_string(),
        }
    }
}

fn clamp_count(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.trunc().min(u32::MAX as f64) as u32
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
