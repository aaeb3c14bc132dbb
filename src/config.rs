use crate::error::{Error, Result};
use std::env;

pub const DEFAULT_MIN_OPPORTUNITY_SCORE: u8 = 7;
pub const DEFAULT_TOP_SKILLS_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub min_opportunity_score: u8,
    pub top_skills_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let min_opportunity_score = match env::var("JOB_ANALYZER_MIN_OPPORTUNITY_SCORE") {
            Ok(v) => parse_min_score(&v)?,
            Err(_) => DEFAULT_MIN_OPPORTUNITY_SCORE,
        };

        let top_skills_limit = match env::var("JOB_ANALYZER_TOP_SKILLS") {
            Ok(v) => parse_top_skills(&v)?,
            Err(_) => DEFAULT_TOP_SKILLS_LIMIT,
        };

        Ok(Self {
            min_opportunity_score,
            top_skills_limit,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_opportunity_score: DEFAULT_MIN_OPPORTUNITY_SCORE,
            top_skills_limit: DEFAULT_TOP_SKILLS_LIMIT,
        }
    }
}

/// Knobs read by the aggregator when folding a batch into a report.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub min_opportunity_score: u8,
    pub top_skills_limit: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for AnalyzerConfig {
    fn from(config: &Config) -> Self {
        Self {
            min_opportunity_score: config.min_opportunity_score,
            top_skills_limit: config.top_skills_limit,
        }
    }
}

pub fn parse_min_score(value: &str) -> Result<u8> {
    match value.trim().parse::<u8>() {
        Ok(score) if (1..=10).contains(&score) => Ok(score),
        _ => Err(Error::Config(format!(
            "minimum opportunity score must be between 1 and 10, got '{}'",
            value
        ))),
    }
}

pub fn parse_top_skills(value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(Error::Config(format!(
            "top skills limit must be a positive integer, got '{}'",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_report_contract() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.min_opportunity_score, 7);
        assert_eq!(config.top_skills_limit, 10);
    }

    #[test]
    fn test_parse_min_score() {
        assert_eq!(parse_min_score("8").unwrap(), 8);
        assert_eq!(parse_min_score(" 1 ").unwrap(), 1);
        assert!(parse_min_score("0").is_err());
        assert!(parse_min_score("11").is_err());
        assert!(parse_min_score("high").is_err());
    }

    #[test]
    fn test_parse_top_skills() {
        assert_eq!(parse_top_skills("25").unwrap(), 25);
        assert!(parse_top_skills("0").is_err());
        assert!(parse_top_skills("-3").is_err());
    }
}
