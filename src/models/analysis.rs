use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::job::{BudgetTier, JobPost};
use crate::error::Result;

/// Summary of one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total_jobs: usize,
    pub categories: BTreeMap<String, u32>,
    pub budgets: BTreeMap<BudgetTier, u32>,
    pub competition: CompetitionSummary,
    pub top_skills: Vec<SkillFrequency>,
    pub opportunities: Vec<Opportunity>,
    pub processed_jobs: Vec<JobPost>,
}

impl AnalysisReport {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompetitionSummary {
    pub distribution: CompetitionDistribution,
    pub average_proposals: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompetitionDistribution {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillFrequency {
    pub skill: String,
    pub count: u32,
}

/// Shortlist entry for a job whose score clears the opportunity threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Opportunity {
    pub job_id: String,
    pub title: String,
    pub score: u8,
    pub budget: BudgetTier,
    pub proposals: u32,
    pub category: String,
}

impl From<&JobPost> for Opportunity {
    fn from(job: &JobPost) -> Self {
        Self {
            job_id: job.job_id.clone(),
            title: job.title.clone(),
            score: job.opportunity_score,
            budget: job.budget,
            proposals: job.proposals,
            category: job.category_key(),
        }
    }
}
