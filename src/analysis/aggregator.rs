use std::collections::{BTreeMap, HashMap};

use crate::config::AnalyzerConfig;
use crate::models::{
    AnalysisReport, BudgetTier, CompetitionDistribution, CompetitionLevel, CompetitionSummary,
    JobPost, Opportunity, SkillFrequency,
};

impl AnalysisReport {
    /// Folds already-processed job posts into a report. `jobs` keeps its order.
    pub fn from_jobs(jobs: Vec<JobPost>, config: &AnalyzerConfig) -> Self {
        Self {
            total_jobs: jobs.len(),
            categories: analyze_categories(&jobs),
            budgets: analyze_budgets(&jobs),
            competition: analyze_competition(&jobs),
            top_skills: analyze_skills(&jobs, config.top_skills_limit),
            opportunities: find_opportunities(&jobs, config.min_opportunity_score),
            processed_jobs: jobs,
        }
    }
}

pub fn analyze_categories(jobs: &[JobPost]) -> BTreeMap<String, u32> {
    let mut categories = BTreeMap::new();
    for job in jobs {
        *categories.entry(job.category_key()).or_insert(0) += 1;
    }
    categories
}

pub fn analyze_budgets(jobs: &[JobPost]) -> BTreeMap<BudgetTier, u32> {
    let mut budgets = BTreeMap::new();
    for job in jobs {
        *budgets.entry(job.budget).or_insert(0) += 1;
    }
    budgets
}

pub fn analyze_competition(jobs: &[JobPost]) -> CompetitionSummary {
    let mut distribution = CompetitionDistribution::default();
    let mut total_proposals: u64 = 0;

    for job in jobs {
        total_proposals += job.proposals as u64;
        match job.competition() {
            CompetitionLevel::Low => distribution.low += 1,
            CompetitionLevel::Medium => distribution.medium += 1,
            CompetitionLevel::High => distribution.high += 1,
        }
    }

    let average_proposals = if jobs.is_empty() {
        0.0
    } else {
        total_proposals as f64 / jobs.len() as f64
    };

    CompetitionSummary {
        distribution,
        average_proposals,
    }
}

/// Most requested skills. Counts keep first-encounter order so the stable
/// sort leaves equally frequent skills in the order they were first seen.
pub fn analyze_skills(jobs: &[JobPost], limit: usize) -> Vec<SkillFrequency> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut skills: Vec<SkillFrequency> = Vec::new();

    for job in jobs {
        for skill in &job.skills_required {
            match index.get(skill.as_str()) {
                Some(&i) => skills[i].count += 1,
                None => {
                    index.insert(skill.as_str(), skills.len());
                    skills.push(SkillFrequency {
                        skill: skill.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    skills.sort_by(|a, b| b.count.cmp(&a.count));
    skills.truncate(limit);
    skills
}

pub fn find_opportunities(jobs: &[JobPost], min_score: u8) -> Vec<Opportunity> {
    let mut opportunities: Vec<Opportunity> = jobs
        .iter()
        .filter(|job| job.opportunity_score >= min_score)
        .map(Opportunity::from)
        .collect();

    opportunities.sort_by(|a, b| b.score.cmp(&a.score));
    opportunities
}
