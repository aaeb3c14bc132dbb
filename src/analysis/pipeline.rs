use indicatif::ProgressBar;
use serde_json::Value;

use crate::analysis::classifier::Classifier;
use crate::analysis::scorer;
use crate::analysis::skill_extractor::SkillExtractor;
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::models::{AnalysisReport, JobPost, RawJobRecord};
use crate::taxonomy::Taxonomy;

pub struct JobAnalyzer {
    skill_extractor: SkillExtractor,
    classifier: Classifier,
    config: AnalyzerConfig,
}

impl JobAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self::with_taxonomy(Taxonomy::standard(), config)
    }

    pub fn with_taxonomy(taxonomy: Taxonomy, config: AnalyzerConfig) -> Self {
        Self {
            skill_extractor: SkillExtractor::new(taxonomy),
            classifier: Classifier::new(taxonomy),
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Runs extraction, classification and scoring over one raw record.
    pub fn process_job_post(&self, raw: &Value) -> Result<JobPost> {
        let record = RawJobRecord::from_value(raw)?;

        let title = record.text("title")?;
        let description = record.text("description")?;

        let skills = self.skill_extractor.extract_skills(&description, &title);
        let classification = self.classifier.categorize(&title, &description);

        let mut job = JobPost {
            job_id: record.text("id")?,
            title,
            budget: self.skill_extractor.extract_budget(&record.text("budget")?),
            timeline: record.text("timeline")?,
            skills_required: skills,
            client_location: record.text("client_location")?,
            client_history: record.text("client_history")?,
            proposals: record.proposals(),
            description,
            opportunity_score: 0,
            category: classification.category.to_string(),
            subcategory: classification.subcategory.to_string(),
            notes: record.text("notes")?,
        };

        job.opportunity_score = scorer::score(&job);

        tracing::debug!(
            "Processed job {} as {} (score {})",
            job.job_id,
            job.category_key(),
            job.opportunity_score
        );

        Ok(job)
    }

    /// Analyzes a batch of raw records. Records that fail to process are
    /// logged and left out; the batch itself never fails.
    pub fn analyze_batch(&self, records: &[Value]) -> AnalysisReport {
        self.analyze_batch_with_progress(records, &ProgressBar::hidden())
    }

    pub fn analyze_batch_with_progress(&self, records: &[Value], pb: &ProgressBar) -> AnalysisReport {
        pb.set_length(records.len() as u64);

        let mut processed_jobs = Vec::with_capacity(records.len());

        for raw in records {
            match self.process_job_post(raw) {
                Ok(job) => processed_jobs.push(job),
                Err(e) => {
                    tracing::warn!(
                        "Error processing job {}: {}",
                        RawJobRecord::id_for_log(raw),
                        e
                    );
                }
            }
            pb.inc(1);
        }

        pb.finish_with_message("Analysis complete");

        let skipped = records.len() - processed_jobs.len();
        tracing::info!(
            "Processed {} of {} job posts ({} skipped)",
            processed_jobs.len(),
            records.len(),
            skipped
        );

        AnalysisReport::from_jobs(processed_jobs, &self.config)
    }
}

impl Default for JobAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}
