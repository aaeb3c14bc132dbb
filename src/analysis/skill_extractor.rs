use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::models::BudgetTier;
use crate::taxonomy::{tier_for_amount, Taxonomy};

static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+").expect("amount pattern is a valid regex")
});

pub struct SkillExtractor {
    taxonomy: Taxonomy,
}

impl SkillExtractor {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Every taxonomy keyword found as a case-insensitive substring of the
    /// description and title.
    pub fn extract_skills(&self, description: &str, title: &str) -> BTreeSet<String> {
        let text = format!("{} {}", description, title).to_lowercase();

        self.taxonomy
            .keywords()
            .filter(|keyword| text.contains(keyword))
            .map(str::to_string)
            .collect()
    }

    pub fn extract_budget(&self, budget_text: &str) -> BudgetTier {
        extract_budget(budget_text)
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new(Taxonomy::standard())
    }
}

/// Maps free-form budget text onto a tier using the largest amount it mentions.
pub fn extract_budget(budget_text: &str) -> BudgetTier {
    let cleaned = budget_text.replace(',', "");

    // Digit runs too long for u64 are still amounts, just very large ones.
    AMOUNT_RE
        .find_iter(&cleaned)
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .max()
        .map(tier_for_amount)
        .unwrap_or(BudgetTier::Unknown)
}
