use crate::models::{BudgetTier, JobPost};

pub const BASE_SCORE: i32 = 5;
pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

/// Signals the opportunity score is computed from.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs<'a> {
    pub budget: BudgetTier,
    pub proposals: u32,
    pub skills_count: usize,
    pub client_history: &'a str,
}

impl<'a> From<&'a JobPost> for ScoreInputs<'a> {
    fn from(job: &'a JobPost) -> Self {
        Self {
            budget: job.budget,
            proposals: job.proposals,
            skills_count: job.skills_required.len(),
            client_history: &job.client_history,
        }
    }
}

pub fn score(job: &JobPost) -> u8 {
    score_inputs(ScoreInputs::from(job))
}

/// Opportunity score in `[MIN_SCORE, MAX_SCORE]`.
pub fn score_inputs(inputs: ScoreInputs<'_>) -> u8 {
    let mut score = BASE_SCORE;

    score += budget_bonus(inputs.budget);
    score += competition_adjustment(inputs.proposals);
    score += inputs.skills_count.min(3) as i32;

    if inputs.client_history.to_lowercase().contains("established") {
        score += 1;
    }

    score.clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u8
}

fn budget_bonus(budget: BudgetTier) -> i32 {
    match budget {
        BudgetTier::Micro => 0,
        BudgetTier::Small => 2,
        BudgetTier::Medium => 4,
        BudgetTier::Large => 6,
        BudgetTier::Unknown => 0,
    }
}

fn competition_adjustment(proposals: u32) -> i32 {
    match proposals {
        0..=9 => 3,
        10..=24 => 1,
        25..=50 => 0,
        _ => -2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn inputs(budget: BudgetTier, proposals: u32, skills_count: usize, history: &str) -> ScoreInputs<'_> {
        ScoreInputs {
            budget,
            proposals,
            skills_count,
            client_history: history,
        }
    }

    #[test]
    fn test_base_score() {
        // 5 + 0 (unknown) + 0 (25..=50 proposals) + 0 skills
        assert_eq!(score_inputs(inputs(BudgetTier::Unknown, 30, 0, "")), 5);
    }

    #[test]
    fn test_competition_adjustment() {
        assert_eq!(score_inputs(inputs(BudgetTier::Micro, 9, 0, "")), 8);
        assert_eq!(score_inputs(inputs(BudgetTier::Micro, 10, 0, "")), 6);
        assert_eq!(score_inputs(inputs(BudgetTier::Micro, 24, 0, "")), 6);
        assert_eq!(score_inputs(inputs(BudgetTier::Micro, 25, 0, "")), 5);
        assert_eq!(score_inputs(inputs(BudgetTier::Micro, 50, 0, "")), 5);
        assert_eq!(score_inputs(inputs(BudgetTier::Micro, 51, 0, "")), 3);
    }

    #[test]
    fn test_budget_bonus() {
        assert_eq!(score_inputs(inputs(BudgetTier::Small, 30, 0, "")), 7);
        assert_eq!(score_inputs(inputs(BudgetTier::Medium, 30, 0, "")), 9);
        assert_eq!(score_inputs(inputs(BudgetTier::Large, 60, 0, "")), 9);
    }

    #[test]
    fn test_skill_bonus_capped_at_three() {
        assert_eq!(score_inputs(inputs(BudgetTier::Micro, 60, 1, "")), 4);
        assert_eq!(score_inputs(inputs(BudgetTier::Micro, 60, 3, "")), 6);
        assert_eq!(score_inputs(inputs(BudgetTier::Micro, 60, 12, "")), 6);
    }

    #[test]
    fn test_established_client_case_insensitive() {
        assert_eq!(score_inputs(inputs(BudgetTier::Micro, 60, 0, "ESTABLISHED buyer")), 4);
        assert_eq!(score_inputs(inputs(BudgetTier::Micro, 60, 0, "new client")), 3);
    }

    #[test]
    fn test_clamped_to_max() {
        // 5 + 4 + 1 + 1 + 1 = 12
        assert_eq!(score_inputs(inputs(BudgetTier::Medium, 15, 1, "Established client")), 10);
        assert_eq!(score_inputs(inputs(BudgetTier::Large, 0, 5, "established")), 10);
    }

    #[test]
    fn test_extreme_proposals() {
        assert_eq!(score_inputs(inputs(BudgetTier::Micro, 10_000_000, 0, "")), 3);
        assert_eq!(score_inputs(inputs(BudgetTier::Micro, u32::MAX, 0, "")), 3);
    }

    fn any_tier() -> impl Strategy<Value = BudgetTier> {
        prop_oneof![
            Just(BudgetTier::Micro),
            Just(BudgetTier::Small),
            Just(BudgetTier::Medium),
            Just(BudgetTier::Large),
            Just(BudgetTier::Unknown),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn score_always_within_bounds(
            budget in any_tier(),
            proposals in any::<u32>(),
            skills_count in 0usize..100,
            history in ".{0,40}",
        ) {
            let score = score_inputs(inputs(budget, proposals, skills_count, &history));
            prop_assert!((MIN_SCORE..=MAX_SCORE).contains(&score));
        }
    }
}
