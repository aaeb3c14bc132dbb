use crate::models::BudgetTier;

/// Half-open `[min, max)` amount range for a budget tier. `max: None` is unbounded.
#[derive(Debug, Clone, Copy)]
pub struct BudgetRange {
    pub tier: BudgetTier,
    pub min: u64,
    pub max: Option<u64>,
}

impl BudgetRange {
    pub fn contains(&self, amount: u64) -> bool {
        amount >= self.min && self.max.map_or(true, |max| amount < max)
    }
}

pub const BUDGET_RANGES: &[BudgetRange] = &[
    BudgetRange {
        tier: BudgetTier::Micro,
        min: 0,
        max: Some(50),
    },
    BudgetRange {
        tier: BudgetTier::Small,
        min: 50,
        max: Some(500),
    },
    BudgetRange {
        tier: BudgetTier::Medium,
        min: 500,
        max: Some(5000),
    },
    BudgetRange {
        tier: BudgetTier::Large,
        min: 5000,
        max: None,
    },
];

/// Maps an amount onto the first tier whose range contains it.
pub fn tier_for_amount(amount: u64) -> BudgetTier {
    BUDGET_RANGES
        .iter()
        .find(|range| range.contains(amount))
        .map(|range| range.tier)
        .unwrap_or(BudgetTier::Large)
}
