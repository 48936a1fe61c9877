//! Composite Score Calculator
//!
//! Pure scoring math for evaluations. Uses rust_decimal internally so the
//! weighted averages round predictably, stores results as integers on the
//! 0-100 scale.
//!
//! The category score is the weighted average over the criteria actually
//! scored: weights express relative importance within a category and need
//! not sum to 100 at scoring time; the 100-point cap is a catalog
//! constraint, not a per-submission one.

use rust_decimal::prelude::*;

use crate::db::models::{CriteriaScore, Employee, EvaluationCriterion};
use shared::EvaluationCategory;

/// Rounding strategy for score values (integers, half away from zero)
const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Promotion blend weights: performance 0.6, personality 0.4
const PERFORMANCE_SHARE: Decimal = Decimal::from_parts(6, 0, 0, false, 1);
const PERSONALITY_SHARE: Decimal = Decimal::from_parts(4, 0, 0, false, 1);

/// Minimum promotion score for candidacy
pub const PROMOTION_THRESHOLD: f64 = 85.0;

/// Per-category composite results of one evaluation
///
/// A `None` category had no scored criteria; the employee's prior standing
/// in that category must be left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompositeScores {
    pub performance: Option<u8>,
    pub personality: Option<u8>,
}

/// Weighted average of `(weight, score)` entries, rounded to the nearest
/// integer. Returns `None` when no entries were scored.
pub fn category_score(entries: &[(u32, u8)]) -> Option<u8> {
    if entries.is_empty() {
        return None;
    }

    let mut weighted_sum = Decimal::ZERO;
    let mut weight_sum = Decimal::ZERO;
    for (weight, score) in entries {
        let weight = Decimal::from(*weight);
        weighted_sum += weight * Decimal::from(*score);
        weight_sum += weight;
    }

    if weight_sum.is_zero() {
        return None;
    }

    let average = (weighted_sum / weight_sum).round_dp_with_strategy(0, ROUNDING);
    average.to_u8()
}

/// Partition an evaluation's scores by criterion category and compute both
/// composites. Scores referencing unknown criteria are ignored here; the
/// engine rejects them before this point.
pub fn composite_scores(
    criteria: &[EvaluationCriterion],
    scores: &[CriteriaScore],
) -> CompositeScores {
    let mut performance = Vec::new();
    let mut personality = Vec::new();

    for entry in scores {
        let Some(criterion) = criteria.iter().find(|c| c.id == entry.criteria_id) else {
            continue;
        };
        let pair = (criterion.weight, entry.score);
        match criterion.category {
            EvaluationCategory::Performance => performance.push(pair),
            EvaluationCategory::Personality => personality.push(pair),
        }
    }

    CompositeScores {
        performance: category_score(&performance),
        personality: category_score(&personality),
    }
}

fn promotion_score_decimal(employee: &Employee) -> Decimal {
    Decimal::from(employee.performance) * PERFORMANCE_SHARE
        + Decimal::from(employee.personality) * PERSONALITY_SHARE
}

/// Fixed linear blend of the two composites
pub fn promotion_score(employee: &Employee) -> f64 {
    promotion_score_decimal(employee).to_f64().unwrap_or_default()
}

/// Whether the employee clears the promotion threshold
pub fn is_promotion_candidate(employee: &Employee) -> bool {
    promotion_score(employee) >= PROMOTION_THRESHOLD
}

/// Sort employees descending by promotion score (stable for equal scores)
pub fn sort_by_promotion_score(employees: &mut [Employee]) {
    employees.sort_by(|a, b| promotion_score_decimal(b).cmp(&promotion_score_decimal(a)));
}
