//! Evaluation Criteria Repository
//!
//! Catalog CRUD with the per-category weight cap: the sum of weights across
//! a category's criteria must never exceed 100. An attempt to exceed the cap
//! is rejected with the category and overflow amount; nothing is clamped.

use std::sync::Arc;

use shared::EvaluationCategory;

use super::{RepoError, RepoResult};
use crate::db::PortalStore;
use crate::db::models::{CriterionCreate, CriterionUpdate, EvaluationCriterion};
use crate::utils::validation::{CATEGORY_WEIGHT_CAP, MAX_CRITERION_WEIGHT, MIN_CRITERION_WEIGHT};

const RESOURCE: &str = "criterion";

#[derive(Clone)]
pub struct CriteriaRepository {
    store: Arc<PortalStore>,
}

impl CriteriaRepository {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    /// Find all criteria
    pub fn find_all(&self) -> Vec<EvaluationCriterion> {
        self.store.criteria.read().clone()
    }

    /// Find criterion by id
    pub fn find_by_id(&self, id: u64) -> Option<EvaluationCriterion> {
        self.store
            .criteria
            .read()
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Find all criteria in a category
    pub fn find_by_category(&self, category: EvaluationCategory) -> Vec<EvaluationCriterion> {
        self.store
            .criteria
            .read()
            .iter()
            .filter(|c| c.category == category)
            .cloned()
            .collect()
    }

    /// Create a new criterion, enforcing the category weight cap
    pub fn create(&self, data: CriterionCreate) -> RepoResult<EvaluationCriterion> {
        validate_weight_bounds(data.weight)?;

        let mut criteria = self.store.criteria.write();
        check_weight_cap(&criteria, data.category, data.weight, None)?;

        let criterion = EvaluationCriterion {
            id: self.store.next_id(RESOURCE),
            name: data.name,
            description: data.description,
            category: data.category,
            weight: data.weight,
        };
        criteria.push(criterion.clone());
        Ok(criterion)
    }

    /// Update a criterion, enforcing the weight cap excluding the edited row
    pub fn update(&self, id: u64, data: CriterionUpdate) -> RepoResult<EvaluationCriterion> {
        if let Some(weight) = data.weight {
            validate_weight_bounds(weight)?;
        }

        let mut criteria = self.store.criteria.write();
        let existing = criteria
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(format!("Criterion {} not found", id)))?;

        let category = data.category.unwrap_or(existing.category);
        let weight = data.weight.unwrap_or(existing.weight);
        check_weight_cap(&criteria, category, weight, Some(id))?;

        let criterion = criteria.iter_mut().find(|c| c.id == id).unwrap();
        if let Some(name) = data.name {
            criterion.name = name;
        }
        if let Some(description) = data.description {
            criterion.description = description;
        }
        criterion.category = category;
        criterion.weight = weight;

        Ok(criterion.clone())
    }

    /// Delete a criterion by id
    pub fn delete(&self, id: u64) -> RepoResult<()> {
        let mut criteria = self.store.criteria.write();
        let before = criteria.len();
        criteria.retain(|c| c.id != id);
        if criteria.len() == before {
            return Err(RepoError::NotFound(format!("Criterion {} not found", id)));
        }
        Ok(())
    }
}

fn validate_weight_bounds(weight: u32) -> RepoResult<()> {
    if !(MIN_CRITERION_WEIGHT..=MAX_CRITERION_WEIGHT).contains(&weight) {
        return Err(RepoError::Validation(format!(
            "weight must be between {MIN_CRITERION_WEIGHT} and {MAX_CRITERION_WEIGHT} (got {weight})"
        )));
    }
    Ok(())
}

/// Reject the mutation when the category's weights would pass the cap.
/// `exclude` removes the edited criterion from the existing sum on update.
fn check_weight_cap(
    criteria: &[EvaluationCriterion],
    category: EvaluationCategory,
    new_weight: u32,
    exclude: Option<u64>,
) -> RepoResult<()> {
    let existing: u32 = criteria
        .iter()
        .filter(|c| c.category == category && Some(c.id) != exclude)
        .map(|c| c.weight)
        .sum();

    let total = existing + new_weight;
    if total > CATEGORY_WEIGHT_CAP {
        return Err(RepoError::Validation(format!(
            "Total weight for category '{}' would exceed {} by {}",
            category,
            CATEGORY_WEIGHT_CAP,
            total - CATEGORY_WEIGHT_CAP
        )));
    }
    Ok(())
}
