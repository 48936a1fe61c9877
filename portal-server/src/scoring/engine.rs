//! Evaluation Engine
//!
//! Owns the evaluation workflow: submission, the explicit composite-score
//! recompute, leadership approval, and the promotion queue. Handlers call
//! the engine; the engine calls the repositories.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;

use crate::db::PortalStore;
use crate::db::models::{CriteriaScore, Employee, Evaluation, EvaluationStatus};
use crate::db::repository::{CriteriaRepository, EmployeeRepository, EvaluationRepository};
use crate::scoring::calculator;
use crate::utils::{AppError, AppResult};
use crate::utils::validation::MAX_SCORE;

/// Evaluation Engine - drives scoring and the approval workflow
#[derive(Clone)]
pub struct EvaluationEngine {
    employee_repo: EmployeeRepository,
    criteria_repo: CriteriaRepository,
    evaluation_repo: EvaluationRepository,
}

impl std::fmt::Debug for EvaluationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluationEngine").finish()
    }
}

impl EvaluationEngine {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self {
            employee_repo: EmployeeRepository::new(store.clone()),
            criteria_repo: CriteriaRepository::new(store.clone()),
            evaluation_repo: EvaluationRepository::new(store),
        }
    }

    /// Record a manager's evaluation of an employee
    ///
    /// The evaluation is created in `pending` state and the employee's
    /// composite scores are recomputed immediately - submission, not
    /// approval, is the moment scores update. Approval is a leadership
    /// sign-off on top.
    pub fn submit_evaluation(
        &self,
        employee_id: u64,
        manager_id: u64,
        criteria_scores: Vec<CriteriaScore>,
        overall_comment: Option<String>,
    ) -> AppResult<Evaluation> {
        if self.employee_repo.find_by_id(employee_id).is_none() {
            return Err(AppError::not_found(format!("Employee {}", employee_id)));
        }

        self.validate_scores(&criteria_scores)?;

        let today = Utc::now().date_naive();
        let evaluation = self.evaluation_repo.create(
            employee_id,
            manager_id,
            today,
            criteria_scores,
            overall_comment,
        )?;

        // Required side effect: the new record and its score effect land
        // together, never one without the other.
        self.recompute_composite_scores(employee_id)?;

        tracing::info!(
            evaluation_id = evaluation.id,
            employee_id,
            manager_id,
            "Evaluation submitted"
        );

        Ok(evaluation)
    }

    /// Recompute an employee's composite scores from the latest evaluation
    ///
    /// A category with no scored criteria keeps the employee's prior value;
    /// an evaluation missing one category never erases earlier standing.
    pub fn recompute_composite_scores(&self, employee_id: u64) -> AppResult<Employee> {
        let employee = self
            .employee_repo
            .find_by_id(employee_id)
            .ok_or_else(|| AppError::not_found(format!("Employee {}", employee_id)))?;

        let Some(latest) = self.evaluation_repo.find_latest_for_employee(employee_id) else {
            return Ok(employee);
        };

        let criteria = self.criteria_repo.find_all();
        let composites = calculator::composite_scores(&criteria, &latest.criteria_scores);

        let updated = self.employee_repo.set_composite_scores(
            employee_id,
            composites.performance,
            composites.personality,
        )?;
        Ok(updated)
    }

    /// Approve a pending evaluation (leadership sign-off)
    pub fn approve_evaluation(&self, evaluation_id: u64, approver_id: u64) -> AppResult<Evaluation> {
        self.transition(evaluation_id, EvaluationStatus::Approved, approver_id)
    }

    /// Reject a pending evaluation
    pub fn reject_evaluation(&self, evaluation_id: u64, approver_id: u64) -> AppResult<Evaluation> {
        self.transition(evaluation_id, EvaluationStatus::Rejected, approver_id)
    }

    /// All evaluations awaiting leadership review
    pub fn pending_approvals(&self) -> Vec<Evaluation> {
        self.evaluation_repo.find_pending()
    }

    /// Employees ordered by promotion score, best first
    ///
    /// Callers decide how many to show; the portal dashboard conventionally
    /// takes the top three.
    pub fn promotion_candidates(&self, limit: Option<usize>) -> Vec<Employee> {
        let mut employees = self.employee_repo.find_all();
        calculator::sort_by_promotion_score(&mut employees);
        if let Some(limit) = limit {
            employees.truncate(limit);
        }
        employees
    }

    fn transition(
        &self,
        evaluation_id: u64,
        target: EvaluationStatus,
        approver_id: u64,
    ) -> AppResult<Evaluation> {
        let today = Utc::now().date_naive();
        let evaluation = self
            .evaluation_repo
            .transition(evaluation_id, target, approver_id, today)?;

        tracing::info!(
            evaluation_id,
            approver_id,
            status = %evaluation.status,
            "Evaluation reviewed"
        );
        Ok(evaluation)
    }

    fn validate_scores(&self, criteria_scores: &[CriteriaScore]) -> AppResult<()> {
        if criteria_scores.is_empty() {
            return Err(AppError::validation(
                "At least one criterion must be scored",
            ));
        }

        let mut seen = HashSet::new();
        for entry in criteria_scores {
            if entry.score > MAX_SCORE {
                return Err(AppError::validation(format!(
                    "Score for criterion {} must be between 0 and {MAX_SCORE} (got {})",
                    entry.criteria_id, entry.score
                )));
            }
            if !seen.insert(entry.criteria_id) {
                return Err(AppError::validation(format!(
                    "Criterion {} is scored more than once",
                    entry.criteria_id
                )));
            }
            if self.criteria_repo.find_by_id(entry.criteria_id).is_none() {
                return Err(AppError::not_found(format!(
                    "Criterion {}",
                    entry.criteria_id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{CriterionCreate, EmployeeCreate};
    use chrono::NaiveDate;
    use shared::EvaluationCategory;

    struct Fixture {
        engine: EvaluationEngine,
        employees: EmployeeRepository,
        employee_id: u64,
        perf_a: u64,
        perf_b: u64,
        pers_a: u64,
    }

    /// Two performance criteria (weights 20/30), one personality (25);
    /// one employee starting at 50/50.
    fn fixture() -> Fixture {
        let store = Arc::new(PortalStore::new());
        let criteria = CriteriaRepository::new(store.clone());
        let employees = EmployeeRepository::new(store.clone());

        let perf_a = criteria
            .create(make_criterion("Kedisiplinan", EvaluationCategory::Performance, 20))
            .unwrap()
            .id;
        let perf_b = criteria
            .create(make_criterion("Kualitas Kerja", EvaluationCategory::Performance, 30))
            .unwrap()
            .id;
        let pers_a = criteria
            .create(make_criterion("Kerjasama Tim", EvaluationCategory::Personality, 25))
            .unwrap()
            .id;

        let employee_id = employees
            .create(EmployeeCreate {
                name: "Siti Rahayu".to_string(),
                position: "Analis Keuangan".to_string(),
                department: "Keuangan".to_string(),
                hire_date: NaiveDate::from_ymd_opt(2021, 2, 10).unwrap(),
                avatar: None,
                performance: Some(50),
                personality: Some(50),
            })
            .unwrap()
            .id;

        Fixture {
            engine: EvaluationEngine::new(store),
            employees,
            employee_id,
            perf_a,
            perf_b,
            pers_a,
        }
    }

    fn make_criterion(
        name: &str,
        category: EvaluationCategory,
        weight: u32,
    ) -> CriterionCreate {
        CriterionCreate {
            name: name.to_string(),
            description: String::new(),
            category,
            weight,
        }
    }

    #[test]
    fn submission_recomputes_composites_immediately() {
        let fx = fixture();
        fx.engine
            .submit_evaluation(
                fx.employee_id,
                2,
                vec![
                    CriteriaScore { criteria_id: fx.perf_a, score: 80 },
                    CriteriaScore { criteria_id: fx.perf_b, score: 60 },
                    CriteriaScore { criteria_id: fx.pers_a, score: 90 },
                ],
                None,
            )
            .unwrap();

        let employee = fx.employees.find_by_id(fx.employee_id).unwrap();
        // (80*20 + 60*30) / 50 = 68, still pending approval
        assert_eq!(employee.performance, 68);
        assert_eq!(employee.personality, 90);
        assert_eq!(fx.engine.pending_approvals().len(), 1);
    }

    #[test]
    fn missing_category_keeps_prior_standing() {
        let fx = fixture();
        fx.engine
            .submit_evaluation(
                fx.employee_id,
                2,
                vec![CriteriaScore { criteria_id: fx.perf_a, score: 70 }],
                None,
            )
            .unwrap();

        let employee = fx.employees.find_by_id(fx.employee_id).unwrap();
        assert_eq!(employee.performance, 70);
        assert_eq!(employee.personality, 50);
    }

    #[test]
    fn unknown_criterion_rejects_submission_without_mutation() {
        let fx = fixture();
        let err = fx
            .engine
            .submit_evaluation(
                fx.employee_id,
                2,
                vec![CriteriaScore { criteria_id: 999, score: 70 }],
                None,
            )
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));

        let employee = fx.employees.find_by_id(fx.employee_id).unwrap();
        assert_eq!(employee.performance, 50);
        assert!(fx.engine.pending_approvals().is_empty());
    }

    #[test]
    fn duplicate_criterion_in_submission_is_rejected() {
        let fx = fixture();
        let err = fx
            .engine
            .submit_evaluation(
                fx.employee_id,
                2,
                vec![
                    CriteriaScore { criteria_id: fx.perf_a, score: 70 },
                    CriteriaScore { criteria_id: fx.perf_a, score: 80 },
                ],
                None,
            )
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn approve_twice_rejects_second_attempt() {
        let fx = fixture();
        let evaluation = fx
            .engine
            .submit_evaluation(
                fx.employee_id,
                2,
                vec![CriteriaScore { criteria_id: fx.perf_a, score: 70 }],
                None,
            )
            .unwrap();

        let approved = fx.engine.approve_evaluation(evaluation.id, 4).unwrap();
        assert_eq!(approved.status, EvaluationStatus::Approved);
        assert_eq!(approved.approved_by, Some(4));

        let err = fx.engine.approve_evaluation(evaluation.id, 4).unwrap_err();
        assert!(matches!(err, AppError::BusinessRule { .. }));
    }

    #[test]
    fn candidates_are_sorted_and_limited() {
        let fx = fixture();
        // Second employee who will outscore the first
        let top = fx
            .employees
            .create(EmployeeCreate {
                name: "Budi Santoso".to_string(),
                position: "Manager Pemasaran".to_string(),
                department: "Pemasaran".to_string(),
                hire_date: NaiveDate::from_ymd_opt(2020, 5, 15).unwrap(),
                avatar: None,
                performance: Some(95),
                personality: Some(90),
            })
            .unwrap();

        let candidates = fx.engine.promotion_candidates(None);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].id, top.id);

        let top_one = fx.engine.promotion_candidates(Some(1));
        assert_eq!(top_one.len(), 1);
        assert_eq!(top_one[0].id, top.id);
    }
}
