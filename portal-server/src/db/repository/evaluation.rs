//! Evaluation Repository
//!
//! Storage and workflow transitions for evaluation records. The state
//! machine is `pending -> approved | rejected`; both outcomes are terminal
//! and re-transitions are rejected, never silently accepted.

use std::sync::Arc;

use chrono::NaiveDate;

use super::{RepoError, RepoResult};
use crate::db::PortalStore;
use crate::db::models::{CriteriaScore, Evaluation, EvaluationStatus};

const RESOURCE: &str = "evaluation";

#[derive(Clone)]
pub struct EvaluationRepository {
    store: Arc<PortalStore>,
}

impl EvaluationRepository {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    /// Find all evaluations
    pub fn find_all(&self) -> Vec<Evaluation> {
        self.store.evaluations.read().clone()
    }

    /// Find evaluation by id
    pub fn find_by_id(&self, id: u64) -> Option<Evaluation> {
        self.store
            .evaluations
            .read()
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    /// Find all evaluations for one employee, newest first
    pub fn find_by_employee(&self, employee_id: u64) -> Vec<Evaluation> {
        let mut evaluations: Vec<Evaluation> = self
            .store
            .evaluations
            .read()
            .iter()
            .filter(|e| e.employee_id == employee_id)
            .cloned()
            .collect();
        evaluations.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        evaluations
    }

    /// The latest evaluation recorded for an employee, if any
    pub fn find_latest_for_employee(&self, employee_id: u64) -> Option<Evaluation> {
        self.find_by_employee(employee_id).into_iter().next()
    }

    /// All evaluations awaiting leadership review
    pub fn find_pending(&self) -> Vec<Evaluation> {
        self.store
            .evaluations
            .read()
            .iter()
            .filter(|e| e.status == EvaluationStatus::Pending)
            .cloned()
            .collect()
    }

    /// Record a new evaluation in `pending` state
    pub fn create(
        &self,
        employee_id: u64,
        manager_id: u64,
        date: NaiveDate,
        criteria_scores: Vec<CriteriaScore>,
        overall_comment: Option<String>,
    ) -> RepoResult<Evaluation> {
        let evaluation = Evaluation {
            id: self.store.next_id(RESOURCE),
            employee_id,
            manager_id,
            date,
            status: EvaluationStatus::Pending,
            criteria_scores,
            overall_comment,
            approved_by: None,
            approved_date: None,
        };
        self.store.evaluations.write().push(evaluation.clone());
        Ok(evaluation)
    }

    /// Move a pending evaluation to a terminal state, recording the reviewer
    ///
    /// Calling this on an already-terminal evaluation is an error and leaves
    /// the record unchanged.
    pub fn transition(
        &self,
        id: u64,
        target: EvaluationStatus,
        approver_id: u64,
        date: NaiveDate,
    ) -> RepoResult<Evaluation> {
        debug_assert!(target.is_terminal());

        let mut evaluations = self.store.evaluations.write();
        let evaluation = evaluations
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Evaluation {} not found", id)))?;

        if evaluation.status.is_terminal() {
            return Err(RepoError::BusinessRule(format!(
                "Evaluation {} is already {}",
                id, evaluation.status
            )));
        }

        evaluation.status = target;
        evaluation.approved_by = Some(approver_id);
        evaluation.approved_date = Some(date);
        Ok(evaluation.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> EvaluationRepository {
        EvaluationRepository::new(Arc::new(PortalStore::new()))
    }

    fn scores() -> Vec<CriteriaScore> {
        vec![
            CriteriaScore {
                criteria_id: 1,
                score: 85,
            },
            CriteriaScore {
                criteria_id: 2,
                score: 90,
            },
        ]
    }

    #[test]
    fn created_evaluations_start_pending() {
        let repo = repo();
        let date = NaiveDate::from_ymd_opt(2023, 12, 15).unwrap();
        let ev = repo.create(2, 1, date, scores(), None).unwrap();
        assert_eq!(ev.status, EvaluationStatus::Pending);
        assert_eq!(repo.find_pending().len(), 1);
    }

    #[test]
    fn second_transition_is_rejected_without_change() {
        let repo = repo();
        let date = NaiveDate::from_ymd_opt(2023, 12, 15).unwrap();
        let ev = repo.create(2, 1, date, scores(), None).unwrap();

        let approved = repo
            .transition(ev.id, EvaluationStatus::Approved, 4, date)
            .unwrap();
        assert_eq!(approved.status, EvaluationStatus::Approved);
        assert_eq!(approved.approved_by, Some(4));

        let err = repo
            .transition(ev.id, EvaluationStatus::Rejected, 4, date)
            .unwrap_err();
        assert!(matches!(err, RepoError::BusinessRule(_)));
        assert_eq!(
            repo.find_by_id(ev.id).unwrap().status,
            EvaluationStatus::Approved
        );
    }

    #[test]
    fn latest_evaluation_wins_by_date_then_id() {
        let repo = repo();
        let older = NaiveDate::from_ymd_opt(2023, 11, 20).unwrap();
        let newer = NaiveDate::from_ymd_opt(2023, 12, 15).unwrap();
        repo.create(2, 1, older, scores(), None).unwrap();
        let latest = repo.create(2, 1, newer, scores(), None).unwrap();

        assert_eq!(
            repo.find_latest_for_employee(2).unwrap().id,
            latest.id
        );
    }
}
