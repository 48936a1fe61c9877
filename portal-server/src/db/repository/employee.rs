//! Employee Repository

use std::sync::Arc;

use super::{RepoError, RepoResult};
use crate::db::PortalStore;
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};

const RESOURCE: &str = "employee";

const DEFAULT_AVATAR: &str = "/avatars/default.png";

#[derive(Clone)]
pub struct EmployeeRepository {
    store: Arc<PortalStore>,
}

impl EmployeeRepository {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    /// Find all employees, ordered by name
    pub fn find_all(&self) -> Vec<Employee> {
        let mut employees = self.store.employees.read().clone();
        employees.sort_by(|a, b| a.name.cmp(&b.name));
        employees
    }

    /// Find employee by id
    pub fn find_by_id(&self, id: u64) -> Option<Employee> {
        self.store
            .employees
            .read()
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    /// Create a new employee, assigning the next sequential id
    pub fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let employee = Employee {
            id: self.store.next_id(RESOURCE),
            name: data.name,
            position: data.position,
            department: data.department,
            hire_date: data.hire_date,
            avatar: data.avatar.unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            performance: data.performance.unwrap_or(0),
            personality: data.personality.unwrap_or(0),
        };
        self.store.employees.write().push(employee.clone());
        Ok(employee)
    }

    /// Update an employee
    pub fn update(&self, id: u64, data: EmployeeUpdate) -> RepoResult<Employee> {
        let mut employees = self.store.employees.write();
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        if let Some(name) = data.name {
            employee.name = name;
        }
        if let Some(position) = data.position {
            employee.position = position;
        }
        if let Some(department) = data.department {
            employee.department = department;
        }
        if let Some(hire_date) = data.hire_date {
            employee.hire_date = hire_date;
        }
        if let Some(avatar) = data.avatar {
            employee.avatar = avatar;
        }

        Ok(employee.clone())
    }

    /// Overwrite composite scores; a `None` leaves the prior value standing
    ///
    /// Called by the scoring engine as the explicit recompute step after an
    /// evaluation is recorded.
    pub fn set_composite_scores(
        &self,
        id: u64,
        performance: Option<u8>,
        personality: Option<u8>,
    ) -> RepoResult<Employee> {
        let mut employees = self.store.employees.write();
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        if let Some(score) = performance {
            employee.performance = score;
        }
        if let Some(score) = personality {
            employee.personality = score;
        }

        Ok(employee.clone())
    }

    /// Delete an employee by id, cascade-deleting that employee's evaluations
    pub fn delete(&self, id: u64) -> RepoResult<()> {
        let removed = {
            let mut employees = self.store.employees.write();
            let before = employees.len();
            employees.retain(|e| e.id != id);
            employees.len() != before
        };

        if !removed {
            return Err(RepoError::NotFound(format!("Employee {} not found", id)));
        }

        // Cascade: no orphan evaluations may remain
        self.store
            .evaluations
            .write()
            .retain(|ev| ev.employee_id != id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{CriteriaScore, Evaluation, EvaluationStatus};
    use chrono::NaiveDate;

    fn repo_with_employee() -> (EmployeeRepository, u64) {
        let store = Arc::new(PortalStore::new());
        let repo = EmployeeRepository::new(store.clone());
        let employee = repo
            .create(EmployeeCreate {
                name: "Budi Santoso".to_string(),
                position: "Manager Pemasaran".to_string(),
                department: "Pemasaran".to_string(),
                hire_date: NaiveDate::from_ymd_opt(2020, 5, 15).unwrap(),
                avatar: None,
                performance: Some(92),
                personality: Some(87),
            })
            .unwrap();
        (repo, employee.id)
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let (repo, first_id) = repo_with_employee();
        let second = repo
            .create(EmployeeCreate {
                name: "Siti Rahayu".to_string(),
                position: "Analis Keuangan".to_string(),
                department: "Keuangan".to_string(),
                hire_date: NaiveDate::from_ymd_opt(2021, 2, 10).unwrap(),
                avatar: None,
                performance: None,
                personality: None,
            })
            .unwrap();
        assert_eq!(second.id, first_id + 1);
        assert_eq!(second.performance, 0);
    }

    #[test]
    fn set_composite_scores_leaves_none_fields_untouched() {
        let (repo, id) = repo_with_employee();
        repo.set_composite_scores(id, Some(70), None).unwrap();
        let employee = repo.find_by_id(id).unwrap();
        assert_eq!(employee.performance, 70);
        assert_eq!(employee.personality, 87);
    }

    #[test]
    fn delete_cascades_to_evaluations() {
        let (repo, id) = repo_with_employee();
        let store = repo.store.clone();
        store.evaluations.write().push(Evaluation {
            id: 1,
            employee_id: id,
            manager_id: 2,
            date: NaiveDate::from_ymd_opt(2023, 12, 15).unwrap(),
            status: EvaluationStatus::Pending,
            criteria_scores: vec![CriteriaScore {
                criteria_id: 1,
                score: 85,
            }],
            overall_comment: None,
            approved_by: None,
            approved_date: None,
        });

        repo.delete(id).unwrap();

        assert!(repo.find_by_id(id).is_none());
        assert!(store.evaluations.read().is_empty());
    }

    #[test]
    fn delete_unknown_employee_is_not_found() {
        let (repo, _) = repo_with_employee();
        assert!(matches!(repo.delete(999), Err(RepoError::NotFound(_))));
    }
}
