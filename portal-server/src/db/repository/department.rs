//! Department Repository

use std::sync::Arc;

use super::{RepoError, RepoResult};
use crate::db::PortalStore;
use crate::db::models::{Department, DepartmentCreate, DepartmentUpdate};

const RESOURCE: &str = "department";

#[derive(Clone)]
pub struct DepartmentRepository {
    store: Arc<PortalStore>,
}

impl DepartmentRepository {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    /// Find all departments
    pub fn find_all(&self) -> Vec<Department> {
        self.store.departments.read().clone()
    }

    /// Find department by id
    pub fn find_by_id(&self, id: u64) -> Option<Department> {
        self.store
            .departments
            .read()
            .iter()
            .find(|d| d.id == id)
            .cloned()
    }

    /// Create a new department
    pub fn create(&self, data: DepartmentCreate) -> RepoResult<Department> {
        let mut departments = self.store.departments.write();
        if departments.iter().any(|d| d.name == data.name) {
            return Err(RepoError::Duplicate(format!(
                "Department '{}' already exists",
                data.name
            )));
        }

        let department = Department {
            id: self.store.next_id(RESOURCE),
            name: data.name,
            description: data.description,
        };
        departments.push(department.clone());
        Ok(department)
    }

    /// Update a department
    pub fn update(&self, id: u64, data: DepartmentUpdate) -> RepoResult<Department> {
        let mut departments = self.store.departments.write();

        if let Some(ref new_name) = data.name
            && departments.iter().any(|d| d.id != id && &d.name == new_name)
        {
            return Err(RepoError::Duplicate(format!(
                "Department '{}' already exists",
                new_name
            )));
        }

        let department = departments
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Department {} not found", id)))?;

        if let Some(name) = data.name {
            department.name = name;
        }
        if let Some(description) = data.description {
            department.description = description;
        }

        Ok(department.clone())
    }

    /// Delete a department by id
    ///
    /// Rejected while any employee still references the department by name.
    pub fn delete(&self, id: u64) -> RepoResult<()> {
        let name = self
            .find_by_id(id)
            .ok_or_else(|| RepoError::NotFound(format!("Department {} not found", id)))?
            .name;

        let referencing = self
            .store
            .employees
            .read()
            .iter()
            .filter(|e| e.department == name)
            .count();
        if referencing > 0 {
            return Err(RepoError::BusinessRule(format!(
                "Department '{}' still has {} employee(s)",
                name, referencing
            )));
        }

        self.store.departments.write().retain(|d| d.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::EmployeeCreate;
    use crate::db::repository::EmployeeRepository;
    use chrono::NaiveDate;

    fn make_department(name: &str) -> DepartmentCreate {
        DepartmentCreate {
            name: name.to_string(),
            description: "Departemen perusahaan".to_string(),
        }
    }

    #[test]
    fn delete_with_referencing_employee_is_rejected() {
        let store = Arc::new(PortalStore::new());
        let departments = DepartmentRepository::new(store.clone());
        let employees = EmployeeRepository::new(store);

        let dept = departments.create(make_department("Pemasaran")).unwrap();
        employees
            .create(EmployeeCreate {
                name: "Budi Santoso".to_string(),
                position: "Manager Pemasaran".to_string(),
                department: "Pemasaran".to_string(),
                hire_date: NaiveDate::from_ymd_opt(2020, 5, 15).unwrap(),
                avatar: None,
                performance: None,
                personality: None,
            })
            .unwrap();

        let err = departments.delete(dept.id).unwrap_err();
        assert!(matches!(err, RepoError::BusinessRule(_)));
        assert!(departments.find_by_id(dept.id).is_some());
    }

    #[test]
    fn delete_without_references_succeeds() {
        let departments = DepartmentRepository::new(Arc::new(PortalStore::new()));
        let dept = departments.create(make_department("Keuangan")).unwrap();
        departments.delete(dept.id).unwrap();
        assert!(departments.find_by_id(dept.id).is_none());
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let departments = DepartmentRepository::new(Arc::new(PortalStore::new()));
        departments.create(make_department("Keuangan")).unwrap();
        assert!(matches!(
            departments.create(make_department("Keuangan")),
            Err(RepoError::Duplicate(_))
        ));
    }
}
