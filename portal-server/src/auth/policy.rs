//! Access Policy Definitions
//!
//! The single action -> allowed-roles table for the portal, consumed by the
//! route middleware and by in-handler checks alike. Every protected
//! operation names one of these constants; there are no ad hoc role
//! booleans anywhere else.
//!
//! ## 设计原则
//! - 读取操作（政策、员工名录、考核结果）登录即可，不限角色
//! - 写操作按动作授权，而不是按页面
//! - karyawan 对他人考核结果只读：读取全员放开，写入仅限下表

use shared::Role;

use crate::auth::CurrentUser;

/// Any authenticated user; the empty set means no role restriction
pub const ANY_AUTHENTICATED: &[Role] = &[];

/// Create/edit/delete employee records
pub const EMPLOYEE_MANAGE: &[Role] = &[Role::Admin, Role::Manager];

/// Create/edit/delete evaluation criteria
pub const CRITERIA_MANAGE: &[Role] = &[Role::Admin, Role::Manager];

/// Create/edit/delete departments
pub const DEPARTMENT_MANAGE: &[Role] = &[Role::Admin, Role::Manager];

/// Submit an evaluation for an employee
pub const EVALUATION_SUBMIT: &[Role] = &[Role::Admin, Role::Manager];

/// Approve or reject a pending evaluation
pub const EVALUATION_APPROVE: &[Role] = &[Role::Pemimpin];

/// Upload a supporting document
pub const DOCUMENT_UPLOAD: &[Role] = &[Role::Karyawan];

/// Review/approve an uploaded document
pub const DOCUMENT_REVIEW: &[Role] = &[Role::Admin, Role::Manager, Role::Pemimpin];

/// The single authorization predicate
///
/// True iff `allowed` is empty (any authenticated user) or the user's role
/// is in `allowed`. An absent user is always denied, never a panic.
pub fn has_role(user: Option<&CurrentUser>, allowed: &[Role]) -> bool {
    match user {
        None => false,
        Some(user) => allowed.is_empty() || allowed.contains(&user.role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(role: Role) -> CurrentUser {
        CurrentUser {
            id: 1,
            name: "Budi Santoso".to_string(),
            email: "budi@hrmetric.com".to_string(),
            role,
        }
    }

    #[test]
    fn absent_user_is_denied_without_panicking() {
        assert!(!has_role(None, &[Role::Admin]));
        assert!(!has_role(None, ANY_AUTHENTICATED));
    }

    #[test]
    fn empty_set_admits_any_authenticated_user() {
        for role in [Role::Admin, Role::Manager, Role::Karyawan, Role::Pemimpin] {
            assert!(has_role(Some(&make_user(role)), ANY_AUTHENTICATED));
        }
    }

    #[test]
    fn policy_table_matches_the_access_matrix() {
        let admin = make_user(Role::Admin);
        let manager = make_user(Role::Manager);
        let karyawan = make_user(Role::Karyawan);
        let pemimpin = make_user(Role::Pemimpin);

        for allowed in [EMPLOYEE_MANAGE, CRITERIA_MANAGE, EVALUATION_SUBMIT] {
            assert!(has_role(Some(&admin), allowed));
            assert!(has_role(Some(&manager), allowed));
            assert!(!has_role(Some(&karyawan), allowed));
            assert!(!has_role(Some(&pemimpin), allowed));
        }

        assert!(!has_role(Some(&admin), EVALUATION_APPROVE));
        assert!(!has_role(Some(&manager), EVALUATION_APPROVE));
        assert!(has_role(Some(&pemimpin), EVALUATION_APPROVE));

        assert!(has_role(Some(&karyawan), DOCUMENT_UPLOAD));
        assert!(!has_role(Some(&admin), DOCUMENT_UPLOAD));

        assert!(has_role(Some(&admin), DOCUMENT_REVIEW));
        assert!(has_role(Some(&pemimpin), DOCUMENT_REVIEW));
        assert!(!has_role(Some(&karyawan), DOCUMENT_REVIEW));
    }
}
