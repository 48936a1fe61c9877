//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee record
///
/// `performance` and `personality` are composite scores on a 0-100 scale,
/// recomputed whenever a new evaluation is recorded against this employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u64,
    pub name: String,
    pub position: String,
    /// Department reference, by name
    pub department: String,
    pub hire_date: NaiveDate,
    pub avatar: String,
    pub performance: u8,
    pub personality: u8,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub name: String,
    pub position: String,
    pub department: String,
    pub hire_date: NaiveDate,
    pub avatar: Option<String>,
    /// Initial composite scores; default to 0 until the first evaluation lands
    pub performance: Option<u8>,
    pub personality: Option<u8>,
}

/// Update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
