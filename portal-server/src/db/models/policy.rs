//! Policy Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Company policy entry (read-only catalog, seeded at startup)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub last_updated: NaiveDate,
}
