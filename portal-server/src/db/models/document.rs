//! Document Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Document review status
///
/// Advances only forward (`pending -> reviewed -> approved`) and only via an
/// explicit review action; there are no automatic transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Reviewed,
    Approved,
}

impl DocumentStatus {
    fn rank(&self) -> u8 {
        match self {
            DocumentStatus::Pending => 0,
            DocumentStatus::Reviewed => 1,
            DocumentStatus::Approved => 2,
        }
    }

    /// Whether a review action may move this status to `target`
    pub fn can_advance_to(&self, target: DocumentStatus) -> bool {
        target.rank() > self.rank()
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Reviewed => "reviewed",
            DocumentStatus::Approved => "approved",
        };
        f.write_str(s)
    }
}

/// Supporting document metadata
///
/// No file bytes are stored or transported; the record tracks the metadata
/// an employee supplies and the review trail on top of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub file_name: String,
    pub file_type: String,
    pub upload_date: NaiveDate,
    /// User id of the uploader
    pub uploaded_by: u64,
    pub employee_id: u64,
    pub category: String,
    pub status: DocumentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Upload document payload (metadata only)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCreate {
    pub title: String,
    pub description: String,
    pub file_name: String,
    pub file_type: String,
    pub employee_id: u64,
    pub category: String,
}

/// Review document payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReview {
    pub status: DocumentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}
