//! Evaluation Category Model

use serde::{Deserialize, Serialize};

/// Evaluation criterion category
///
/// Criteria are grouped into two categories; each category aggregates into
/// its own composite score on the employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationCategory {
    Performance,
    Personality,
}

impl EvaluationCategory {
    /// Stable wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationCategory::Performance => "performance",
            EvaluationCategory::Personality => "personality",
        }
    }
}

impl std::fmt::Display for EvaluationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
