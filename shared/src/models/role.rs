//! Role Model

use serde::{Deserialize, Serialize};

/// Portal user role
///
/// The portal has exactly four fixed roles. Role is assigned at user
/// creation and immutable afterwards.
///
/// | Role | Description |
/// |------|-------------|
/// | `admin` | Full management access |
/// | `manager` | Manages employees, criteria, submits evaluations |
/// | `karyawan` | Regular employee; uploads supporting documents |
/// | `pemimpin` | Leadership; approves or rejects evaluations |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Karyawan,
    Pemimpin,
}

impl Role {
    /// Stable wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Karyawan => "karyawan",
            Role::Pemimpin => "pemimpin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "karyawan" => Ok(Role::Karyawan),
            "pemimpin" => Ok(Role::Pemimpin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}
