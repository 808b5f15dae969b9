use serde::{Deserialize, Serialize};

/// Status choice offered when creating a teacher position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    #[default]
    Active,
    Inactive,
}

impl PositionStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PositionStatus::Active => "active",
            PositionStatus::Inactive => "inactive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PositionStatus::Active => "Hoạt động",
            PositionStatus::Inactive => "Ngừng",
        }
    }

    pub fn all() -> Vec<PositionStatus> {
        vec![PositionStatus::Active, PositionStatus::Inactive]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(PositionStatus::Active),
            "inactive" => Some(PositionStatus::Inactive),
            _ => None,
        }
    }

    /// Boolean `status` sent to the API
    pub fn is_active(&self) -> bool {
        matches!(self, PositionStatus::Active)
    }
}
