use serde::{Deserialize, Serialize};

use crate::domain::common::nullable;
use crate::enums::PositionStatus;
use crate::string_id;

// ============================================================================
// ID Type
// ============================================================================

string_id!(
    /// Unique identifier of a teacher position
    TeacherPositionId
);

// ============================================================================
// Aggregate
// ============================================================================

/// Teacher position (job title) reference record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherPosition {
    #[serde(rename = "_id")]
    pub id: TeacherPositionId,

    #[serde(default, deserialize_with = "nullable::or_default")]
    pub code: String,

    #[serde(default, deserialize_with = "nullable::or_default")]
    pub name: String,

    #[serde(rename = "des", default)]
    pub description: Option<String>,

    #[serde(default = "nullable::default_true", deserialize_with = "nullable::or_true")]
    pub is_active: bool,

    #[serde(default, deserialize_with = "nullable::or_default")]
    pub is_deleted: bool,
}

// ============================================================================
// DTO
// ============================================================================

/// Body of `POST /teacherPosition/newTeacherPosition`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTeacherPositionDto {
    pub name: String,
    pub code: String,
    pub des: String,
    pub status: bool,
}

impl CreateTeacherPositionDto {
    pub fn new(name: &str, code: &str, description: &str, status: PositionStatus) -> Self {
        Self {
            name: name.trim().to_string(),
            code: code.trim().to_string(),
            des: description.trim().to_string(),
            status: status.is_active(),
        }
    }
}
