use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_teacher_position::aggregate::TeacherPositionId;
use crate::domain::common::nullable;
use crate::enums::DegreeType;
use crate::string_id;

// ============================================================================
// ID Type
// ============================================================================

string_id!(
    /// Unique identifier of a teacher
    TeacherId
);

// ============================================================================
// References
// ============================================================================

/// Position a teacher is assigned to.
///
/// The client writes a bare identifier; the list endpoint echoes the
/// populated position back as an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionRef {
    Id(TeacherPositionId),
    Embedded(PositionSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSummary {
    #[serde(rename = "_id", default)]
    pub id: Option<TeacherPositionId>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// User account linked to a teacher; only read for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Id(String),
    Embedded(UserSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

// ============================================================================
// Aggregate
// ============================================================================

/// Academic degree embedded in a teacher record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Degree {
    #[serde(rename = "type", default)]
    pub degree_type: Option<DegreeType>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub is_graduated: bool,
}

/// Teacher record as returned by `GET /teachers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    #[serde(rename = "_id")]
    pub id: TeacherId,

    #[serde(default, deserialize_with = "nullable::or_default")]
    pub code: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub dob: Option<String>,

    #[serde(default)]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// National identity number
    #[serde(default)]
    pub identity: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default = "nullable::default_true", deserialize_with = "nullable::or_true")]
    pub is_active: bool,

    #[serde(default, deserialize_with = "nullable::or_default")]
    pub is_deleted: bool,

    #[serde(rename = "teacherPositionsId", default)]
    pub position: Option<PositionRef>,

    #[serde(rename = "userId", default)]
    pub user: Option<UserRef>,

    #[serde(default, deserialize_with = "nullable::or_default")]
    pub degrees: Vec<Degree>,
}


impl Teacher {
    fn position_summary(&self) -> Option<&PositionSummary> {
        match &self.position {
            Some(PositionRef::Embedded(summary)) => Some(summary),
            _ => None,
        }
    }

    fn user_summary(&self) -> Option<&UserSummary> {
        match &self.user {
            Some(UserRef::Embedded(summary)) => Some(summary),
            _ => None,
        }
    }

    /// Name of the assigned position, when the server populated it
    pub fn position_name(&self) -> Option<&str> {
        self.position_summary()
            .and_then(|p| p.name.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// Code of the assigned position, when the server populated it
    pub fn position_code(&self) -> Option<&str> {
        self.position_summary()
            .and_then(|p| p.code.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// Role of the linked user account
    pub fn role(&self) -> Option<&str> {
        self.user_summary()
            .and_then(|u| u.role.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// Teacher name, falling back to the linked user's name
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.user_summary().and_then(|u| u.name.as_deref()))
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Query string of `GET /teachers`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherListQuery {
    pub page: u32,
    pub limit: u32,
}

/// Degree entry of a creation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDegreeDto {
    #[serde(rename = "type")]
    pub degree_type: DegreeType,
    pub school: String,
    pub major: String,
    pub year: i32,
    pub is_graduated: bool,
}

/// Body of `POST /teachers/newTeacher`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeacherDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    pub phone_number: String,
    pub email: String,
    pub identity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub teacher_positions_id: TeacherPositionId,
    pub degrees: Vec<NewDegreeDto>,
    pub start_date: String,
    pub is_active: bool,
    pub is_deleted: bool,
}

/// Wire format of every date the client writes
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a date the way the API expects it (`YYYY-MM-DD`)
pub fn wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}
