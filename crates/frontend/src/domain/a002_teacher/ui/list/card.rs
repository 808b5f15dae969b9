use contracts::domain::a002_teacher::aggregate::{Degree, Teacher};
use contracts::domain::common::AggregateId;
use contracts::enums::DegreeType;
use leptos::prelude::*;
use thaw::Card;

use crate::shared::components::Tag;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;

pub const NO_POSITION: &str = "Chưa có chức vụ";
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_SCHOOL: &str = "Chưa có trường";

fn non_blank_or(value: Option<&str>, fallback: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Display projection of one degree line
#[derive(Clone, Debug, PartialEq)]
pub struct DegreeLine {
    pub type_label: String,
    pub school: String,
    pub major: String,
    pub year: String,
    pub is_graduated: bool,
}

impl From<&Degree> for DegreeLine {
    fn from(d: &Degree) -> Self {
        Self {
            type_label: d
                .degree_type
                .unwrap_or(DegreeType::Other)
                .display_name()
                .to_string(),
            school: non_blank_or(d.school.as_deref(), NO_SCHOOL),
            major: non_blank_or(d.major.as_deref(), NOT_AVAILABLE),
            year: d
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            is_graduated: d.is_graduated,
        }
    }
}

/// Display projection of a teacher card
#[derive(Clone, Debug, PartialEq)]
pub struct TeacherCardView {
    pub id: String,
    pub code: String,
    pub name: String,
    pub position_name: String,
    pub position_code: String,
    pub start_date: String,
    pub is_active: bool,
    pub role: String,
    pub degrees: Vec<DegreeLine>,
}

impl From<&Teacher> for TeacherCardView {
    fn from(t: &Teacher) -> Self {
        Self {
            id: t.id.as_string(),
            code: t.code.clone(),
            name: t.display_name().unwrap_or_default().to_string(),
            position_name: t.position_name().unwrap_or(NO_POSITION).to_string(),
            position_code: t.position_code().unwrap_or(NOT_AVAILABLE).to_string(),
            start_date: t
                .start_date
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(format_date)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            is_active: t.is_active,
            role: t.role().unwrap_or(NOT_AVAILABLE).to_string(),
            degrees: t.degrees.iter().map(DegreeLine::from).collect(),
        }
    }
}

#[component]
pub fn TeacherCard(card: TeacherCardView) -> impl IntoView {
    let (status_color, status_label) = if card.is_active {
        ("green", "Hoạt động")
    } else {
        ("red", "Không hoạt động")
    };
    let degree_count = card.degrees.len();

    view! {
        <Card class="teacher-card">
            <div class="teacher-card__header">
                <span class="teacher-card__avatar">{icon("user")}</span>
                <div>
                    <h3 class="teacher-card__code">{card.code}</h3>
                    {(!card.name.is_empty()).then(|| view! {
                        <div class="teacher-card__name">{card.name.clone()}</div>
                    })}
                    <div class="teacher-card__position">{card.position_name}</div>
                </div>
            </div>

            <dl class="teacher-card__facts">
                <dt>"Mã chức vụ"</dt>
                <dd><Tag color="purple">{card.position_code}</Tag></dd>

                <dt>{icon("calendar")} " Ngày bắt đầu"</dt>
                <dd>{card.start_date}</dd>

                <dt>"Trạng thái"</dt>
                <dd><Tag color=status_color>{status_label}</Tag></dd>

                <dt>{icon("book")} " Học vị"</dt>
                <dd>{format!("{} bằng cấp", degree_count)}</dd>

                <dt>"Vai trò"</dt>
                <dd><Tag color="cyan">{card.role}</Tag></dd>
            </dl>

            {(degree_count > 0).then(|| view! {
                <div class="teacher-card__degrees">
                    {card.degrees.into_iter().map(|d| view! {
                        <div class="degree-line">
                            <div class="degree-line__title">
                                <strong>{d.type_label}</strong>
                                {d.is_graduated.then(|| view! {
                                    <Tag color="green">"Đã tốt nghiệp"</Tag>
                                })}
                            </div>
                            <div class="degree-line__school">{d.school}</div>
                            <div class="degree-line__meta">
                                {format!("{} - {}", d.major, d.year)}
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            })}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher(json: &str) -> Teacher {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_fallbacks_for_bare_record() {
        let card = TeacherCardView::from(&teacher(r#"{"_id": "t-1", "code": "GV0001"}"#));
        assert_eq!(card.position_name, NO_POSITION);
        assert_eq!(card.position_code, NOT_AVAILABLE);
        assert_eq!(card.start_date, NOT_AVAILABLE);
        assert_eq!(card.role, NOT_AVAILABLE);
        assert!(card.is_active);
        assert!(card.degrees.is_empty());
    }

    #[test]
    fn test_populated_record() {
        let card = TeacherCardView::from(&teacher(
            r#"{
                "_id": "t-2",
                "code": "GV0002",
                "isActive": false,
                "startDate": "2023-08-21T00:00:00.000Z",
                "teacherPositionsId": {"_id": "p-1", "code": "GVBM", "name": "Giáo viên bộ môn"},
                "userId": {"_id": "u-1", "role": "TEACHER"},
                "degrees": [
                    {"type": "PhD", "school": "ĐHQG", "major": "Vật lý", "isGraduated": false},
                    {"type": "Diploma", "school": "CĐSP", "major": "Hóa", "year": 2010, "isGraduated": true}
                ]
            }"#,
        ));
        assert_eq!(card.position_name, "Giáo viên bộ môn");
        assert_eq!(card.position_code, "GVBM");
        assert_eq!(card.start_date, "21/08/2023");
        assert_eq!(card.role, "TEACHER");
        assert!(!card.is_active);
        assert_eq!(card.degrees[0].type_label, "Tiến sĩ");
        assert_eq!(card.degrees[0].year, NOT_AVAILABLE);
        assert_eq!(card.degrees[1].type_label, "Loại bằng");
        assert_eq!(card.degrees[1].year, "2010");
        assert!(card.degrees[1].is_graduated);
    }

    #[test]
    fn test_unparseable_start_date_shown_as_is() {
        let card = TeacherCardView::from(&teacher(
            r#"{"_id": "t-3", "code": "GV3", "startDate": "đầu năm học"}"#,
        ));
        assert_eq!(card.start_date, "đầu năm học");
    }

    #[test]
    fn test_position_id_only_falls_back() {
        let card = TeacherCardView::from(&teacher(
            r#"{"_id": "t-4", "code": "GV4", "teacherPositionsId": "p-9"}"#,
        ));
        assert_eq!(card.position_name, NO_POSITION);
    }

    #[test]
    fn test_blank_degree_fields_get_placeholders() {
        let card = TeacherCardView::from(&teacher(
            r#"{
                "_id": "t-5",
                "code": "GV5",
                "degrees": [
                    {"type": "Bachelor", "school": "", "major": "  "},
                    {"type": "Master"}
                ]
            }"#,
        ));
        for line in &card.degrees {
            assert_eq!(line.school, NO_SCHOOL);
            assert_eq!(line.major, NOT_AVAILABLE);
        }
    }
}
