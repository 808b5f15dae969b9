use chrono::NaiveDate;
use contracts::domain::a001_teacher_position::aggregate::TeacherPositionId;
use contracts::domain::a002_teacher::aggregate::{wire_date, CreateTeacherDto, NewDegreeDto};
use contracts::enums::DegreeType;

use crate::shared::date_utils::{parse_date, parse_year};
use crate::shared::validation::{FieldRules, Rule, ValidationErrors};

pub const NAME_RULES: FieldRules = FieldRules {
    field: "name",
    rules: &[(Rule::Required, "Vui lòng nhập họ và tên!")],
};

pub const DOB_RULES: FieldRules = FieldRules {
    field: "dob",
    rules: &[(Rule::Required, "Vui lòng chọn ngày sinh!")],
};

pub const PHONE_RULES: FieldRules = FieldRules {
    field: "phoneNumber",
    rules: &[(Rule::Required, "Vui lòng nhập số điện thoại!")],
};

pub const EMAIL_RULES: FieldRules = FieldRules {
    field: "email",
    rules: &[
        (Rule::Required, "Vui lòng nhập Email!"),
        (Rule::Email, "Email không hợp lệ!"),
    ],
};

pub const IDENTITY_RULES: FieldRules = FieldRules {
    field: "identity",
    rules: &[(Rule::Required, "Vui lòng nhập số CCCD!")],
};

pub const POSITION_RULES: FieldRules = FieldRules {
    field: "teacherPositionsId",
    rules: &[(Rule::Required, "Vui lòng chọn vị trí công tác!")],
};

pub const DEGREE_TYPE_RULES: FieldRules = FieldRules {
    field: "type",
    rules: &[(Rule::Required, "Chọn bậc")],
};

pub const SCHOOL_RULES: FieldRules = FieldRules {
    field: "school",
    rules: &[(Rule::Required, "Nhập trường")],
};

pub const MAJOR_RULES: FieldRules = FieldRules {
    field: "major",
    rules: &[(Rule::Required, "Nhập ngành")],
};

pub const GRADUATED_RULES: FieldRules = FieldRules {
    field: "isGraduated",
    rules: &[(Rule::Required, "Chọn trạng thái")],
};

pub const YEAR_RULES: FieldRules = FieldRules {
    field: "year",
    rules: &[(Rule::Required, "Chọn năm"), (Rule::Year, "Năm không hợp lệ")],
};

/// Options of the graduation status select
pub const GRADUATED_OPTIONS: [(&str, &str); 2] = [("true", "Đã tốt nghiệp"), ("false", "Đang học")];

/// Error key of one field of one degree row
pub fn degree_field(key: u32, field: &str) -> String {
    format!("degrees.{}.{}", key, field)
}

/// One editable degree row; `key` is stable across removals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DegreeRow {
    pub key: u32,
    /// `DegreeType` code, empty until chosen
    pub degree_type: String,
    pub school: String,
    pub major: String,
    /// "true" / "false", empty until chosen
    pub is_graduated: String,
    /// Year picker value: "YYYY" or an ISO date
    pub year: String,
}

impl DegreeRow {
    pub fn empty(key: u32) -> Self {
        Self {
            key,
            ..Self::default()
        }
    }

    /// Checks the row and converts it; failures land in `errors`
    fn to_dto(&self, errors: &mut ValidationErrors) -> Option<NewDegreeDto> {
        let before = errors.len();
        for (rules, value) in [
            (DEGREE_TYPE_RULES, &self.degree_type),
            (SCHOOL_RULES, &self.school),
            (MAJOR_RULES, &self.major),
            (GRADUATED_RULES, &self.is_graduated),
            (YEAR_RULES, &self.year),
        ] {
            errors.check(degree_field(self.key, rules.field), &rules, value);
        }
        if errors.len() > before {
            return None;
        }

        let Some(degree_type) = DegreeType::from_code(self.degree_type.trim()) else {
            errors.push(degree_field(self.key, DEGREE_TYPE_RULES.field), "Chọn bậc");
            return None;
        };
        let is_graduated = match self.is_graduated.trim() {
            "true" => true,
            "false" => false,
            _ => {
                errors.push(degree_field(self.key, GRADUATED_RULES.field), "Chọn trạng thái");
                return None;
            }
        };
        let year = parse_year(&self.year)?;

        Some(NewDegreeDto {
            degree_type,
            school: self.school.trim().to_string(),
            major: self.major.trim().to_string(),
            year,
            is_graduated,
        })
    }
}

/// Raw values of the teacher creation form
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherForm {
    pub name: String,
    /// `YYYY-MM-DD` from the date input, empty until chosen
    pub dob: String,
    pub phone_number: String,
    pub email: String,
    pub identity: String,
    pub address: String,
    /// Selected position identifier
    pub position_id: String,
    pub degrees: Vec<DegreeRow>,
    next_key: u32,
}

impl Default for TeacherForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            dob: String::new(),
            phone_number: String::new(),
            email: String::new(),
            identity: String::new(),
            address: String::new(),
            position_id: String::new(),
            degrees: vec![DegreeRow::empty(0)],
            next_key: 1,
        }
    }
}

impl TeacherForm {
    /// Appends an empty degree row
    pub fn add_degree(&mut self) {
        self.degrees.push(DegreeRow::empty(self.next_key));
        self.next_key += 1;
    }

    /// Drops the row with `key`; the list may become empty
    pub fn remove_degree(&mut self, key: u32) {
        self.degrees.retain(|d| d.key != key);
    }

    pub fn degree_mut(&mut self, key: u32) -> Option<&mut DegreeRow> {
        self.degrees.iter_mut().find(|d| d.key == key)
    }

    /// Validated creation payload, stamped with `today` as the start date
    pub fn build_payload(&self, today: NaiveDate) -> Result<CreateTeacherDto, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(NAME_RULES.field, &NAME_RULES, &self.name);
        errors.check(DOB_RULES.field, &DOB_RULES, &self.dob);
        errors.check(PHONE_RULES.field, &PHONE_RULES, &self.phone_number);
        errors.check(EMAIL_RULES.field, &EMAIL_RULES, &self.email);
        errors.check(IDENTITY_RULES.field, &IDENTITY_RULES, &self.identity);
        errors.check(POSITION_RULES.field, &POSITION_RULES, &self.position_id);

        let dob = parse_date(&self.dob);
        if dob.is_none() && errors.get(DOB_RULES.field).is_none() {
            errors.push(DOB_RULES.field, "Ngày sinh không hợp lệ!");
        }

        let degrees: Vec<NewDegreeDto> = self
            .degrees
            .iter()
            .filter_map(|row| row.to_dto(&mut errors))
            .collect();
        errors.into_result()?;

        let address = self.address.trim();
        Ok(CreateTeacherDto {
            name: self.name.trim().to_string(),
            dob: dob.map(wire_date),
            phone_number: self.phone_number.trim().to_string(),
            email: self.email.trim().to_string(),
            identity: self.identity.trim().to_string(),
            address: (!address.is_empty()).then(|| address.to_string()),
            teacher_positions_id: TeacherPositionId(self.position_id.trim().to_string()),
            degrees,
            start_date: wire_date(today),
            is_active: true,
            is_deleted: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn complete_form() -> TeacherForm {
        let mut form = TeacherForm {
            name: "Trần Thị B".to_string(),
            dob: "1990-05-02".to_string(),
            phone_number: "0912345678".to_string(),
            email: "tranthib@thpt.edu.vn".to_string(),
            identity: "001190000123".to_string(),
            address: "  ".to_string(),
            position_id: "p-01".to_string(),
            ..TeacherForm::default()
        };
        form.degrees[0] = DegreeRow {
            key: 0,
            degree_type: "Master".to_string(),
            school: "ĐHSP Hà Nội".to_string(),
            major: "Toán".to_string(),
            is_graduated: "true".to_string(),
            year: "2015".to_string(),
        };
        form
    }

    #[test]
    fn test_starts_with_one_empty_degree() {
        let form = TeacherForm::default();
        assert_eq!(form.degrees, vec![DegreeRow::empty(0)]);
    }

    #[test]
    fn test_payload_shape() {
        let dto = complete_form().build_payload(today()).unwrap();
        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["startDate"], json!("2025-03-14"));
        assert_eq!(value["dob"], json!("1990-05-02"));
        assert_eq!(value["isActive"], json!(true));
        assert_eq!(value["isDeleted"], json!(false));
        assert_eq!(value["teacherPositionsId"], json!("p-01"));
        assert_eq!(
            value["degrees"][0],
            json!({
                "type": "Master",
                "school": "ĐHSP Hà Nội",
                "major": "Toán",
                "year": 2015,
                "isGraduated": true
            })
        );
        assert!(value.get("address").is_none());
    }

    #[test]
    fn test_year_picker_date_value_becomes_year() {
        let mut form = complete_form();
        form.degrees[0].year = "2008-01-01".to_string();
        form.degrees[0].is_graduated = "false".to_string();
        let dto = form.build_payload(today()).unwrap();
        assert_eq!(dto.degrees[0].year, 2008);
        assert!(!dto.degrees[0].is_graduated);
    }

    #[test]
    fn test_missing_fields_reported_per_field() {
        let mut form = complete_form();
        form.email = "khong-phai-email".to_string();
        form.position_id.clear();
        form.add_degree();

        let errors = form.build_payload(today()).unwrap_err();
        assert_eq!(errors.get("email"), Some("Email không hợp lệ!"));
        assert_eq!(
            errors.get("teacherPositionsId"),
            Some("Vui lòng chọn vị trí công tác!")
        );
        assert_eq!(errors.get(&degree_field(1, "school")), Some("Nhập trường"));
        assert_eq!(errors.get(&degree_field(1, "year")), Some("Chọn năm"));
        assert_eq!(errors.get(&degree_field(0, "school")), None);
    }

    #[test]
    fn test_implausible_year_rejected() {
        let mut form = complete_form();
        form.degrees[0].year = "215".to_string();
        let errors = form.build_payload(today()).unwrap_err();
        assert_eq!(errors.get(&degree_field(0, "year")), Some("Năm không hợp lệ"));
    }

    #[test]
    fn test_keys_survive_removal() {
        let mut form = TeacherForm::default();
        form.add_degree();
        form.add_degree();
        form.remove_degree(1);
        let keys: Vec<u32> = form.degrees.iter().map(|d| d.key).collect();
        assert_eq!(keys, vec![0, 2]);

        form.add_degree();
        assert_eq!(form.degrees.last().unwrap().key, 3);
    }

    #[test]
    fn test_all_rows_may_be_removed() {
        let mut form = complete_form();
        form.remove_degree(0);
        let dto = form.build_payload(today()).unwrap();
        assert!(dto.degrees.is_empty());
    }
}
