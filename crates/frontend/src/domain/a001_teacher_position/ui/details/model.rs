use contracts::domain::a001_teacher_position::aggregate::CreateTeacherPositionDto;
use contracts::enums::PositionStatus;

use crate::shared::validation::{FieldRules, Rule, ValidationErrors};

pub const NAME_RULES: FieldRules = FieldRules {
    field: "name",
    rules: &[(Rule::Required, "Vui lòng nhập Tên!")],
};

pub const CODE_RULES: FieldRules = FieldRules {
    field: "code",
    rules: &[(Rule::Required, "Vui lòng nhập Mã!")],
};

pub const DESCRIPTION_RULES: FieldRules = FieldRules {
    field: "description",
    rules: &[(Rule::Required, "Vui lòng nhập Mô tả!")],
};

pub const STATUS_RULES: FieldRules = FieldRules {
    field: "status",
    rules: &[(Rule::Required, "Vui lòng chọn trạng thái!")],
};

/// Raw values of the position form
#[derive(Debug, Clone, PartialEq)]
pub struct PositionForm {
    pub name: String,
    pub code: String,
    pub description: String,
    pub status: Option<PositionStatus>,
}

impl Default for PositionForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            description: String::new(),
            status: Some(PositionStatus::Active),
        }
    }
}

impl PositionForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(NAME_RULES.field, &NAME_RULES, &self.name);
        errors.check(CODE_RULES.field, &CODE_RULES, &self.code);
        errors.check(DESCRIPTION_RULES.field, &DESCRIPTION_RULES, &self.description);
        errors.check(
            STATUS_RULES.field,
            &STATUS_RULES,
            self.status.map(|s| s.code()).unwrap_or_default(),
        );
        errors.into_result()
    }

    /// Validated creation payload
    pub fn build_payload(&self) -> Result<CreateTeacherPositionDto, ValidationErrors> {
        self.validate()?;
        let status = self.status.unwrap_or_default();
        Ok(CreateTeacherPositionDto::new(
            &self.name,
            &self.code,
            &self.description,
            status,
        ))
    }
}
