//! Declarative field validation for the creation forms.
//!
//! Each form lists its fields with the rules that apply; the first failing
//! rule of a field produces that field's message.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::date_utils::parse_year;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-blank after trimming
    Required,
    /// Well-formed address; blank values are left to `Required`
    Email,
    /// Year picker value within [`MIN_YEAR`]..=[`MAX_YEAR`]; blank values are left to `Required`
    Year,
}

impl Rule {
    pub fn accepts(&self, value: &str) -> bool {
        let value = value.trim();
        match self {
            Rule::Required => !value.is_empty(),
            Rule::Email => value.is_empty() || EMAIL_RE.is_match(value),
            Rule::Year => {
                value.is_empty()
                    || parse_year(value).is_some_and(|y| (MIN_YEAR..=MAX_YEAR).contains(&y))
            }
        }
    }
}

/// Rules of one form field
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [(Rule, &'static str)],
}

impl FieldRules {
    /// Message of the first rule `value` breaks
    pub fn check(&self, value: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|(rule, _)| !rule.accepts(value))
            .map(|(_, message)| *message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks `value` against `rules`, recording the failure under `field`
    pub fn check(&mut self, field: impl Into<String>, rules: &FieldRules, value: &str) {
        if let Some(message) = rules.check(value) {
            self.errors.push(FieldError {
                field: field.into(),
                message: message.to_string(),
            });
        }
    }

    /// Records a failure found outside the declarative rules
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: FieldRules = FieldRules {
        field: "email",
        rules: &[(Rule::Required, "required"), (Rule::Email, "bad email")],
    };

    #[test]
    fn test_first_failing_rule_wins() {
        assert_eq!(EMAIL.check(""), Some("required"));
        assert_eq!(EMAIL.check("   "), Some("required"));
        assert_eq!(EMAIL.check("not-an-email"), Some("bad email"));
        assert_eq!(EMAIL.check("a.b@school.edu.vn"), None);
    }

    #[test]
    fn test_email_rule() {
        assert!(Rule::Email.accepts("gv01@thpt.edu.vn"));
        assert!(!Rule::Email.accepts("gv01@thpt"));
        assert!(!Rule::Email.accepts("@thpt.edu.vn"));
        assert!(!Rule::Email.accepts("gv 01@thpt.edu.vn"));
    }

    #[test]
    fn test_year_rule() {
        assert!(Rule::Year.accepts("2010"));
        assert!(Rule::Year.accepts(""));
        assert!(!Rule::Year.accepts("1850"));
        assert!(!Rule::Year.accepts("20x0"));
    }

    #[test]
    fn test_errors_collect_per_field() {
        let mut errors = ValidationErrors::new();
        errors.check(EMAIL.field, &EMAIL, "");
        errors.check("degrees[0].email", &EMAIL, "x@y.vn");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("required"));
        assert_eq!(errors.get("degrees[0].email"), None);
        assert!(errors.into_result().is_err());
    }
}
