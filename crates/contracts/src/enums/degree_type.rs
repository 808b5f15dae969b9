use serde::{Deserialize, Serialize};

/// Academic degree level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegreeType {
    Bachelor,
    Master,
    PhD,
    /// Any value the server sends that this client does not know about.
    /// Never offered in the creation form.
    #[serde(other)]
    Other,
}

impl DegreeType {
    /// Wire code of the degree type
    pub fn code(&self) -> &'static str {
        match self {
            DegreeType::Bachelor => "Bachelor",
            DegreeType::Master => "Master",
            DegreeType::PhD => "PhD",
            DegreeType::Other => "Other",
        }
    }

    /// Human readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            DegreeType::Bachelor => "Cử nhân",
            DegreeType::Master => "Thạc sĩ",
            DegreeType::PhD => "Tiến sĩ",
            DegreeType::Other => "Loại bằng",
        }
    }

    /// Types selectable when creating a teacher
    pub fn all() -> Vec<DegreeType> {
        vec![DegreeType::Bachelor, DegreeType::Master, DegreeType::PhD]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Bachelor" => Some(DegreeType::Bachelor),
            "Master" => Some(DegreeType::Master),
            "PhD" => Some(DegreeType::PhD),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_for_selectable_types() {
        for t in DegreeType::all() {
            assert_eq!(DegreeType::from_code(t.code()), Some(t));
        }
        assert_eq!(DegreeType::from_code("Diploma"), None);
    }

    #[test]
    fn test_unknown_wire_value_reads_as_other() {
        let t: DegreeType = serde_json::from_str("\"Diploma\"").unwrap();
        assert_eq!(t, DegreeType::Other);
        let t: DegreeType = serde_json::from_str("\"PhD\"").unwrap();
        assert_eq!(t, DegreeType::PhD);
    }
}
