pub mod degree_type;
pub mod position_status;

pub use degree_type::DegreeType;
pub use position_status::PositionStatus;
