//! Teacher creation UI Module
//!
//! - model.rs: form values, degree rows, validation rules, payload shaping
//! - view_model.rs: position lookup and submission lifecycle
//! - degrees.rs: degree rows editor
//! - view.rs: Leptos component (pure UI)

mod degrees;
mod model;
mod view;
mod view_model;

pub use model::{DegreeRow, TeacherForm};
pub use view::TeacherDetails;
pub use view_model::TeacherFormViewModel;
