//! Teacher Position creation UI Module
//!
//! MVVM split as in the other detail screens:
//! - model.rs: form values, validation rules, payload shaping
//! - view_model.rs: submission lifecycle and state
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use model::PositionForm;
pub use view::TeacherPositionDetails;
pub use view_model::PositionFormViewModel;
