pub mod form_field;
pub mod outcome_banner;
pub mod pagination_controls;
pub mod tag;

pub use form_field::{FormField, RadioButtons, SelectInput, TextArea, TextInput};
pub use outcome_banner::OutcomeBanner;
pub use pagination_controls::PaginationControls;
pub use tag::Tag;
