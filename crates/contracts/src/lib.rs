//! Wire contracts between the teacher administration front end and the
//! school REST API.

pub mod domain;
pub mod enums;
