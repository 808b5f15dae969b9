pub mod a001_teacher_position;
pub mod a002_teacher;
pub mod common;
