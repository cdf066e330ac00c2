//! Small helpers shared by the report and progress output

pub mod string;
