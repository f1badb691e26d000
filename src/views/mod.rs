pub mod dashboard;
pub mod support;
