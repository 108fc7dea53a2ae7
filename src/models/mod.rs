pub mod common;
pub mod draft;
pub mod sport;
pub mod submission;
