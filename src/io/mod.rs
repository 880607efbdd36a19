pub mod input;
pub mod ordering;
pub mod reporting;
