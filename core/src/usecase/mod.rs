pub mod dashboard;
pub mod year_selector;
