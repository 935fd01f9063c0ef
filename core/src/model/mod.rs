pub mod calendar;
pub mod contribution;
pub mod profile;
pub mod summary;
