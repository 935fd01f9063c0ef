pub mod calendar_service;
pub mod dto;
pub mod repo_service;
pub mod stats_service;
