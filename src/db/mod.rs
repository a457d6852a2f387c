pub mod content;
pub mod postgres_service;
pub mod quiz;
pub mod section;
pub mod user;
