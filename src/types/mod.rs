pub mod content;
pub mod error;
pub mod quiz;
pub mod response;
pub mod section;
pub mod user;
