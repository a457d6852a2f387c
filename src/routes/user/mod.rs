pub mod detail;
pub mod list_create;
pub mod regenerate;
