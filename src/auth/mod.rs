pub mod identity;
pub mod policy;
