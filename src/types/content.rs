use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RContentCreate {
    pub section: Uuid,
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RContentUpdate {
    pub title: Option<String>,
    pub text: Option<String>,
    pub file: Option<String>,
    // no section field: contents cannot be reparented
}
