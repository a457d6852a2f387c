use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RSectionCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RSectionUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    // no owner field on purpose: ownership is fixed at creation
}
