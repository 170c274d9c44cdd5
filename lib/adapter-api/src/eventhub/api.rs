use serde::{Deserialize, Serialize};

/// A published API as known to the subscription store
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Api {
    pub api_id: i32,
    pub uuid: String,
    pub name: String,
    pub provider: String,
    pub version: String,
    pub context: String,
    pub policy: String,
    pub api_type: String,
    pub is_default_version: bool,
    /// Lifecycle state (PUBLISHED, DEPRECATED, ...)
    #[serde(rename = "status")]
    pub api_status: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiList {
    pub list: Vec<Api>,
}
