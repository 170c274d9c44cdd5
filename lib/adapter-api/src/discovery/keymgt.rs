use serde::{Deserialize, Serialize};

/// Key manager record as consumed by the enforcer
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyManagerConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub key_manager_type: String,
    pub enabled: bool,
    pub tenant_domain: String,
    /// Provider settings, encoded as JSON text
    pub configuration: String,
}
