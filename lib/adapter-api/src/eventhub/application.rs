use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A consumer application registered in the control plane
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub id: i32,
    pub uuid: String,
    pub name: String,
    /// Owning subscriber
    pub sub_name: String,
    pub policy: String,
    pub token_type: String,
    pub group_ids: Vec<String>,
    pub attributes: HashMap<String, String>,
    pub tenant_id: i32,
    pub tenant_domain: String,
    pub time_stamp: i64,
}

/// Binds an OAuth consumer key to an application
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationKeyMapping {
    pub application_id: i32,
    #[serde(rename = "applicationUUID")]
    pub application_uuid: String,
    pub consumer_key: String,
    /// PRODUCTION or SANDBOX
    pub key_type: String,
    /// Name of the key manager that issued the key
    pub key_manager: String,
    pub tenant_id: i32,
    pub tenant_domain: String,
    pub time_stamp: i64,
}
