use serde::{Deserialize, Serialize};

/// An application's subscription to an API under a throttling policy
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subscription {
    pub subscription_id: i32,
    pub policy_id: String,
    pub api_id: i32,
    pub app_id: i32,
    /// e.g. UNBLOCKED, BLOCKED, PROD_ONLY_BLOCKED
    pub subscription_state: String,
    pub time_stamp: i64,
    pub tenant_id: i32,
    /// Empty when the control plane did not scope the event
    pub tenant_domain: String,
    #[serde(rename = "subscriptionUUID")]
    pub subscription_uuid: String,
    #[serde(rename = "apiUUID")]
    pub api_uuid: String,
    #[serde(rename = "applicationUUID")]
    pub application_uuid: String,
}
