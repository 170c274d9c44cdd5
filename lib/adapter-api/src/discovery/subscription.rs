use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Decimal rendering of the control-plane subscription id
    pub subscription_id: String,
    pub policy_id: String,
    pub api_id: i32,
    pub app_id: i32,
    pub subscription_state: String,
    pub time_stamp: i64,
    pub tenant_id: i32,
    pub tenant_domain: String,
    #[serde(rename = "subscriptionUUID")]
    pub subscription_uuid: String,
    #[serde(rename = "apiUUID")]
    pub api_uuid: String,
    #[serde(rename = "appUUID")]
    pub app_uuid: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionList {
    pub list: Vec<Subscription>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub uuid: String,
    pub id: i32,
    pub name: String,
    pub sub_id: i32,
    pub sub_name: String,
    pub policy: String,
    pub token_type: String,
    pub group_ids: Vec<String>,
    pub attributes: HashMap<String, String>,
    pub tenant_id: i32,
    pub tenant_domain: String,
    pub timestamp: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationList {
    pub list: Vec<Application>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Api {
    /// Decimal rendering of the control-plane API id
    pub api_id: String,
    pub name: String,
    pub provider: String,
    pub version: String,
    pub context: String,
    pub policy: String,
    pub api_type: String,
    pub uuid: String,
    pub is_default_version: bool,
    pub lc_state: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiList {
    pub list: Vec<Api>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPolicy {
    pub id: i32,
    pub tenant_id: i32,
    pub name: String,
    pub quota_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationPolicyList {
    pub list: Vec<ApplicationPolicy>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPolicy {
    pub id: i32,
    pub tenant_id: i32,
    pub name: String,
    pub quota_type: String,
    #[serde(rename = "graphQLMaxComplexity")]
    pub graphql_max_complexity: i32,
    #[serde(rename = "graphQLMaxDepth")]
    pub graphql_max_depth: i32,
    pub rate_limit_count: i32,
    pub rate_limit_time_unit: String,
    pub stop_on_quota_reach: bool,
    pub tenant_domain: String,
    pub timestamp: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPolicyList {
    pub list: Vec<SubscriptionPolicy>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationKeyMapping {
    pub consumer_key: String,
    pub key_type: String,
    pub key_manager: String,
    pub application_id: i32,
    #[serde(rename = "applicationUUID")]
    pub application_uuid: String,
    pub tenant_id: i32,
    pub tenant_domain: String,
    pub timestamp: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationKeyMappingList {
    pub list: Vec<ApplicationKeyMapping>,
}
