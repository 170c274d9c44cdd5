use serde::{Deserialize, Serialize};

/// Throttling policy applied per application
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationPolicy {
    pub id: i32,
    pub tenant_id: i32,
    pub name: String,
    pub quota_type: String,
}

/// Throttling policy applied per subscription
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
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
    pub time_stamp: i64,
}
