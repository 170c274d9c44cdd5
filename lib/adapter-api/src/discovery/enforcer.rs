use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Enforcer configuration resource
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub jwt_generator: JwtGenerator,
    pub jwt_issuer: JwtIssuer,
    pub auth_service: Service,
    pub security: Security,
    pub cache: Cache,
    pub tracing: Tracing,
    pub metrics: Metrics,
    pub analytics: Analytics,
    pub throttling: Throttling,
    pub management: Management,
    pub rest_server: RestServer,
    pub filters: Vec<Filter>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    pub token_service: Vec<Issuer>,
    pub auth_header: AuthHeader,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issuer {
    pub name: String,
    pub issuer: String,
    pub certificate_alias: String,
    pub certificate_file_path: String,
    pub jwks_url: String,
    pub consumer_key_claim: String,
    pub validate_subscription: bool,
    pub claim_mapping: Vec<ClaimMapping>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimMapping {
    pub remote_claim: String,
    pub local_claim: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthHeader {
    pub enable_outbound_auth_header: bool,
    pub authorization_header: String,
    pub test_console_header_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub port: i32,
    pub max_message_size: i32,
    pub max_header_limit: i32,
    pub keep_alive_time: i32,
    pub thread_pool: ThreadPool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadPool {
    pub core_size: i32,
    pub max_size: i32,
    pub keep_alive_time: i32,
    pub queue_size: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtGenerator {
    pub enable: bool,
    pub encoding: String,
    pub claim_dialect: String,
    pub convert_dialect: bool,
    pub header: String,
    pub signing_algorithm: String,
    pub enable_user_claims: bool,
    pub gateway_generator_impl: String,
    pub claims_extractor_impl: String,
    pub public_certificate_path: String,
    pub private_key_path: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtIssuer {
    pub enabled: bool,
    pub issuer: String,
    pub encoding: String,
    pub claim_dialect: String,
    pub signing_algorithm: String,
    pub public_certificate_path: String,
    pub private_key_path: String,
    pub validity_period: i32,
    pub jwt_users: Vec<JwtUser>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JwtUser {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cache {
    pub enable: bool,
    pub maximum_size: i32,
    pub expiry_time: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracing {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub tracing_type: String,
    pub config_properties: HashMap<String, String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub metrics_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub enabled: bool,
    pub config_properties: HashMap<String, String>,
    pub service: Service,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Throttling {
    pub enable_global_event_publishing: bool,
    pub enable_header_conditions: bool,
    pub enable_query_param_conditions: bool,
    pub enable_jwt_claim_conditions: bool,
    pub jms_connection_initial_context_factory: String,
    pub jms_connection_provider_url: String,
    pub publisher: BinaryPublisher,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryPublisher {
    pub username: String,
    pub password: String,
    pub url_group: Vec<TmUrlGroup>,
    pub pool: PublisherPool,
    pub agent: ThrottleAgent,
}

/// Traffic manager receiver/auth URL group
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TmUrlGroup {
    pub receiver_urls: Vec<String>,
    pub auth_urls: Vec<String>,
    #[serde(rename = "type")]
    pub group_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherPool {
    pub init_idle_object_data_publishing_agents: i32,
    pub max_idle_data_publishing_agents: i32,
    pub publisher_thread_pool_core_size: i32,
    pub publisher_thread_pool_maximum_size: i32,
    pub publisher_thread_pool_keep_alive_time: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrottleAgent {
    pub ssl_enabled_protocols: String,
    pub ciphers: String,
    pub queue_size: i32,
    pub batch_size: i32,
    pub core_pool_size: i32,
    #[serde(rename = "socketTimeoutMS")]
    pub socket_timeout_ms: i32,
    pub max_pool_size: i32,
    pub keep_alive_time_in_pool: i32,
    pub reconnection_interval: i32,
    pub max_transport_pool_size: i32,
    pub max_idle_connections: i32,
    pub eviction_time_period: i32,
    pub min_idle_time_in_pool: i32,
    pub secure_max_transport_pool_size: i32,
    pub secure_max_idle_connections: i32,
    pub secure_eviction_time_period: i32,
    pub secure_min_idle_time_in_pool: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Management {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RestServer {
    pub enable: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub class_name: String,
    pub position: i32,
    pub config_properties: HashMap<String, String>,
}
