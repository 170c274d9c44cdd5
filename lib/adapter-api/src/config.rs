//! Adapter configuration tree
//!
//! The operator-facing configuration, read from YAML. The `enforcer` and
//! `analytics` sections are translated verbatim into the enforcer wire config;
//! `control_plane` drives the deployment notifier.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Tenant domain used when the control plane does not name one
pub const DEFAULT_TENANT_DOMAIN: &str = "carbon.super";

/// Environment variables that override control-plane settings after parsing
pub const ENV_CP_SERVICE_URL: &str = "ADAPTER_CP_SERVICE_URL";
pub const ENV_CP_USERNAME: &str = "ADAPTER_CP_USERNAME";
pub const ENV_CP_PASSWORD: &str = "ADAPTER_CP_PASSWORD";
pub const ENV_CP_ENABLED: &str = "ADAPTER_CP_ENABLED";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Root of the adapter configuration
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdapterConfig {
    pub enforcer: EnforcerConfig,
    pub analytics: AnalyticsConfig,
    pub control_plane: ControlPlaneConfig,
}

impl AdapterConfig {
    /// Parse and validate a configuration document
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: AdapterConfig = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration file at `path`, applying `ADAPTER_CP_*` environment overrides
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: AdapterConfig = serde_yaml::from_str(&raw)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        info!("Adapter configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Apply control-plane overrides from a key lookup (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let cp = &mut self.control_plane;
        if let Some(url) = lookup(ENV_CP_SERVICE_URL) {
            debug!("Control plane service URL overridden from {}", ENV_CP_SERVICE_URL);
            cp.service_url = url;
        }
        if let Some(username) = lookup(ENV_CP_USERNAME) {
            cp.username = username;
        }
        if let Some(password) = lookup(ENV_CP_PASSWORD) {
            cp.password = password;
        }
        if let Some(enabled) = lookup(ENV_CP_ENABLED) {
            cp.enabled = matches!(enabled.to_lowercase().as_str(), "true" | "1" | "yes");
        }
    }

    /// Reject configurations the adapter cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.control_plane.enabled && self.control_plane.service_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "controlPlane.serviceUrl is required when the control plane is enabled".to_string(),
            ));
        }
        for filter in &self.enforcer.filters {
            if filter.class_name.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "enforcer filter at position {} has no className",
                    filter.position
                )));
            }
        }
        Ok(())
    }
}

/// Control plane connection used for deployment notifications
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControlPlaneConfig {
    pub enabled: bool,
    pub service_url: String,
    pub username: String,
    pub password: String,
    pub skip_ssl_verification: bool,
    /// PEM bundle trusted when verifying the control plane certificate
    pub truststore_path: Option<PathBuf>,
    /// Tenant domain this adapter is bound to
    pub tenant_domain: String,
}

impl Default for ControlPlaneConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            service_url: String::new(),
            username: "admin".to_string(),
            password: "admin".to_string(),
            skip_ssl_verification: false,
            truststore_path: None,
            tenant_domain: DEFAULT_TENANT_DOMAIN.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnforcerConfig {
    pub security: SecurityConfig,
    pub auth_service: ServiceConfig,
    pub jwt_generator: JwtGeneratorConfig,
    pub jwt_issuer: JwtIssuerConfig,
    pub cache: CacheConfig,
    pub tracing: TracingConfig,
    pub metrics: MetricsConfig,
    pub throttling: ThrottlingConfig,
    pub management: ManagementConfig,
    pub rest_server: RestServerConfig,
    /// Custom request filters, kept in declaration order
    pub filters: Vec<FilterConfig>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecurityConfig {
    pub token_service: Vec<IssuerConfig>,
    pub auth_header: AuthHeaderConfig,
}

/// A trusted token issuer
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssuerConfig {
    pub name: String,
    pub issuer: String,
    pub certificate_alias: String,
    pub certificate_file_path: String,
    pub jwks_url: String,
    pub consumer_key_claim: String,
    pub validate_subscription: bool,
    pub claim_mapping: Vec<ClaimMappingConfig>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClaimMappingConfig {
    pub remote_claim: String,
    pub local_claim: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthHeaderConfig {
    pub enable_outbound_auth_header: bool,
    pub authorization_header: String,
    pub test_console_header_name: String,
}

/// gRPC service settings, shared by the auth service and the analytics log receiver
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceConfig {
    pub port: i32,
    pub max_message_size: i32,
    pub max_header_limit: i32,
    /// Seconds
    pub keep_alive_time: i32,
    pub thread_pool: ThreadPoolConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8081,
            max_message_size: 1_000_000_000,
            max_header_limit: 8192,
            keep_alive_time: 600,
            thread_pool: ThreadPoolConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreadPoolConfig {
    pub core_size: i32,
    pub max_size: i32,
    pub keep_alive_time: i32,
    pub queue_size: i32,
}

impl Default for ThreadPoolConfig {
    fn default() -> Self {
        Self {
            core_size: 400,
            max_size: 500,
            keep_alive_time: 600,
            queue_size: 1000,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JwtGeneratorConfig {
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

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JwtIssuerConfig {
    pub enabled: bool,
    pub issuer: String,
    pub encoding: String,
    pub claim_dialect: String,
    pub signing_algorithm: String,
    pub public_certificate_path: String,
    pub private_key_path: String,
    /// Seconds
    pub validity_period: i32,
    pub jwt_user: Vec<JwtUserConfig>,
}

impl Default for JwtIssuerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            issuer: String::new(),
            encoding: String::new(),
            claim_dialect: String::new(),
            signing_algorithm: String::new(),
            public_certificate_path: String::new(),
            private_key_path: String::new(),
            validity_period: 3600,
            jwt_user: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JwtUserConfig {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CacheConfig {
    pub enabled: bool,
    pub maximum_size: i32,
    /// Minutes
    pub expiry_time: i32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            maximum_size: 10000,
            expiry_time: 15,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TracingConfig {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub tracing_type: String,
    pub config_properties: HashMap<String, String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsConfig {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub metrics_type: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsConfig {
    pub enabled: bool,
    pub enforcer: AnalyticsEnforcerConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsEnforcerConfig {
    pub config_properties: HashMap<String, String>,
    pub log_receiver: ServiceConfig,
}

impl Default for AnalyticsEnforcerConfig {
    fn default() -> Self {
        Self {
            config_properties: HashMap::new(),
            log_receiver: ServiceConfig {
                port: 18090,
                ..ServiceConfig::default()
            },
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThrottlingConfig {
    pub enable_global_event_publishing: bool,
    pub enable_header_conditions: bool,
    pub enable_query_param_conditions: bool,
    pub enable_jwt_claim_conditions: bool,
    pub jms_connection_initial_context_factory: String,
    pub jms_connection_provider_url: String,
    pub publisher: BinaryPublisherConfig,
}

/// Binary event publisher used for global throttling
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BinaryPublisherConfig {
    pub username: String,
    pub password: String,
    pub url_group: Vec<UrlGroupConfig>,
    pub pool: PublisherPoolConfig,
    pub agent: ThrottleAgentConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlGroupConfig {
    pub receiver_urls: Vec<String>,
    pub auth_urls: Vec<String>,
    #[serde(rename = "type")]
    pub group_type: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublisherPoolConfig {
    pub init_idle_object_data_publishing_agents: i32,
    pub max_idle_data_publishing_agents: i32,
    pub publisher_thread_pool_core_size: i32,
    pub publisher_thread_pool_maximum_size: i32,
    pub publisher_thread_pool_keep_alive_time: i32,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThrottleAgentConfig {
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

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManagementConfig {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RestServerConfig {
    pub enable: bool,
}

/// A custom request filter loaded by the enforcer
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    pub class_name: String,
    pub position: i32,
    pub config_properties: HashMap<String, String>,
}
