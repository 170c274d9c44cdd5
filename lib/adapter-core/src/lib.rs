//! Control-plane to enforcer translation
//!
//! This library provides:
//! - Marshalling of the adapter configuration into the enforcer config resource
//! - Marshalling of subscription snapshots into enforcer subscription lists
//! - Tenant domain resolution for entities the control plane left unscoped

pub mod error;
pub mod marshal;
pub mod tenant;

pub use error::{CoreError, Result};
pub use marshal::{
    marshal_api_list, marshal_application_map, marshal_application_policy_map, marshal_config,
    marshal_key_manager, marshal_key_mapping_map, marshal_subscription_map,
    marshal_subscription_policy_map,
};
pub use tenant::{StaticTenantDomain, TenantDomainCache, TenantDomainResolver};
