use crate::tenant::{TenantDomainCache, TenantDomainResolver};
use crate::{CoreError, Result};
use adapter_api::discovery::keymgt::KeyManagerConfig;
use adapter_api::eventhub::KeyManager;
use serde::Serialize;
use tracing::warn;

/// Convert a key manager into the enforcer key manager record
///
/// Returns `None` when the provider configuration cannot be encoded, so one
/// malformed key manager never aborts the caller's batch.
pub fn marshal_key_manager<C: Serialize>(
    key_manager: &KeyManager<C>,
    resolver: &dyn TenantDomainResolver,
) -> Option<KeyManagerConfig> {
    let configuration = match encode_configuration(key_manager) {
        Ok(configuration) => configuration,
        Err(e) => {
            warn!("{}", e);
            return None;
        }
    };

    let tenant = TenantDomainCache::new(resolver);
    Some(KeyManagerConfig {
        name: key_manager.name.clone(),
        key_manager_type: key_manager.key_manager_type.clone(),
        enabled: key_manager.enabled,
        tenant_domain: tenant.backfill(&key_manager.tenant_domain),
        configuration,
    })
}

fn encode_configuration<C: Serialize>(key_manager: &KeyManager<C>) -> Result<String> {
    serde_json::to_string(&key_manager.configuration).map_err(|source| {
        CoreError::KeyManagerEncoding {
            name: key_manager.name.clone(),
            source,
        }
    })
}
