//! Tenant domain resolution for unscoped entities

use adapter_api::config::DEFAULT_TENANT_DOMAIN;
use adapter_api::ControlPlaneConfig;
use std::cell::OnceCell;
use tracing::{debug, warn};

/// Source of the tenant domain the adapter is currently bound to
pub trait TenantDomainResolver: Send + Sync {
    fn connected_tenant_domain(&self) -> String;
}

/// Resolver that always answers with the same tenant domain
#[derive(Clone, Debug)]
pub struct StaticTenantDomain(pub String);

impl StaticTenantDomain {
    pub fn new(tenant_domain: impl Into<String>) -> Self {
        Self(tenant_domain.into())
    }
}

impl TenantDomainResolver for StaticTenantDomain {
    fn connected_tenant_domain(&self) -> String {
        self.0.clone()
    }
}

impl TenantDomainResolver for ControlPlaneConfig {
    fn connected_tenant_domain(&self) -> String {
        self.tenant_domain.clone()
    }
}

/// Backfills empty tenant domains within a single marshalling call
///
/// The resolver is consulted lazily, at most once per cache.
pub struct TenantDomainCache<'a> {
    resolver: &'a dyn TenantDomainResolver,
    resolved: OnceCell<String>,
}

impl<'a> TenantDomainCache<'a> {
    pub fn new(resolver: &'a dyn TenantDomainResolver) -> Self {
        Self {
            resolver,
            resolved: OnceCell::new(),
        }
    }

    /// Return `tenant_domain`, or the connected tenant domain when it is empty
    pub fn backfill(&self, tenant_domain: &str) -> String {
        if !tenant_domain.is_empty() {
            return tenant_domain.to_string();
        }
        self.resolved
            .get_or_init(|| {
                let resolved = self.resolver.connected_tenant_domain();
                if resolved.is_empty() {
                    warn!(
                        "Connected tenant domain is empty, falling back to {}",
                        DEFAULT_TENANT_DOMAIN
                    );
                    return DEFAULT_TENANT_DOMAIN.to_string();
                }
                debug!("Resolved connected tenant domain: {}", resolved);
                resolved
            })
            .clone()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Resolver that counts how often it is consulted
    pub(crate) struct CountingResolver {
        pub domain: String,
        pub calls: AtomicUsize,
    }

    impl CountingResolver {
        pub(crate) fn new(domain: &str) -> Self {
            Self {
                domain: domain.to_string(),
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TenantDomainResolver for CountingResolver {
        fn connected_tenant_domain(&self) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.domain.clone()
        }
    }

    #[test]
    fn test_backfill_keeps_existing_domain() {
        let resolver = CountingResolver::new("bound.com");
        let cache = TenantDomainCache::new(&resolver);
        assert_eq!(cache.backfill("wso2.com"), "wso2.com");
        assert_eq!(resolver.calls(), 0);
    }

    #[test]
    fn test_backfill_resolves_once() {
        let resolver = CountingResolver::new("bound.com");
        let cache = TenantDomainCache::new(&resolver);
        assert_eq!(cache.backfill(""), "bound.com");
        assert_eq!(cache.backfill(""), "bound.com");
        assert_eq!(resolver.calls(), 1);
    }

    #[test]
    fn test_empty_resolution_falls_back_to_default() {
        let resolver = StaticTenantDomain::new("");
        let cache = TenantDomainCache::new(&resolver);
        assert_eq!(cache.backfill(""), DEFAULT_TENANT_DOMAIN);
    }

    #[test]
    fn test_control_plane_config_resolver() {
        let config = ControlPlaneConfig {
            tenant_domain: "tenant.io".to_string(),
            ..ControlPlaneConfig::default()
        };
        assert_eq!(config.connected_tenant_domain(), "tenant.io");
    }
}
