//! Control plane snapshot translation for the `translate` command

use adapter_api::eventhub::{
    ApiList, Application, ApplicationKeyMapping, ApplicationPolicy, KeyManager, Subscription,
    SubscriptionPolicy,
};
use adapter_core::{
    marshal_api_list, marshal_application_map, marshal_application_policy_map,
    marshal_key_manager, marshal_key_mapping_map, marshal_subscription_map,
    marshal_subscription_policy_map, TenantDomainResolver,
};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SnapshotKind {
    Subscriptions,
    Applications,
    Apis,
    ApplicationPolicies,
    SubscriptionPolicies,
    KeyMappings,
    KeyManager,
}

/// Control plane list envelope: `{"list": [...]}`
#[derive(Deserialize)]
struct Listing<T> {
    #[serde(default = "Vec::new")]
    list: Vec<T>,
}

fn read_listing<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>> {
    let listing: Listing<T> =
        serde_json::from_str(raw).context("Snapshot is not a control plane list")?;
    debug!("Read {} snapshot entries", listing.list.len());
    Ok(listing.list)
}

/// Translate a raw snapshot of `kind` into its enforcer wire form
pub fn translate(
    kind: SnapshotKind,
    raw: &str,
    resolver: &dyn TenantDomainResolver,
) -> Result<Value> {
    let wire = match kind {
        SnapshotKind::Subscriptions => {
            let map = read_listing::<Subscription>(raw)?
                .into_iter()
                .map(|sub| (sub.subscription_id, sub))
                .collect();
            serde_json::to_value(marshal_subscription_map(&map, resolver))?
        }
        SnapshotKind::Applications => {
            let map = read_listing::<Application>(raw)?
                .into_iter()
                .map(|app| (app.uuid.clone(), app))
                .collect();
            serde_json::to_value(marshal_application_map(&map, resolver))?
        }
        SnapshotKind::Apis => {
            let apis: ApiList =
                serde_json::from_str(raw).context("Snapshot is not an API list")?;
            serde_json::to_value(marshal_api_list(&apis))?
        }
        SnapshotKind::ApplicationPolicies => {
            let map = read_listing::<ApplicationPolicy>(raw)?
                .into_iter()
                .map(|policy| (policy.id, policy))
                .collect();
            serde_json::to_value(marshal_application_policy_map(&map))?
        }
        SnapshotKind::SubscriptionPolicies => {
            let map = read_listing::<SubscriptionPolicy>(raw)?
                .into_iter()
                .map(|policy| (policy.id, policy))
                .collect();
            serde_json::to_value(marshal_subscription_policy_map(&map, resolver))?
        }
        SnapshotKind::KeyMappings => {
            let map = read_listing::<ApplicationKeyMapping>(raw)?
                .into_iter()
                .map(|mapping| (mapping.consumer_key.clone(), mapping))
                .collect();
            serde_json::to_value(marshal_key_mapping_map(&map, resolver))?
        }
        SnapshotKind::KeyManager => {
            let key_manager: KeyManager =
                serde_json::from_str(raw).context("Snapshot is not a key manager")?;
            match marshal_key_manager(&key_manager, resolver) {
                Some(wire) => serde_json::to_value(wire)?,
                None => {
                    warn!("Key manager {} was not translated", key_manager.name);
                    Value::Null
                }
            }
        }
    };

    Ok(wire)
}
