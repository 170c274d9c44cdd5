use crate::tenant::{TenantDomainCache, TenantDomainResolver};
use adapter_api::discovery::subscription::{
    Api, ApiList, Application, ApplicationKeyMapping, ApplicationKeyMappingList, ApplicationList,
    ApplicationPolicy, ApplicationPolicyList, Subscription, SubscriptionList, SubscriptionPolicy,
    SubscriptionPolicyList,
};
use adapter_api::eventhub::{
    self, ApplicationMap, ApplicationPolicyMap, KeyMappingMap, SubscriptionMap,
    SubscriptionPolicyMap,
};
use tracing::debug;

/// Convert the subscription map into the enforcer subscription list
pub fn marshal_subscription_map(
    subscriptions: &SubscriptionMap,
    resolver: &dyn TenantDomainResolver,
) -> SubscriptionList {
    let tenant = TenantDomainCache::new(resolver);
    let list = subscriptions
        .values()
        .map(|sub| Subscription {
            subscription_id: sub.subscription_id.to_string(),
            policy_id: sub.policy_id.clone(),
            api_id: sub.api_id,
            app_id: sub.app_id,
            subscription_state: sub.subscription_state.clone(),
            time_stamp: sub.time_stamp,
            tenant_id: sub.tenant_id,
            tenant_domain: tenant.backfill(&sub.tenant_domain),
            subscription_uuid: sub.subscription_uuid.clone(),
            api_uuid: sub.api_uuid.clone(),
            app_uuid: sub.application_uuid.clone(),
        })
        .collect();

    SubscriptionList { list }
}

/// Convert the application map into the enforcer application list
pub fn marshal_application_map(
    applications: &ApplicationMap,
    resolver: &dyn TenantDomainResolver,
) -> ApplicationList {
    let tenant = TenantDomainCache::new(resolver);
    let list = applications
        .values()
        .map(|app| Application {
            uuid: app.uuid.clone(),
            id: app.id,
            name: app.name.clone(),
            // The enforcer reads the subscriber id from the application id
            sub_id: app.id,
            sub_name: app.sub_name.clone(),
            policy: app.policy.clone(),
            token_type: app.token_type.clone(),
            group_ids: app.group_ids.clone(),
            attributes: app.attributes.clone(),
            tenant_id: app.tenant_id,
            tenant_domain: tenant.backfill(&app.tenant_domain),
            timestamp: app.time_stamp,
        })
        .collect();

    ApplicationList { list }
}

/// Convert the API list into the enforcer API list, preserving order
pub fn marshal_api_list(apis: &eventhub::ApiList) -> ApiList {
    let list = apis
        .list
        .iter()
        .map(|api| Api {
            api_id: api.api_id.to_string(),
            name: api.name.clone(),
            provider: api.provider.clone(),
            version: api.version.clone(),
            context: api.context.clone(),
            policy: api.policy.clone(),
            api_type: api.api_type.clone(),
            uuid: api.uuid.clone(),
            is_default_version: api.is_default_version,
            lc_state: api.api_status.clone(),
        })
        .collect();

    ApiList { list }
}

/// Convert the application policy map into the enforcer policy list
pub fn marshal_application_policy_map(policies: &ApplicationPolicyMap) -> ApplicationPolicyList {
    let list = policies
        .values()
        .map(|policy| {
            let app_policy = ApplicationPolicy {
                id: policy.id,
                tenant_id: policy.tenant_id,
                name: policy.name.clone(),
                quota_type: policy.quota_type.clone(),
            };
            debug!("Application policy entry: {:?}", app_policy);
            app_policy
        })
        .collect();

    ApplicationPolicyList { list }
}

/// Convert the subscription policy map into the enforcer policy list
pub fn marshal_subscription_policy_map(
    policies: &SubscriptionPolicyMap,
    resolver: &dyn TenantDomainResolver,
) -> SubscriptionPolicyList {
    let tenant = TenantDomainCache::new(resolver);
    let list = policies
        .values()
        .map(|policy| SubscriptionPolicy {
            id: policy.id,
            tenant_id: policy.tenant_id,
            name: policy.name.clone(),
            quota_type: policy.quota_type.clone(),
            graphql_max_complexity: policy.graphql_max_complexity,
            graphql_max_depth: policy.graphql_max_depth,
            rate_limit_count: policy.rate_limit_count,
            rate_limit_time_unit: policy.rate_limit_time_unit.clone(),
            stop_on_quota_reach: policy.stop_on_quota_reach,
            tenant_domain: tenant.backfill(&policy.tenant_domain),
            timestamp: policy.time_stamp,
        })
        .collect();

    SubscriptionPolicyList { list }
}

/// Convert the key mapping map into the enforcer key mapping list
pub fn marshal_key_mapping_map(
    mappings: &KeyMappingMap,
    resolver: &dyn TenantDomainResolver,
) -> ApplicationKeyMappingList {
    let tenant = TenantDomainCache::new(resolver);
    let list = mappings
        .values()
        .map(|mapping| ApplicationKeyMapping {
            consumer_key: mapping.consumer_key.clone(),
            key_type: mapping.key_type.clone(),
            key_manager: mapping.key_manager.clone(),
            application_id: mapping.application_id,
            application_uuid: mapping.application_uuid.clone(),
            tenant_id: mapping.tenant_id,
            tenant_domain: tenant.backfill(&mapping.tenant_domain),
            timestamp: mapping.time_stamp,
        })
        .collect();

    ApplicationKeyMappingList { list }
}
