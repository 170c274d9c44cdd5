//! Deployment notifier: reports revision (un)deployments to the control plane

use crate::auth::basic_auth_header;
use crate::delivery::{deliver, DeliveryOutcome, SkipReason};
use crate::event::{DeployedApiRevision, UnDeployedApiRevision};
use crate::invoker::{ControlPlaneInvoker, ControlPlaneRequest, HttpInvoker};
use adapter_api::ControlPlaneConfig;
use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

pub const DEPLOYED_REVISION_PATH: &str = "internal/data/v1/apis/deployed-revisions";
pub const UNDEPLOYED_REVISION_PATH: &str = "internal/data/v1/apis/un-deploy-revision";

/// Join the control plane base URL and a resource path with exactly one slash
pub fn resolve_endpoint(service_url: &str, path: &str) -> String {
    if service_url.ends_with('/') {
        format!("{}{}", service_url, path)
    } else {
        format!("{}/{}", service_url, path)
    }
}

/// Sends deployment lifecycle events to the control plane
pub struct DeploymentNotifier {
    config: ControlPlaneConfig,
    invoker: Arc<dyn ControlPlaneInvoker>,
}

impl DeploymentNotifier {
    pub fn new(config: ControlPlaneConfig, invoker: Arc<dyn ControlPlaneInvoker>) -> Self {
        Self { config, invoker }
    }

    /// Create a notifier using the TLS-aware HTTP invoker
    pub fn from_config(config: ControlPlaneConfig) -> Result<Self> {
        let invoker = HttpInvoker::new(&config)?;
        Ok(Self::new(config, Arc::new(invoker)))
    }

    pub fn config(&self) -> &ControlPlaneConfig {
        &self.config
    }

    /// Report deployed revisions with a single PATCH
    pub async fn send_revision_update(&self, revisions: &[DeployedApiRevision]) -> DeliveryOutcome {
        if revisions.is_empty() {
            return DeliveryOutcome::Skipped(SkipReason::NothingToSend);
        }
        if !self.config.enabled {
            return DeliveryOutcome::Skipped(SkipReason::Disabled);
        }

        debug!("Sending {} deployed revision(s) to control plane", revisions.len());
        self.send(Method::PATCH, DEPLOYED_REVISION_PATH, revisions).await
    }

    /// Report a revision removed from `environment` with a single POST
    ///
    /// Sent regardless of `enabled`; only empty identifiers suppress it.
    pub async fn send_revision_undeploy(
        &self,
        api_uuid: &str,
        revision_uuid: &str,
        environment: &str,
    ) -> DeliveryOutcome {
        if api_uuid.is_empty() || revision_uuid.is_empty() || environment.is_empty() {
            return DeliveryOutcome::Skipped(SkipReason::MissingField);
        }

        let removed = UnDeployedApiRevision {
            api_uuid: api_uuid.to_string(),
            revision_uuid: revision_uuid.to_string(),
            environment: environment.to_string(),
        };
        debug!(
            "Sending undeployed revision {} of API {} in {} to control plane",
            revision_uuid, api_uuid, environment
        );
        self.send(Method::POST, UNDEPLOYED_REVISION_PATH, &removed).await
    }

    async fn send<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: &T,
    ) -> DeliveryOutcome {
        let request = match self.build_request(method, path, payload) {
            Ok(request) => request,
            Err(e) => {
                warn!("Failed to prepare control plane notification: {}", e);
                return DeliveryOutcome::Skipped(SkipReason::EncodingFailed);
            }
        };
        debug!(
            "Control plane notification payload: {}",
            String::from_utf8_lossy(&request.body)
        );

        deliver(self.invoker.as_ref(), &request).await
    }

    fn build_request<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: &T,
    ) -> Result<ControlPlaneRequest> {
        let body = serde_json::to_vec(payload)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&basic_auth_header(
                &self.config.username,
                &self.config.password,
            ))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(ControlPlaneRequest {
            method,
            url: resolve_endpoint(&self.config.service_url, path),
            headers,
            body,
        })
    }
}
