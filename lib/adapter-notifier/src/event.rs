//! Deployment lifecycle events reported to the control plane

use serde::{Deserialize, Serialize};

/// An API revision deployed to one or more environments
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployedApiRevision {
    pub api_id: String,
    pub revision_id: i64,
    pub env_info: Vec<DeployedEnvInfo>,
}

/// Environment a revision was deployed to, and the vhost it is exposed under
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedEnvInfo {
    pub name: String,
    pub vhost: String,
}

impl DeployedApiRevision {
    /// Build the event for `revision_id` deployed to every environment in `envs` under `vhost`
    pub fn new<S: AsRef<str>>(
        api_id: impl Into<String>,
        revision_id: i64,
        envs: &[S],
        vhost: &str,
    ) -> Self {
        let env_info = envs
            .iter()
            .map(|env| DeployedEnvInfo {
                name: env.as_ref().to_string(),
                vhost: vhost.to_string(),
            })
            .collect();

        Self {
            api_id: api_id.into(),
            revision_id,
            env_info,
        }
    }
}

/// A revision removed from a single environment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnDeployedApiRevision {
    #[serde(rename = "apiUUID")]
    pub api_uuid: String,
    #[serde(rename = "revisionUUID")]
    pub revision_uuid: String,
    pub environment: String,
}
