//! Deployment notifications to the control plane
//!
//! Reports API revision deployments and undeployments over HTTP with a
//! bounded number of attempts. Delivery is best-effort: failures are logged
//! and reported through `DeliveryOutcome`, never as errors.

pub mod auth;
pub mod delivery;
pub mod event;
pub mod invoker;
pub mod notifier;
pub mod tls;

pub use delivery::{DeliveryOutcome, SkipReason, MAX_DELIVERY_ATTEMPTS};
pub use event::{DeployedApiRevision, DeployedEnvInfo, UnDeployedApiRevision};
pub use invoker::{ControlPlaneInvoker, ControlPlaneRequest, ControlPlaneResponse, HttpInvoker};
pub use notifier::DeploymentNotifier;
