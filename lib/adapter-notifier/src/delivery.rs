//! Bounded-attempt delivery of control plane notifications

use crate::invoker::{ControlPlaneInvoker, ControlPlaneRequest};
use reqwest::StatusCode;
use std::fmt;
use tracing::{error, info, warn};

/// Attempts made per notification before it is dropped
pub const MAX_DELIVERY_ATTEMPTS: u32 = 3;

/// Why a notification was not sent at all
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Control plane integration is disabled
    Disabled,
    /// No deployed revisions were supplied
    NothingToSend,
    /// A required identifier was empty
    MissingField,
    /// The payload or headers could not be encoded
    EncodingFailed,
}

/// Result of a notification, for callers that want to alert on drops
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// No request was made
    Skipped(SkipReason),
    /// The control plane answered 200 on attempt `attempts`
    Delivered { attempts: u32 },
    /// Every attempt failed; the notification was dropped
    Exhausted { attempts: u32 },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }

    /// Number of HTTP requests made
    pub fn attempts(&self) -> u32 {
        match self {
            DeliveryOutcome::Skipped(_) => 0,
            DeliveryOutcome::Delivered { attempts } | DeliveryOutcome::Exhausted { attempts } => {
                *attempts
            }
        }
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryOutcome::Skipped(reason) => write!(f, "skipped ({:?})", reason),
            DeliveryOutcome::Delivered { attempts } => {
                write!(f, "delivered after {} attempt(s)", attempts)
            }
            DeliveryOutcome::Exhausted { attempts } => {
                write!(f, "dropped after {} failed attempt(s)", attempts)
            }
        }
    }
}

/// Send `request` until the control plane answers 200 or the attempts run out
///
/// Attempts are sequential with no delay between them.
pub async fn deliver(
    invoker: &dyn ControlPlaneInvoker,
    request: &ControlPlaneRequest,
) -> DeliveryOutcome {
    for attempt in 1..=MAX_DELIVERY_ATTEMPTS {
        match invoker.invoke(request.clone()).await {
            Ok(response) if response.status == StatusCode::OK => {
                info!(
                    "{} {} accepted by control plane on attempt {}",
                    request.method, request.url, attempt
                );
                return DeliveryOutcome::Delivered { attempts: attempt };
            }
            Ok(response) => {
                warn!(
                    "Error response status code {} from {} for attempt {}",
                    response.status.as_u16(),
                    request.url,
                    attempt
                );
            }
            Err(e) => {
                warn!(
                    "Error response from {} for attempt {}: {}",
                    request.url, attempt, e
                );
            }
        }
    }

    error!(
        "Giving up on {} {} after {} attempts",
        request.method, request.url, MAX_DELIVERY_ATTEMPTS
    );
    DeliveryOutcome::Exhausted {
        attempts: MAX_DELIVERY_ATTEMPTS,
    }
}
