//! HTTP transport to the control plane

use crate::tls::load_truststore;
use adapter_api::ControlPlaneConfig;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode};
use std::time::Duration;
use tracing::{info, warn};

/// Upper bound on a single control plane exchange
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A prepared request to the control plane
#[derive(Clone, Debug)]
pub struct ControlPlaneRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlPlaneResponse {
    pub status: StatusCode,
}

/// Executes control plane requests
///
/// An `Err` means the request never produced a response (connection, TLS or
/// I/O failure). HTTP error statuses are returned as responses.
#[async_trait]
pub trait ControlPlaneInvoker: Send + Sync {
    async fn invoke(&self, request: ControlPlaneRequest) -> Result<ControlPlaneResponse>;
}

/// TLS-aware invoker backed by a pooled HTTP client
pub struct HttpInvoker {
    client: Client,
}

impl HttpInvoker {
    /// Create an invoker honouring the control plane TLS settings
    pub fn new(config: &ControlPlaneConfig) -> Result<Self> {
        let mut builder = Client::builder().timeout(REQUEST_TIMEOUT);

        if config.skip_ssl_verification {
            warn!("Control plane certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(path) = &config.truststore_path {
            for certificate in load_truststore(path)? {
                builder = builder.add_root_certificate(certificate);
            }
        }

        let client = builder.build()?;
        info!("Control plane HTTP client initialized");

        Ok(Self { client })
    }
}

#[async_trait]
impl ControlPlaneInvoker for HttpInvoker {
    async fn invoke(&self, request: ControlPlaneRequest) -> Result<ControlPlaneResponse> {
        let response = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        Ok(ControlPlaneResponse {
            status: response.status(),
        })
    }
}
