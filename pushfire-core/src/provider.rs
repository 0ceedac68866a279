//! Delivery client trait.

use async_trait::async_trait;

use crate::{DeliveryError, OutboundRequest};

/// Transmits a built request to the messaging service.
#[async_trait]
pub trait DeliveryClient: Send + Sync {
    /// Send one request and return the identifier the service assigned.
    ///
    /// With `dry_run` the service validates the request without delivering
    /// it.
    async fn send(&self, request: &OutboundRequest, dry_run: bool)
    -> Result<String, DeliveryError>;
}
