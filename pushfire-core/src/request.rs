//! Outbound message construction.
//!
//! [`OutboundRequest`] serializes to the `message` object of the FCM HTTP v1
//! API. The time-to-live is expressed three ways, one per platform:
//!
//! - Android: `android.ttl`, a duration (`"3600s"`).
//! - APNs: the `apns-expiration` header, an absolute Unix timestamp, or
//!   `"0"` for "attempt once".
//! - Web Push: the `TTL` header, the seconds value itself.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::warn;

use crate::{Clock, DeliveryTarget, Notification, PushDefinition, TimeToLive};

/// Android delivery options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AndroidConfig {
    /// How long the message may be held. Zero when the ttl is zero.
    #[serde(serialize_with = "serialize_duration")]
    pub ttl: Duration,
}

/// APNs delivery options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApnsConfig {
    pub headers: ApnsHeaders,
}

/// APNs request headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApnsHeaders {
    /// Unix timestamp after which APNs drops the message, or `"0"`.
    #[serde(rename = "apns-expiration")]
    pub expiration: String,
}

/// Web Push delivery options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebpushConfig {
    pub headers: WebpushHeaders,
}

/// Web Push request headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebpushHeaders {
    /// Seconds the push service may retain the message.
    #[serde(rename = "TTL")]
    pub ttl: String,
}

/// A single message, ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundRequest {
    #[serde(flatten)]
    pub target: DeliveryTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
    pub android: AndroidConfig,
    pub apns: ApnsConfig,
    pub webpush: WebpushConfig,
}

impl OutboundRequest {
    /// Assemble the request for a validated definition.
    ///
    /// Only the APNs expiration depends on `clock`. If the clock fails the
    /// header stays at `"0"` and a warning is logged.
    pub fn build(
        definition: PushDefinition,
        target: DeliveryTarget,
        ttl: TimeToLive,
        clock: &dyn Clock,
    ) -> Self {
        let secs = ttl.as_secs();

        let expiration = if ttl.is_immediate() {
            "0".to_string()
        } else {
            match clock.unix_now() {
                Ok(now) => (now + i64::from(secs)).to_string(),
                Err(e) => {
                    warn!(error = %e, ttl = secs, "Leaving apns-expiration at 0");
                    "0".to_string()
                }
            }
        };

        Self {
            target,
            notification: definition.notification,
            data: definition.data,
            android: AndroidConfig {
                ttl: ttl.as_duration(),
            },
            apns: ApnsConfig {
                headers: ApnsHeaders { expiration },
            },
            webpush: WebpushConfig {
                headers: WebpushHeaders {
                    ttl: secs.to_string(),
                },
            },
        }
    }
}

// FCM encodes durations as seconds with an "s" suffix.
fn serialize_duration<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    let secs = duration.as_secs();
    let nanos = duration.subsec_nanos();
    if nanos == 0 {
        serializer.serialize_str(&format!("{}s", secs))
    } else {
        serializer.serialize_str(&format!("{}.{:09}s", secs, nanos))
    }
}
