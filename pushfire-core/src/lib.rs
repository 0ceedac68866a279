//! # Pushfire Core
//!
//! Build, validate and send a single Firebase Cloud Messaging notification
//! to one topic or one device token.
//!
//! ## Pipeline
//!
//! 1. [`SendConfig::collect`] checks the invocation values.
//! 2. [`PushDefinition::from_file`] reads the push-definition file.
//! 3. [`PushDefinition::validate`] checks the notification/data rules.
//! 4. [`OutboundRequest::build`] derives the Android, APNs and Web Push
//!    expiry settings from the time-to-live.
//! 5. A [`DeliveryClient`] (normally [`FcmClient`]) sends it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pushfire_core::{FcmClient, RawArgs, SendConfig, SystemClock, run};
//!
//! let config = SendConfig::collect(RawArgs {
//!     credentials_file: Some("service-account.json".into()),
//!     push_file: Some("push.json".into()),
//!     topic: Some("news".into()),
//!     token: None,
//!     ttl: 3600,
//! })?;
//!
//! let client = FcmClient::from_service_account(&config.credentials_file)?;
//! let name = run(&config, &client, &SystemClock, false).await?;
//! println!("Successfully sent message: {}", name);
//! ```

mod clock;
mod config;
mod definition;
mod error;
mod fcm;
mod pipeline;
mod provider;
mod request;
mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DeliveryTarget, RawArgs, SendConfig, TimeToLive};
pub use definition::{Notification, PushDefinition};
pub use error::{ClockError, DeliveryError, ErrorKind, PushError, Result, ValidationError};
pub use fcm::{FcmClient, ServiceAccount};
pub use pipeline::{deliver, prepare, run};
pub use provider::DeliveryClient;
pub use request::{
    AndroidConfig, ApnsConfig, ApnsHeaders, OutboundRequest, WebpushConfig, WebpushHeaders,
};

/// Prelude for common imports.
///
/// ```
/// use pushfire_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clock::{Clock, SystemClock};
    pub use crate::config::{DeliveryTarget, RawArgs, SendConfig, TimeToLive};
    pub use crate::definition::{Notification, PushDefinition};
    pub use crate::error::{DeliveryError, PushError, Result};
    pub use crate::fcm::FcmClient;
    pub use crate::pipeline::{deliver, prepare, run};
    pub use crate::provider::DeliveryClient;
    pub use crate::request::OutboundRequest;
}
