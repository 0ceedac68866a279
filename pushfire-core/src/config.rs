//! Send options collected from the invocation.

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::{PushError, Result};

/// Time-to-live for a message, in seconds.
///
/// `0` means "now or never": the service attempts delivery once and drops
/// the message if that fails. Anything else bounds how long the message may
/// be queued, up to 28 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct TimeToLive(u32);

impl TimeToLive {
    /// Largest accepted value (28 days).
    pub const MAX_SECONDS: i64 = 2_419_200;

    /// Validate a raw seconds value.
    pub fn new(seconds: i64) -> Result<Self> {
        if !(0..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(PushError::usage(format!(
                "ttl must be between 0 and {} (28 days) inclusive. \
                 0 means deliver immediately and don't retry on failure.",
                Self::MAX_SECONDS
            )));
        }
        Ok(Self(seconds as u32))
    }

    /// Seconds value.
    pub fn as_secs(&self) -> u32 {
        self.0
    }

    /// Same value as a duration.
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }

    /// Whether this is the "now or never" value.
    pub fn is_immediate(&self) -> bool {
        self.0 == 0
    }
}

/// Where the message goes: one topic or one device token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryTarget {
    /// Every device subscribed to the named topic.
    Topic(String),
    /// A single registered app instance.
    Token(String),
}

impl DeliveryTarget {
    /// Resolve a target from optional topic and token values.
    ///
    /// Empty strings count as absent.
    pub fn resolve(topic: Option<&str>, token: Option<&str>) -> Result<Self> {
        let topic = topic.filter(|t| !t.is_empty());
        let token = token.filter(|t| !t.is_empty());

        match (topic, token) {
            (Some(topic), None) => Ok(Self::Topic(topic.to_string())),
            (None, Some(token)) => Ok(Self::Token(token.to_string())),
            (None, None) => Err(PushError::usage("A token or topic must be specified")),
            (Some(_), Some(_)) => Err(PushError::usage(
                "You can specify only a token or topic, not both",
            )),
        }
    }

    /// The topic or token string.
    pub fn value(&self) -> &str {
        match self {
            Self::Topic(v) | Self::Token(v) => v,
        }
    }
}

impl std::fmt::Display for DeliveryTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Topic(topic) => write!(f, "topic={}", topic),
            Self::Token(token) => write!(f, "token={}", token),
        }
    }
}

/// Unvalidated invocation values, as handed over by the command line.
#[derive(Debug, Clone, Default)]
pub struct RawArgs {
    pub credentials_file: Option<String>,
    pub push_file: Option<String>,
    pub topic: Option<String>,
    pub token: Option<String>,
    pub ttl: i64,
}

/// Validated send options, built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendConfig {
    /// Service-account key file for the delivery service.
    pub credentials_file: PathBuf,
    /// Push-definition file.
    pub push_file: PathBuf,
    /// Topic or token.
    pub target: DeliveryTarget,
    /// Message time-to-live.
    pub ttl: TimeToLive,
}

impl SendConfig {
    /// Validate the raw invocation values.
    pub fn collect(args: RawArgs) -> Result<Self> {
        let credentials_file = required_path(args.credentials_file, "credentialsFile")?;
        let push_file = required_path(args.push_file, "pushFile")?;
        let target = DeliveryTarget::resolve(args.topic.as_deref(), args.token.as_deref())?;
        let ttl = TimeToLive::new(args.ttl)?;

        Ok(Self {
            credentials_file,
            push_file,
            target,
            ttl,
        })
    }
}

fn required_path(value: Option<String>, flag: &str) -> Result<PathBuf> {
    match value {
        Some(v) if !v.is_empty() => Ok(PathBuf::from(v)),
        _ => Err(PushError::usage(format!("{} not specified", flag))),
    }
}
