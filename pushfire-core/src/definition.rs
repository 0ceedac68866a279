//! Push-definition file model and reader.
//!
//! A push definition is a JSON document with an optional `notification`
//! and an optional map of string `data`:
//!
//! ```json
//! {
//!    "notification": {
//!       "title": "Test Title",
//!       "body": "Test Body",
//!       "image": "https://whatever.com/image.png"
//!    },
//!    "data": {
//!      "key1": "value1",
//!      "key2": "value2"
//!    }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use crate::{PushError, Result};

/// Visible notification content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Notification title.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Notification body.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Notification {
    /// Create a notification with a title and body.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            image: None,
        }
    }

    /// Set the image URL.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Contents of a push-definition file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushDefinition {
    /// Notification shown to the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    /// Custom key/value payload.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
}

impl PushDefinition {
    /// Create an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the notification.
    pub fn notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    /// Add a data entry.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Read and decode a push-definition file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_error = |source| PushError::FileAccess {
            path: path.to_path_buf(),
            source,
        };

        let mut content = Vec::new();
        {
            let mut file = std::fs::File::open(path).map_err(file_error)?;
            file.read_to_end(&mut content).map_err(file_error)?;
        }

        serde_json::from_slice(&content).map_err(|source| PushError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Decode a push definition from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Encode as push-definition JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
