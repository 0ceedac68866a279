//! Push-definition consistency rules.

use crate::{PushDefinition, ValidationError};

impl PushDefinition {
    /// Check the notification/data rules.
    ///
    /// A notification needs both title and body or neither. Without a
    /// notification there must be at least one data entry.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.notification {
            Some(n) if n.title.is_empty() && !n.body.is_empty() => {
                Err(ValidationError::BodyWithoutTitle)
            }
            Some(n) if !n.title.is_empty() && n.body.is_empty() => {
                Err(ValidationError::TitleWithoutBody)
            }
            Some(_) => Ok(()),
            None if self.data.is_empty() => Err(ValidationError::Empty),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Notification;

    #[test]
    fn test_title_and_body() {
        let def = PushDefinition::new().notification(Notification::new("Hi", "There"));
        assert!(def.validate().is_ok());
    }

    #[test]
    fn test_title_without_body() {
        let def = PushDefinition::new().notification(Notification::new("Hi", ""));
        assert_eq!(def.validate(), Err(ValidationError::TitleWithoutBody));
    }

    #[test]
    fn test_body_without_title() {
        let def = PushDefinition::new()
            .notification(Notification::new("", "There"))
            .data("k", "v");
        assert_eq!(def.validate(), Err(ValidationError::BodyWithoutTitle));
    }

    #[test]
    fn test_empty_definition() {
        assert_eq!(PushDefinition::new().validate(), Err(ValidationError::Empty));
    }

    #[test]
    fn test_data_only() {
        let def = PushDefinition::new().data("k", "v");
        assert!(def.validate().is_ok());
    }

    #[test]
    fn test_image_only_notification_counts_as_present() {
        let def = PushDefinition::new()
            .notification(Notification::default().image("https://x.test/a.png"));
        assert!(def.validate().is_ok());
    }
}
