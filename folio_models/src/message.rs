use chrono::{DateTime, Utc};
use nutype::nutype;
use serde::{Deserialize, Serialize};

use crate::macros::id;

id!(MessageId);

/// A stored contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: MessageId,
    pub author: ContactMessageAuthor,
    pub content: ContactMessageContent,
    pub created_at: DateTime<Utc>,
    pub status: MessageStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: ContactEmailAddress,
}

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorName(String);

/// The address the visitor entered into the contact form.
///
/// Only required to contain an `@` after trimming. This intentionally weak
/// check mirrors the frontend; an undeliverable address merely means the
/// acknowledgement email cannot be sent.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 256, predicate = |email| email.contains('@')),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactEmailAddress(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

/// Messages start out unread; the only exposed transition is unread -> read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Unread,
    Read,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_name_is_trimmed() {
        let name = ContactMessageAuthorName::try_new("  Max Mustermann  ").unwrap();
        assert_eq!(*name, "Max Mustermann");
    }

    #[test]
    fn author_name_must_not_be_empty() {
        ContactMessageAuthorName::try_new("   ").unwrap_err();
    }

    #[test]
    fn email_must_contain_at() {
        ContactEmailAddress::try_new("max.example.com").unwrap_err();
        ContactEmailAddress::try_new("max@example.com").unwrap();
        // Anything containing an "@" is accepted, even if undeliverable.
        ContactEmailAddress::try_new("not really valid@").unwrap();
    }

    #[test]
    fn content_must_not_be_empty() {
        ContactMessageContent::try_new("\n\t ").unwrap_err();
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(MessageStatus::Unread).unwrap(),
            serde_json::json!("unread")
        );
        assert_eq!(
            serde_json::to_value(MessageStatus::Read).unwrap(),
            serde_json::json!("read")
        );
    }
}
