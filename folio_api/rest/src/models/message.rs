use chrono::{DateTime, Utc};
use folio_models::message::{
    ContactEmailAddress, ContactMessage, ContactMessageAuthorName, ContactMessageContent,
    MessageId, MessageStatus,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ApiContactMessage {
    pub id: MessageId,
    pub name: ContactMessageAuthorName,
    pub email: ContactEmailAddress,
    pub message: ContactMessageContent,
    pub timestamp: DateTime<Utc>,
    pub status: MessageStatus,
}

impl From<ContactMessage> for ApiContactMessage {
    fn from(value: ContactMessage) -> Self {
        Self {
            id: value.id,
            name: value.author.name,
            email: value.author.email,
            message: value.content,
            timestamp: value.created_at,
            status: value.status,
        }
    }
}
