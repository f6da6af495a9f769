use std::sync::Arc;

use folio_models::message::{ContactMessage, MessageId, MessageStatus};
use folio_persistence_contracts::message::MessageRepository;
use tokio::sync::RwLock;

/// Keeps all messages in process memory, in insertion order.
///
/// Every operation takes the lock exactly once, so each mutation is atomic
/// with respect to concurrent requests. The collection is lost on restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryMessageRepository {
    state: Arc<RwLock<Vec<ContactMessage>>>,
}

impl MemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageRepository for MemoryMessageRepository {
    async fn list(&self) -> anyhow::Result<Vec<ContactMessage>> {
        Ok(self.state.read().await.clone())
    }

    async fn get(&self, message_id: MessageId) -> anyhow::Result<Option<ContactMessage>> {
        Ok(self
            .state
            .read()
            .await
            .iter()
            .find(|message| message.id == message_id)
            .cloned())
    }

    async fn create(&self, message: &ContactMessage) -> anyhow::Result<()> {
        self.state.write().await.push(message.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        message_id: MessageId,
        status: MessageStatus,
    ) -> anyhow::Result<Option<ContactMessage>> {
        let mut messages = self.state.write().await;
        Ok(messages
            .iter_mut()
            .find(|message| message.id == message_id)
            .map(|message| {
                message.status = status;
                message.clone()
            }))
    }

    async fn delete(&self, message_id: MessageId) -> anyhow::Result<Option<ContactMessage>> {
        let mut messages = self.state.write().await;
        Ok(messages
            .iter()
            .position(|message| message.id == message_id)
            .map(|index| messages.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use folio_models::message::ContactMessageAuthor;
    use uuid::Uuid;

    use super::*;

    #[tokio::test]
    async fn create_and_list_in_insertion_order() {
        // Arrange
        let sut = MemoryMessageRepository::new();
        let first = message("Alice");
        let second = message("Bob");

        // Act
        sut.create(&first).await.unwrap();
        sut.create(&second).await.unwrap();
        let result = sut.list().await.unwrap();

        // Assert
        assert_eq!(result, [first, second]);
    }

    #[tokio::test]
    async fn get_returns_the_matching_message() {
        // Arrange
        let sut = MemoryMessageRepository::new();
        let stored = message("Alice");
        sut.create(&stored).await.unwrap();

        // Act
        let found = sut.get(stored.id).await.unwrap();
        let missing = sut.get(MessageId::from(Uuid::now_v7())).await.unwrap();

        // Assert
        assert_eq!(found, Some(stored));
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn update_status_flips_only_the_matching_message() {
        // Arrange
        let sut = MemoryMessageRepository::new();
        let first = message("Alice");
        let second = message("Bob");
        sut.create(&first).await.unwrap();
        sut.create(&second).await.unwrap();

        // Act
        let updated = sut
            .update_status(first.id, MessageStatus::Read)
            .await
            .unwrap()
            .unwrap();

        // Assert
        assert_eq!(updated.status, MessageStatus::Read);
        let messages = sut.list().await.unwrap();
        assert_eq!(messages[0].status, MessageStatus::Read);
        assert_eq!(messages[1].status, MessageStatus::Unread);
    }

    #[tokio::test]
    async fn update_status_of_unknown_message() {
        // Arrange
        let sut = MemoryMessageRepository::new();

        // Act
        let result = sut
            .update_status(MessageId::from(Uuid::now_v7()), MessageStatus::Read)
            .await
            .unwrap();

        // Assert
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_message() {
        // Arrange
        let sut = MemoryMessageRepository::new();
        let first = message("Alice");
        let second = message("Bob");
        sut.create(&first).await.unwrap();
        sut.create(&second).await.unwrap();

        // Act
        let deleted = sut.delete(first.id).await.unwrap();

        // Assert
        assert_eq!(deleted, Some(first));
        assert_eq!(sut.list().await.unwrap(), [second]);
    }

    #[tokio::test]
    async fn delete_unknown_message_leaves_the_collection_unchanged() {
        // Arrange
        let sut = MemoryMessageRepository::new();
        let stored = message("Alice");
        sut.create(&stored).await.unwrap();

        // Act
        let deleted = sut.delete(MessageId::from(Uuid::now_v7())).await.unwrap();

        // Assert
        assert_eq!(deleted, None);
        assert_eq!(sut.list().await.unwrap().len(), 1);
    }

    fn message(name: &str) -> ContactMessage {
        ContactMessage {
            id: MessageId::from(Uuid::now_v7()),
            author: ContactMessageAuthor {
                name: name.try_into().unwrap(),
                email: "sender@example.com".try_into().unwrap(),
            },
            content: "Hello World!".try_into().unwrap(),
            created_at: chrono::Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap(),
            status: MessageStatus::Unread,
        }
    }
}
