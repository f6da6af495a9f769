use std::future::Future;

use folio_models::message::{ContactMessage, MessageId, MessageStatus};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait MessageRepository: Send + Sync + 'static {
    /// Return all messages in insertion order.
    fn list(&self) -> impl Future<Output = anyhow::Result<Vec<ContactMessage>>> + Send;

    /// Return the message with the given id.
    fn get(
        &self,
        message_id: MessageId,
    ) -> impl Future<Output = anyhow::Result<Option<ContactMessage>>> + Send;

    /// Append a new message to the collection.
    fn create(&self, message: &ContactMessage) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Set the status of a message and return the updated record, or `None`
    /// if no message with the given id exists.
    fn update_status(
        &self,
        message_id: MessageId,
        status: MessageStatus,
    ) -> impl Future<Output = anyhow::Result<Option<ContactMessage>>> + Send;

    /// Remove a message and return it, or `None` if no message with the
    /// given id exists.
    fn delete(
        &self,
        message_id: MessageId,
    ) -> impl Future<Output = anyhow::Result<Option<ContactMessage>>> + Send;
}

#[cfg(feature = "mock")]
impl MockMessageRepository {
    pub fn with_list(mut self, result: Vec<ContactMessage>) -> Self {
        self.expect_list()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get(mut self, message_id: MessageId, result: Option<ContactMessage>) -> Self {
        self.expect_get()
            .once()
            .with(mockall::predicate::eq(message_id))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_create(mut self, message: ContactMessage) -> Self {
        self.expect_create()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_update_status(
        mut self,
        message_id: MessageId,
        status: MessageStatus,
        result: Option<ContactMessage>,
    ) -> Self {
        self.expect_update_status()
            .once()
            .with(
                mockall::predicate::eq(message_id),
                mockall::predicate::eq(status),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_delete(mut self, message_id: MessageId, result: Option<ContactMessage>) -> Self {
        self.expect_delete()
            .once()
            .with(mockall::predicate::eq(message_id))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
