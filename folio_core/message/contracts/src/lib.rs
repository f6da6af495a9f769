use std::future::Future;

use folio_models::message::{
    ContactEmailAddress, ContactMessage, ContactMessageAuthorName, ContactMessageContent,
    MessageId,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait MessageFeatureService: Send + Sync + 'static {
    /// Store a new contact message and send the two notification emails.
    ///
    /// Both email sends are best-effort: a failure in either is logged and
    /// swallowed, it never fails the submission. Returns the stored message.
    fn submit(
        &self,
        request: MessageSubmitRequest,
    ) -> impl Future<Output = anyhow::Result<ContactMessage>> + Send;

    /// Return all stored messages in insertion order.
    fn list(&self) -> impl Future<Output = anyhow::Result<Vec<ContactMessage>>> + Send;

    /// Flip the status of a message to read and return the updated record.
    fn mark_read(
        &self,
        message_id: MessageId,
    ) -> impl Future<Output = Result<ContactMessage, MessageMarkReadError>> + Send;

    /// Remove a message and return the removed record.
    fn delete(
        &self,
        message_id: MessageId,
    ) -> impl Future<Output = Result<ContactMessage, MessageDeleteError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSubmitRequest {
    pub name: ContactMessageAuthorName,
    pub email: ContactEmailAddress,
    pub message: ContactMessageContent,
}

#[derive(Debug, Error)]
pub enum MessageMarkReadError {
    #[error("The message does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum MessageDeleteError {
    #[error("The message does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockMessageFeatureService {
    pub fn with_submit(mut self, request: MessageSubmitRequest, result: ContactMessage) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list(mut self, result: Vec<ContactMessage>) -> Self {
        self.expect_list()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_mark_read(
        mut self,
        message_id: MessageId,
        result: Result<ContactMessage, MessageMarkReadError>,
    ) -> Self {
        self.expect_mark_read()
            .once()
            .with(mockall::predicate::eq(message_id))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_delete(
        mut self,
        message_id: MessageId,
        result: Result<ContactMessage, MessageDeleteError>,
    ) -> Self {
        self.expect_delete()
            .once()
            .with(mockall::predicate::eq(message_id))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
