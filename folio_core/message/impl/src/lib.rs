use std::sync::Arc;

use anyhow::{anyhow, Context};
use folio_core_message_contracts::{
    MessageDeleteError, MessageFeatureService, MessageMarkReadError, MessageSubmitRequest,
};
use folio_email_contracts::template::TemplateEmailService;
use folio_models::{
    email_address::{EmailAddress, EmailAddressWithName},
    message::{ContactMessage, ContactMessageAuthor, MessageId, MessageStatus},
};
use folio_persistence_contracts::message::MessageRepository;
use folio_shared_contracts::{id::IdService, time::TimeService};
use folio_templates_contracts::{MessageNotificationTemplate, MessageReceivedTemplate};
use tracing::error;

#[derive(Debug, Clone)]
pub struct MessageFeatureServiceImpl<Time, Id, MessageRepo, TemplateEmail> {
    time: Time,
    id: Id,
    message_repo: MessageRepo,
    template_email: TemplateEmail,
    config: MessageFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct MessageFeatureConfig {
    /// Address contact form submissions are forwarded to.
    pub owner: Arc<EmailAddressWithName>,
}

impl<Time, Id, MessageRepo, TemplateEmail>
    MessageFeatureServiceImpl<Time, Id, MessageRepo, TemplateEmail>
{
    pub fn new(
        time: Time,
        id: Id,
        message_repo: MessageRepo,
        template_email: TemplateEmail,
        config: MessageFeatureConfig,
    ) -> Self {
        Self {
            time,
            id,
            message_repo,
            template_email,
            config,
        }
    }
}

impl<Time, Id, MessageRepo, TemplateEmail> MessageFeatureService
    for MessageFeatureServiceImpl<Time, Id, MessageRepo, TemplateEmail>
where
    Time: TimeService,
    Id: IdService,
    MessageRepo: MessageRepository,
    TemplateEmail: TemplateEmailService,
{
    async fn submit(&self, request: MessageSubmitRequest) -> anyhow::Result<ContactMessage> {
        let message = ContactMessage {
            id: self.id.generate(),
            author: ContactMessageAuthor {
                name: request.name,
                email: request.email,
            },
            content: request.message,
            created_at: self.time.now(),
            status: MessageStatus::Unread,
        };

        self.message_repo
            .create(&message)
            .await
            .context("Failed to store message")?;

        // Both sends are best-effort and must never fail the submission.
        if let Err(err) = self.notify_owner(&message).await {
            error!(
                "Failed to send notification email to {}: {err:#}",
                self.config.owner
            );
        }
        if let Err(err) = self.acknowledge_author(&message).await {
            error!(
                "Failed to send acknowledgement email to {}: {err:#}",
                *message.author.email
            );
        }

        Ok(message)
    }

    async fn list(&self) -> anyhow::Result<Vec<ContactMessage>> {
        self.message_repo
            .list()
            .await
            .context("Failed to list messages")
    }

    async fn mark_read(&self, message_id: MessageId) -> Result<ContactMessage, MessageMarkReadError> {
        self.message_repo
            .update_status(message_id, MessageStatus::Read)
            .await
            .context("Failed to update message status")?
            .ok_or(MessageMarkReadError::NotFound)
    }

    async fn delete(&self, message_id: MessageId) -> Result<ContactMessage, MessageDeleteError> {
        self.message_repo
            .delete(message_id)
            .await
            .context("Failed to delete message")?
            .ok_or(MessageDeleteError::NotFound)
    }
}

impl<Time, Id, MessageRepo, TemplateEmail>
    MessageFeatureServiceImpl<Time, Id, MessageRepo, TemplateEmail>
where
    Time: TimeService,
    Id: IdService,
    MessageRepo: MessageRepository,
    TemplateEmail: TemplateEmailService,
{
    async fn notify_owner(&self, message: &ContactMessage) -> anyhow::Result<()> {
        let data = MessageNotificationTemplate {
            name: message.author.name.clone().into_inner(),
            email: message.author.email.clone().into_inner(),
            message: message.content.clone().into_inner(),
            timestamp: message
                .created_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
        };

        self.template_email
            .send_message_notification_email((*self.config.owner).clone(), &data)
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("The smtp server rejected the notification email"))
    }

    async fn acknowledge_author(&self, message: &ContactMessage) -> anyhow::Result<()> {
        // The author address only had to contain an "@" at submission, so it
        // may still fail to parse as a mailbox here.
        let recipient = message
            .author
            .email
            .parse::<EmailAddress>()
            .context("Failed to parse the author address as a mailbox")?
            .with_name(message.author.name.clone().into_inner());

        let data = MessageReceivedTemplate {
            name: message.author.name.clone().into_inner(),
        };

        self.template_email
            .send_message_received_email(recipient, &data)
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("The smtp server rejected the acknowledgement email"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use folio_email_contracts::template::MockTemplateEmailService;
    use folio_persistence_contracts::message::MockMessageRepository;
    use folio_shared_contracts::{id::MockIdService, time::MockTimeService};
    use folio_utils::assert_matches;
    use uuid::Uuid;

    use super::*;

    type Sut = MessageFeatureServiceImpl<
        MockTimeService,
        MockIdService,
        MockMessageRepository,
        MockTemplateEmailService,
    >;

    #[tokio::test]
    async fn submit_stores_the_message_and_sends_both_emails() {
        // Arrange
        let expected = message();

        let time = MockTimeService::new().with_now(expected.created_at);
        let id = MockIdService::new().with_generate(expected.id);
        let message_repo = MockMessageRepository::new().with_create(expected.clone());
        let template_email = MockTemplateEmailService::new()
            .with_send_message_notification_email(owner(), notification_data(), true)
            .with_send_message_received_email(
                "Max Mustermann <max.mustermann@example.de>".parse().unwrap(),
                received_data(),
                true,
            );

        let sut = sut(time, id, message_repo, template_email);

        // Act
        let result = sut.submit(request()).await;

        // Assert
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn submit_succeeds_if_the_notification_email_fails() {
        // Arrange
        let expected = message();

        let time = MockTimeService::new().with_now(expected.created_at);
        let id = MockIdService::new().with_generate(expected.id);
        let message_repo = MockMessageRepository::new().with_create(expected.clone());

        let mut template_email = MockTemplateEmailService::new();
        template_email
            .expect_send_message_notification_email()
            .once()
            .return_once(|_, _| {
                Box::pin(std::future::ready(Err(anyhow!("failed to connect"))))
            });
        let template_email = template_email.with_send_message_received_email(
            "Max Mustermann <max.mustermann@example.de>".parse().unwrap(),
            received_data(),
            true,
        );

        let sut = sut(time, id, message_repo, template_email);

        // Act
        let result = sut.submit(request()).await;

        // Assert
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn submit_succeeds_if_both_emails_are_rejected() {
        // Arrange
        let expected = message();

        let time = MockTimeService::new().with_now(expected.created_at);
        let id = MockIdService::new().with_generate(expected.id);
        let message_repo = MockMessageRepository::new().with_create(expected.clone());
        let template_email = MockTemplateEmailService::new()
            .with_send_message_notification_email(owner(), notification_data(), false)
            .with_send_message_received_email(
                "Max Mustermann <max.mustermann@example.de>".parse().unwrap(),
                received_data(),
                false,
            );

        let sut = sut(time, id, message_repo, template_email);

        // Act
        let result = sut.submit(request()).await;

        // Assert
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn submit_skips_the_acknowledgement_if_the_address_is_not_a_mailbox() {
        // Arrange
        // Contains an "@", so it passed validation, but it is not deliverable.
        let author_email = "not a mailbox@";

        let expected = ContactMessage {
            author: ContactMessageAuthor {
                name: "Max Mustermann".try_into().unwrap(),
                email: author_email.try_into().unwrap(),
            },
            ..message()
        };

        let time = MockTimeService::new().with_now(expected.created_at);
        let id = MockIdService::new().with_generate(expected.id);
        let message_repo = MockMessageRepository::new().with_create(expected.clone());
        let template_email = MockTemplateEmailService::new()
            .with_send_message_notification_email(
                owner(),
                MessageNotificationTemplate {
                    email: author_email.into(),
                    ..notification_data()
                },
                true,
            );

        let sut = sut(time, id, message_repo, template_email);

        // Act
        let result = sut
            .submit(MessageSubmitRequest {
                email: author_email.try_into().unwrap(),
                ..request()
            })
            .await;

        // Assert
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn list_returns_all_messages() {
        // Arrange
        let expected = vec![message()];
        let message_repo = MockMessageRepository::new().with_list(expected.clone());

        let sut = sut(
            MockTimeService::new(),
            MockIdService::new(),
            message_repo,
            MockTemplateEmailService::new(),
        );

        // Act
        let result = sut.list().await;

        // Assert
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn mark_read_flips_the_status() {
        // Arrange
        let expected = ContactMessage {
            status: MessageStatus::Read,
            ..message()
        };
        let message_repo = MockMessageRepository::new().with_update_status(
            expected.id,
            MessageStatus::Read,
            Some(expected.clone()),
        );

        let sut = sut(
            MockTimeService::new(),
            MockIdService::new(),
            message_repo,
            MockTemplateEmailService::new(),
        );

        // Act
        let result = sut.mark_read(expected.id).await;

        // Assert
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn mark_read_unknown_message() {
        // Arrange
        let message_id = MessageId::from(Uuid::now_v7());
        let message_repo =
            MockMessageRepository::new().with_update_status(message_id, MessageStatus::Read, None);

        let sut = sut(
            MockTimeService::new(),
            MockIdService::new(),
            message_repo,
            MockTemplateEmailService::new(),
        );

        // Act
        let result = sut.mark_read(message_id).await;

        // Assert
        assert_matches!(result, Err(MessageMarkReadError::NotFound));
    }

    #[tokio::test]
    async fn delete_returns_the_removed_message() {
        // Arrange
        let expected = message();
        let message_repo =
            MockMessageRepository::new().with_delete(expected.id, Some(expected.clone()));

        let sut = sut(
            MockTimeService::new(),
            MockIdService::new(),
            message_repo,
            MockTemplateEmailService::new(),
        );

        // Act
        let result = sut.delete(expected.id).await;

        // Assert
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn delete_unknown_message() {
        // Arrange
        let message_id = MessageId::from(Uuid::now_v7());
        let message_repo = MockMessageRepository::new().with_delete(message_id, None);

        let sut = sut(
            MockTimeService::new(),
            MockIdService::new(),
            message_repo,
            MockTemplateEmailService::new(),
        );

        // Act
        let result = sut.delete(message_id).await;

        // Assert
        assert_matches!(result, Err(MessageDeleteError::NotFound));
    }

    fn sut(
        time: MockTimeService,
        id: MockIdService,
        message_repo: MockMessageRepository,
        template_email: MockTemplateEmailService,
    ) -> Sut {
        MessageFeatureServiceImpl::new(
            time,
            id,
            message_repo,
            template_email,
            MessageFeatureConfig {
                owner: Arc::new("owner@example.com".parse().unwrap()),
            },
        )
    }

    fn owner() -> EmailAddressWithName {
        "owner@example.com".parse().unwrap()
    }

    fn request() -> MessageSubmitRequest {
        MessageSubmitRequest {
            name: "Max Mustermann".try_into().unwrap(),
            email: "max.mustermann@example.de".try_into().unwrap(),
            message: "Hello World!".try_into().unwrap(),
        }
    }

    fn message() -> ContactMessage {
        ContactMessage {
            id: MessageId::from(Uuid::now_v7()),
            author: ContactMessageAuthor {
                name: "Max Mustermann".try_into().unwrap(),
                email: "max.mustermann@example.de".try_into().unwrap(),
            },
            content: "Hello World!".try_into().unwrap(),
            created_at: chrono::Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap(),
            status: MessageStatus::Unread,
        }
    }

    fn notification_data() -> MessageNotificationTemplate {
        MessageNotificationTemplate {
            name: "Max Mustermann".into(),
            email: "max.mustermann@example.de".into(),
            message: "Hello World!".into(),
            timestamp: "2024-05-17 12:30:00 UTC".into(),
        }
    }

    fn received_data() -> MessageReceivedTemplate {
        MessageReceivedTemplate {
            name: "Max Mustermann".into(),
        }
    }
}
