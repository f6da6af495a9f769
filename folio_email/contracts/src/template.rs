use std::future::Future;

use folio_models::email_address::EmailAddressWithName;
use folio_templates_contracts::{MessageNotificationTemplate, MessageReceivedTemplate};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateEmailService: Send + Sync + 'static {
    /// Notify the site owner of a new contact form submission.
    fn send_message_notification_email(
        &self,
        recipient: EmailAddressWithName,
        data: &MessageNotificationTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Acknowledge a contact form submission to its author.
    fn send_message_received_email(
        &self,
        recipient: EmailAddressWithName,
        data: &MessageReceivedTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl MockTemplateEmailService {
    pub fn with_send_message_notification_email(
        mut self,
        recipient: EmailAddressWithName,
        data: MessageNotificationTemplate,
        result: bool,
    ) -> Self {
        self.expect_send_message_notification_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_message_received_email(
        mut self,
        recipient: EmailAddressWithName,
        data: MessageReceivedTemplate,
        result: bool,
    ) -> Self {
        self.expect_send_message_received_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
