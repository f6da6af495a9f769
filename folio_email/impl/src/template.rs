use folio_email_contracts::{template::TemplateEmailService, ContentType, Email, EmailService};
use folio_models::email_address::EmailAddressWithName;
use folio_templates_contracts::{
    MessageNotificationTemplate, MessageReceivedTemplate, Template, TemplateService,
};

#[derive(Debug, Clone)]
pub struct TemplateEmailServiceImpl<Email, Template> {
    email: Email,
    template: Template,
}

impl<Email, Template> TemplateEmailServiceImpl<Email, Template> {
    pub fn new(email: Email, template: Template) -> Self {
        Self { email, template }
    }
}

impl<EmailS, TemplateS> TemplateEmailService for TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_message_notification_email(
        &self,
        recipient: EmailAddressWithName,
        data: &MessageNotificationTemplate,
    ) -> anyhow::Result<bool> {
        let subject = format!("New Portfolio Message from {}", data.name);
        self.send_email(recipient, data, subject).await
    }

    async fn send_message_received_email(
        &self,
        recipient: EmailAddressWithName,
        data: &MessageReceivedTemplate,
    ) -> anyhow::Result<bool> {
        self.send_email(recipient, data, "Thank you for your message")
            .await
    }
}

impl<EmailS, TemplateS> TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_email<T: Template + 'static>(
        &self,
        recipient: EmailAddressWithName,
        data: &T,
        subject: impl Into<String>,
    ) -> anyhow::Result<bool> {
        self.email
            .send(Email {
                recipient,
                subject: subject.into(),
                body: self.template.render(data)?,
                content_type: ContentType::Html,
                reply_to: None,
            })
            .await
    }
}
