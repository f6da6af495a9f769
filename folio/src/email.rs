use anyhow::Context;
use folio_config::EmailConfig;
use folio_email_impl::EmailServiceImpl;

/// Create the SMTP transport.
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(&config.smtp_url, config.from.clone())
        .context("Failed to create the SMTP transport")
}
