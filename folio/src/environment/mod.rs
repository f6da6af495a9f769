use std::sync::Arc;

use folio_api_rest::RestServerConfig;
use folio_config::Config;
use folio_core_health_impl::HealthFeatureServiceImpl;
use folio_core_message_impl::{MessageFeatureConfig, MessageFeatureServiceImpl};
use folio_email_impl::{template::TemplateEmailServiceImpl, EmailServiceImpl};
use folio_persistence_memory::MemoryMessageRepository;
use folio_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use folio_templates_impl::TemplateServiceImpl;

pub mod types;

/// Wire up the service graph for the REST server.
pub fn build(config: &Config, email: EmailServiceImpl) -> types::RestServer {
    let time = TimeServiceImpl;
    let id = IdServiceImpl;

    let template_email = TemplateEmailServiceImpl::new(email, TemplateServiceImpl::new());
    let message_repo = MemoryMessageRepository::new();

    let message = MessageFeatureServiceImpl::new(
        time,
        id,
        message_repo,
        template_email,
        MessageFeatureConfig {
            owner: Arc::new(config.contact.email.clone().into()),
        },
    );
    let health = HealthFeatureServiceImpl::new(time);

    folio_api_rest::RestServer::new(
        health,
        message,
        RestServerConfig {
            allowed_origin: config.http.allowed_origin.clone(),
        },
    )
}
