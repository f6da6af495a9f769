use folio_core_health_impl::HealthFeatureServiceImpl;
use folio_core_message_impl::MessageFeatureServiceImpl;
use folio_email_impl::{template::TemplateEmailServiceImpl, EmailServiceImpl};
use folio_persistence_memory::MemoryMessageRepository;
use folio_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use folio_templates_impl::TemplateServiceImpl;

// Shared
pub type TemplateEmail = TemplateEmailServiceImpl<EmailServiceImpl, TemplateServiceImpl>;

// Core
pub type Health = HealthFeatureServiceImpl<TimeServiceImpl>;
pub type Message =
    MessageFeatureServiceImpl<TimeServiceImpl, IdServiceImpl, MemoryMessageRepository, TemplateEmail>;

// API
pub type RestServer = folio_api_rest::RestServer<Health, Message>;
