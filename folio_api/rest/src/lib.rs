use std::net::IpAddr;

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use folio_core_health_contracts::HealthFeatureService;
use folio_core_message_contracts::MessageFeatureService;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Message> {
    health: Health,
    message: Message,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    /// Origin the frontend is served from. The only origin allowed by CORS.
    pub allowed_origin: String,
}

impl<Health, Message> RestServer<Health, Message>
where
    Health: HealthFeatureService,
    Message: MessageFeatureService,
{
    pub fn new(health: Health, message: Message, config: RestServerConfig) -> Self {
        Self {
            health,
            message,
            config,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router()?;
        let listener = TcpListener::bind((host, port)).await?;
        info!("Listening on {}", listener.local_addr()?);
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> anyhow::Result<Router<()>> {
        let allowed_origin = self
            .config
            .allowed_origin
            .parse::<HeaderValue>()
            .context("Failed to parse the allowed origin")?;

        let cors = CorsLayer::new()
            .allow_origin(allowed_origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true);

        Ok(Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::message::router(self.message.into()))
            .layer(TraceLayer::new_for_http())
            .layer(cors))
    }
}
