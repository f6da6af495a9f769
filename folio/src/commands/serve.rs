use folio_config::Config;
use folio_email_contracts::EmailService;
use tracing::{info, warn};

use crate::{email, environment};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let email = email::connect(&config.email)?;

    // Email delivery is best-effort, so an unreachable SMTP server must not
    // prevent the server from starting.
    match email.ping().await {
        Ok(()) => info!("Email notifications: configured"),
        Err(err) => warn!("Email notifications: not available ({err:#})"),
    }

    let server = environment::build(&config, email);

    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
