//! HTTP host for the portfolio site.

mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = dotenv
        && !e.not_found()
    {
        tracing::warn!(error = %e, ".env present but unreadable");
    }

    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;

    let app = routes::app(conf.leptos_options, config.links.clone());
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        github = %config.links.github_url,
        linkedin = %config.links.linkedin_url,
        email = %config.links.email,
        "portfolio listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
