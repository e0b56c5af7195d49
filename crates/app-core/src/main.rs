mod config;
mod routes;
mod state;

use std::path::Path;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::info;

use notify::{FraudAlertMailer, MailerConfig};
use scoring::{FraudModel, ScoringEngine};
use store::ClaimStore;

use config::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = AppConfig::load()?;

    let engine = match &config.model_path {
        Some(path) => {
            let model = FraudModel::from_file(Path::new(path))
                .with_context(|| format!("failed loading model artifact {}", path))?;
            ScoringEngine::with_model(model).context("model artifact failed validation")?
        }
        None => ScoringEngine::new(),
    };
    let store = ClaimStore::open(&config.database_path)?;
    let mailer = FraudAlertMailer::new(MailerConfig {
        gateway_url: config.mail_gateway_url.clone(),
        sender: config.mail_sender.clone(),
        dry_run: !config.mail_enabled,
    });

    info!(
        bind = %config.bind_addr,
        database = %config.database_path,
        model_id = %engine.model_id(),
        model_version = %engine.model_version(),
        mail_enabled = config.mail_enabled,
        "claimguard server started"
    );

    let app = routes::router(AppState::new(engine, store, mailer));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed binding {}", config.bind_addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("claimguard server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

#[cfg(test)]
mod tests;
