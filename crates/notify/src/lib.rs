use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::info;

const ALERT_SUBJECT: &str = "Fraud Alert Notification";

/// Mail-gateway settings for fraud alerts.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// POST endpoint of the mail gateway.
    pub gateway_url: String,
    /// Sender identity put on outgoing alerts.
    pub sender: String,
    /// Log alerts instead of delivering them.
    pub dry_run: bool,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            gateway_url: "http://127.0.0.1:8025/api/v1/mail/send".to_string(),
            sender: "alerts@claimguard.local".to_string(),
            dry_run: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct AlertMessage<'a> {
    sender: &'a str,
    recipient: &'a str,
    subject: &'a str,
    body: String,
}

/// Delivers fraud alerts through an HTTP mail gateway.
#[derive(Debug, Clone)]
pub struct FraudAlertMailer {
    config: MailerConfig,
    http: reqwest::Client,
}

impl FraudAlertMailer {
    pub fn new(config: MailerConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Send one alert. `fraud_probability` is a percentage (0–100).
    pub async fn send_fraud_alert(&self, recipient: &str, fraud_probability: f64) -> Result<()> {
        let message = AlertMessage {
            sender: &self.config.sender,
            recipient,
            subject: ALERT_SUBJECT,
            body: alert_body(fraud_probability),
        };

        if self.config.dry_run {
            info!(recipient, fraud_probability, "dry run: fraud alert suppressed");
            return Ok(());
        }

        let response = self
            .http
            .post(&self.config.gateway_url)
            .json(&message)
            .send()
            .await
            .with_context(|| format!("failed posting alert to {}", self.config.gateway_url))?;
        if !response.status().is_success() {
            bail!("mail gateway returned {}", response.status());
        }
        info!(recipient, "fraud alert delivered");
        Ok(())
    }
}

fn alert_body(fraud_probability: f64) -> String {
    format!(
        "Dear User,\n\n\
         A suspicious claim was flagged with a fraud probability of {:.2}%.\n\
         Please verify the claim for further investigation.\n\n\
         Thanks,\nFraud Detection System",
        fraud_probability
    )
}

#[cfg(test)]
mod tests;
