/// Runtime configuration for the claimguard server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_path: String,
    /// Path to a classifier artifact; the built-in development model is
    /// used when unset.
    pub model_path: Option<String>,
    pub mail_gateway_url: String,
    pub mail_sender: String,
    /// When false, fraud alerts are logged instead of delivered.
    pub mail_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            database_path: "data/claimguard.db".to_string(),
            model_path: None,
            mail_gateway_url: "http://127.0.0.1:8025/api/v1/mail/send".to_string(),
            mail_sender: "alerts@claimguard.local".to_string(),
            mail_enabled: false,
        }
    }
}
