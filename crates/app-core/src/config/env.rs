use super::types::AppConfig;
use super::util::{env_non_empty, parse_bool};

impl AppConfig {
    pub(super) fn apply_env_overrides(&mut self) {
        self.apply_env_server();
        self.apply_env_storage();
        self.apply_env_model();
        self.apply_env_mail();
    }

    fn apply_env_server(&mut self) {
        if let Some(v) = env_non_empty("CLAIMGUARD_BIND_ADDR") {
            self.bind_addr = v;
        }
    }

    fn apply_env_storage(&mut self) {
        if let Some(v) = env_non_empty("CLAIMGUARD_DATABASE_PATH") {
            self.database_path = v;
        }
    }

    fn apply_env_model(&mut self) {
        if let Some(v) = env_non_empty("CLAIMGUARD_MODEL_PATH") {
            self.model_path = Some(v);
        }
    }

    fn apply_env_mail(&mut self) {
        if let Some(v) = env_non_empty("CLAIMGUARD_MAIL_GATEWAY_URL") {
            self.mail_gateway_url = v;
        }
        if let Some(v) = env_non_empty("CLAIMGUARD_MAIL_SENDER") {
            self.mail_sender = v;
        }
        if let Some(v) = env_non_empty("CLAIMGUARD_MAIL_ENABLED") {
            self.mail_enabled = parse_bool(&v);
        }
    }
}
