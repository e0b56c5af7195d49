use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::types::AppConfig;
use super::util::{env_non_empty, non_empty};

const DEFAULT_CONFIG_PATH: &str = "claimguard.toml";

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    server: Option<FileServerConfig>,
    storage: Option<FileStorageConfig>,
    model: Option<FileModelConfig>,
    mail: Option<FileMailConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct FileServerConfig {
    bind_addr: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileStorageConfig {
    database_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileModelConfig {
    path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileMailConfig {
    gateway_url: Option<String>,
    sender: Option<String>,
    enabled: Option<bool>,
}

impl AppConfig {
    pub(super) fn apply_file_config(&mut self) -> Result<bool> {
        let Some(path) = resolve_config_path() else {
            return Ok(false);
        };

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config file {}", path.display()))?;
        self.apply_file_str(&raw)
            .with_context(|| format!("failed parsing TOML config {}", path.display()))?;
        Ok(true)
    }

    pub(super) fn apply_file_str(&mut self, raw: &str) -> Result<()> {
        let file_cfg: FileConfig = toml::from_str(raw)?;
        self.apply_file_server(file_cfg.server);
        self.apply_file_storage(file_cfg.storage);
        self.apply_file_model(file_cfg.model);
        self.apply_file_mail(file_cfg.mail);
        Ok(())
    }

    fn apply_file_server(&mut self, server: Option<FileServerConfig>) {
        let Some(server) = server else {
            return;
        };
        if let Some(v) = non_empty(server.bind_addr) {
            self.bind_addr = v;
        }
    }

    fn apply_file_storage(&mut self, storage: Option<FileStorageConfig>) {
        let Some(storage) = storage else {
            return;
        };
        if let Some(v) = non_empty(storage.database_path) {
            self.database_path = v;
        }
    }

    fn apply_file_model(&mut self, model: Option<FileModelConfig>) {
        let Some(model) = model else {
            return;
        };
        if let Some(v) = non_empty(model.path) {
            self.model_path = Some(v);
        }
    }

    fn apply_file_mail(&mut self, mail: Option<FileMailConfig>) {
        let Some(mail) = mail else {
            return;
        };
        if let Some(v) = non_empty(mail.gateway_url) {
            self.mail_gateway_url = v;
        }
        if let Some(v) = non_empty(mail.sender) {
            self.mail_sender = v;
        }
        if let Some(v) = mail.enabled {
            self.mail_enabled = v;
        }
    }
}

/// Explicit path via CLAIMGUARD_CONFIG wins; otherwise the default file is
/// used only when present.
fn resolve_config_path() -> Option<PathBuf> {
    if let Some(v) = env_non_empty("CLAIMGUARD_CONFIG") {
        return Some(PathBuf::from(v));
    }
    let default = PathBuf::from(DEFAULT_CONFIG_PATH);
    default.exists().then_some(default)
}
