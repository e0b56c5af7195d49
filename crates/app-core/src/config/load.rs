use anyhow::Result;

use super::types::AppConfig;

impl AppConfig {
    /// Defaults, then the TOML file, then `CLAIMGUARD_*` env overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::default();
        cfg.apply_file_config()?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }
}
