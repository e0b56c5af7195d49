use std::path::Path;
use std::{env, fs};

use anyhow::{Context, Result};

use dashboard::{render_report, Config};
use scoring::{FraudModel, RawClaim, ScoringEngine};

fn main() -> Result<()> {
    let config = Config::build(env::args()).map_err(anyhow::Error::msg)?;

    let raw = fs::read_to_string(&config.claim_path)
        .with_context(|| format!("failed reading claim file {}", config.claim_path))?;
    let claim: RawClaim = serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing claim file {}", config.claim_path))?;
    let claim = claim.parse()?;

    let engine = match env::var("CLAIMGUARD_MODEL_PATH") {
        Ok(path) if !path.trim().is_empty() => {
            let model = FraudModel::from_file(Path::new(&path))
                .with_context(|| format!("failed loading model artifact {}", path))?;
            ScoringEngine::with_model(model).context("model artifact failed validation")?
        }
        _ => ScoringEngine::new(),
    };

    print!("{}", render_report(&engine.assess(&claim)));
    Ok(())
}
