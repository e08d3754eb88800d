use tracing::info;

use crate::cli::ConfigArgs;
use crate::config::AppConfig;

pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.action {
        crate::cli::ConfigAction::Show => {
            let cfg = AppConfig::load_or_default()?;
            println!("{}", serde_json::to_string_pretty(&cfg.redacted())?);
        }
        crate::cli::ConfigAction::Set { key, value } => {
            let mut cfg = AppConfig::load_or_default()?;
            cfg.set(&key, value)?;
            cfg.save()?;
            info!(key = %key, path = %AppConfig::config_file().display(), "Configuration updated");
            println!("Configuration updated.");
        }
        crate::cli::ConfigAction::Path => {
            println!("{}", AppConfig::config_file().display());
        }
    }
    Ok(())
}
