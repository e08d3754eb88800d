use anyhow::Context;
use hf_catalog::format_quants;
use tracing::debug;

use crate::cli::{GlobalArgs, QuantsArgs};
use crate::config::AppConfig;

pub async fn execute(global: GlobalArgs, args: QuantsArgs) -> anyhow::Result<()> {
    let cfg = AppConfig::load_or_default()?;
    let client = global.client(&cfg)?;
    let format = args.output_format.unwrap_or(cfg.output_format);

    let quants = client
        .available_quants(&args.model_id)
        .await
        .with_context(|| format!("failed to get quantizations for {}", args.model_id))?;
    debug!(model = %args.model_id, count = quants.len(), "quantizations resolved");

    println!("{}", format_quants(&quants, format)?);
    Ok(())
}
