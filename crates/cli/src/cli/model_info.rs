use anyhow::Context;
use hf_catalog::{extract_quants_from_siblings, format_details};

use crate::cli::{GlobalArgs, ModelInfoArgs};
use crate::config::AppConfig;

pub async fn execute(global: GlobalArgs, args: ModelInfoArgs) -> anyhow::Result<()> {
    let cfg = AppConfig::load_or_default()?;
    let client = global.client(&cfg)?;

    let details = client
        .model_details(&args.model_id)
        .await
        .with_context(|| format!("failed to fetch details for {}", args.model_id))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        let quants = extract_quants_from_siblings(&details.siblings);
        println!("{}", format_details(&details, &quants));
    }
    Ok(())
}
