use anyhow::Context;
use hf_catalog::{ListModelsOptions, OutputFormat, format_json, format_table};
use tracing::debug;

use crate::cli::{GlobalArgs, ListModelsArgs};
use crate::config::AppConfig;

pub async fn execute(global: GlobalArgs, args: ListModelsArgs) -> anyhow::Result<()> {
    let cfg = AppConfig::load_or_default()?;
    let client = global.client(&cfg)?;
    let format = args.output_format.unwrap_or(cfg.output_format);
    let opts = build_options(&args, &cfg);

    let models = client
        .list_models(&opts)
        .await
        .context("failed to list models")?;
    debug!(count = models.len(), "models fetched");

    let output = match format {
        OutputFormat::Json => format_json(&models).context("failed to format JSON")?,
        OutputFormat::Table => format_table(&models),
    };
    println!("{output}");
    Ok(())
}

fn build_options(args: &ListModelsArgs, cfg: &AppConfig) -> ListModelsOptions {
    ListModelsOptions {
        search: args.search.clone(),
        filter: args.filter.clone(),
        author: args.author.clone(),
        pipeline_tag: args.pipeline_tag.clone(),
        library_name: args.library_name.clone(),
        language: args.language.clone(),
        tag: args.tag.clone(),
        limit: args.limit.unwrap_or(cfg.default_limit),
        sort: args.sort.clone(),
        direction: args.direction,
        token: None,
    }
}
