pub mod config_cmd;
pub mod list_models;
pub mod model_info;
pub mod quants;

use clap::{Parser, Subcommand};
use hf_catalog::{CatalogClient, OutputFormat};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(
    name = "hf-models",
    version,
    about = "Hugging Face Models CLI",
    long_about = "A CLI tool for interacting with Hugging Face models.",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Args, Clone)]
pub struct GlobalArgs {
    /// Hugging Face API token (optional).
    #[arg(long, global = true, env = "HF_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Catalog API endpoint (overrides config).
    #[arg(long, global = true, env = "HF_MODELS_BASE_URL")]
    pub base_url: Option<String>,
}

impl GlobalArgs {
    /// Flag / environment first, then the config file.
    pub fn resolve_token(&self, cfg: &AppConfig) -> Option<String> {
        self.token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| cfg.token.clone())
    }

    pub fn client(&self, cfg: &AppConfig) -> anyhow::Result<CatalogClient> {
        let base_url = self.base_url.as_deref().unwrap_or(&cfg.base_url);
        Ok(CatalogClient::with_base_url(
            base_url,
            self.resolve_token(cfg),
        )?)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List models from the Hugging Face Hub.
    #[command(after_help = LIST_MODELS_EXAMPLES)]
    ListModels(ListModelsArgs),

    /// Show detailed information about one model.
    ModelInfo(ModelInfoArgs),

    /// List the GGUF quantizations available in a model repository.
    Quants(QuantsArgs),

    /// View / edit configuration.
    Config(ConfigArgs),
}

const LIST_MODELS_EXAMPLES: &str = "\
Examples:
  # List models (limited to 20 by default)
  hf-models list-models

  # Search for models with \"bert\" in their name
  hf-models list-models --search bert

  # Filter by author and pipeline tag
  hf-models list-models --author google --pipeline-tag text-classification

  # JSON output sorted by downloads
  hf-models list-models --limit 10 --sort downloads --output-format json";

//  Subcommand argument structs

#[derive(Debug, clap::Args, Clone)]
pub struct ListModelsArgs {
    /// Search for models with this string in their id.
    #[arg(long)]
    pub search: Option<String>,

    /// Filter models by library, task, or tags.
    #[arg(long)]
    pub filter: Option<String>,

    /// Filter models by author (username or organization).
    #[arg(long)]
    pub author: Option<String>,

    /// Filter models by pipeline tag (e.g. 'text-generation').
    #[arg(long)]
    pub pipeline_tag: Option<String>,

    /// Filter models by library (e.g. 'pytorch', 'gguf').
    #[arg(long)]
    pub library_name: Option<String>,

    /// Filter models by language (e.g. 'en', 'fr').
    #[arg(long)]
    pub language: Option<String>,

    /// Filter models by specific tag.
    #[arg(long)]
    pub tag: Option<String>,

    /// Maximum number of models to return (default: 20, from config).
    #[arg(long)]
    pub limit: Option<u32>,

    /// Sort results by field (e.g. 'downloads', 'likes', 'trending_score').
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction: -1 for descending, 1 for ascending.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub direction: i32,

    /// Output format: 'table' or 'json'.
    #[arg(long)]
    pub output_format: Option<OutputFormat>,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ModelInfoArgs {
    /// Repository id, e.g. `unsloth/Qwen3-8B-GGUF`.
    pub model_id: String,

    /// Print the raw detail record as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct QuantsArgs {
    /// Repository id, e.g. `TheBloke/Llama-2-7B-GGUF`.
    pub model_id: String,

    /// Output format: 'table' or 'json'.
    #[arg(long)]
    pub output_format: Option<OutputFormat>,
}

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Display the current configuration.
    Show,
    /// Set a configuration value.
    Set { key: String, value: String },
    /// Print the configuration file path.
    Path,
}
