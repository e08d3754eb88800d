//! HTTP client for the `/api/models` endpoints.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::format::{OutputFormat, format_json, format_table};
use crate::quant::extract_quants_from_siblings;
use crate::types::{ApiModel, ListModelsOptions, Model, ModelDetails};

/// Model listing endpoint; detail records live at `<DEFAULT_API_URL>/<id>`.
pub const DEFAULT_API_URL: &str = "https://huggingface.co/api/models";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

//  Service seam

/// The two catalog lookups everything else is built on.
pub trait CatalogService {
    fn list_models(
        &self,
        opts: &ListModelsOptions,
    ) -> impl Future<Output = Result<Vec<Model>>> + Send;

    fn model_details(&self, model_id: &str) -> impl Future<Output = Result<ModelDetails>> + Send;
}

/// Quantizations available in `model_id`, recovered from its file listing.
pub async fn available_quants<S: CatalogService>(service: &S, model_id: &str) -> Result<Vec<String>> {
    let details = service.model_details(model_id).await?;
    Ok(extract_quants_from_siblings(&details.siblings))
}

//  CatalogClient

#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl CatalogClient {
    /// Client against the public Hub. An empty token is treated as none.
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_base_url(DEFAULT_API_URL, token)
    }

    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("hf-models/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch models matching `opts`.
    pub async fn list_models(&self, opts: &ListModelsOptions) -> Result<Vec<Model>> {
        let params = opts.query_pairs();
        let mut request = self.http.get(&self.base_url);
        if !params.is_empty() {
            request = request.query(&params);
        }
        debug!(url = %self.base_url, ?params, "listing models");

        let body = self.send(request, self.token_for(opts.token.as_deref())).await?;
        let raw: Vec<ApiModel> = serde_json::from_str(&body).map_err(CatalogError::Decode)?;
        Ok(raw.into_iter().map(Model::from).collect())
    }

    /// Fetch the detail record (including the file listing) of one model.
    pub async fn model_details(&self, model_id: &str) -> Result<ModelDetails> {
        let url = self.details_url(model_id);
        debug!(%url, "fetching model details");

        let body = self.send(self.http.get(&url), self.token_for(None)).await?;
        serde_json::from_str(&body).map_err(CatalogError::Decode)
    }

    /// Quantizations available in a GGUF repository.
    pub async fn available_quants(&self, model_id: &str) -> Result<Vec<String>> {
        available_quants(self, model_id).await
    }

    fn details_url(&self, model_id: &str) -> String {
        format!("{}/{}", self.base_url, model_id.trim_matches('/'))
    }

    /// Per-call token wins over the client token; empty strings count as unset.
    fn token_for<'a>(&'a self, call_token: Option<&'a str>) -> Option<&'a str> {
        call_token
            .filter(|t| !t.is_empty())
            .or(self.token.as_deref())
    }

    async fn send(
        &self,
        mut request: reqwest::RequestBuilder,
        token: Option<&str>,
    ) -> Result<String> {
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "catalog API returned non-success status");
            return Err(CatalogError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

impl CatalogService for CatalogClient {
    async fn list_models(&self, opts: &ListModelsOptions) -> Result<Vec<Model>> {
        CatalogClient::list_models(self, opts).await
    }

    async fn model_details(&self, model_id: &str) -> Result<ModelDetails> {
        CatalogClient::model_details(self, model_id).await
    }
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

//  Library entry point

/// List models and render them in `format`, as the CLI would print them.
pub async fn list_models_formatted(opts: &ListModelsOptions, format: OutputFormat) -> Result<String> {
    let client = CatalogClient::new(opts.token.clone())?;
    let models = client.list_models(opts).await?;
    match format {
        OutputFormat::Json => format_json(&models),
        OutputFormat::Table => Ok(format_table(&models)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::types::Sibling;

    struct FakeCatalog {
        details: HashMap<String, ModelDetails>,
    }

    impl FakeCatalog {
        fn with_files(model_id: &str, files: &[&str]) -> Self {
            let details = ModelDetails {
                id: model_id.to_string(),
                siblings: files.iter().map(|f| Sibling::new(*f)).collect(),
                ..Default::default()
            };
            Self {
                details: HashMap::from([(model_id.to_string(), details)]),
            }
        }
    }

    impl CatalogService for FakeCatalog {
        async fn list_models(&self, _opts: &ListModelsOptions) -> Result<Vec<Model>> {
            Ok(Vec::new())
        }

        async fn model_details(&self, model_id: &str) -> Result<ModelDetails> {
            self.details
                .get(model_id)
                .cloned()
                .ok_or_else(|| CatalogError::Api {
                    status: 404,
                    body: "Repository not found".into(),
                })
        }
    }

    #[tokio::test]
    async fn test_available_quants_from_details() {
        let fake = FakeCatalog::with_files(
            "unsloth/Qwen3-8B-GGUF",
            &[
                "README.md",
                "Qwen3-8B-Q4_K_M.gguf",
                "BF16/Qwen3-8B-BF16-00001-of-00002.gguf",
                "BF16/Qwen3-8B-BF16-00002-of-00002.gguf",
                "Qwen3-8B-UD-TQ1_0.gguf",
            ],
        );
        let quants = available_quants(&fake, "unsloth/Qwen3-8B-GGUF").await.unwrap();
        assert_eq!(quants, vec!["Q4_K_M", "BF16", "UD-TQ1_0"]);
    }

    #[tokio::test]
    async fn test_available_quants_propagates_service_error() {
        let fake = FakeCatalog::with_files("a/b", &[]);
        let err = available_quants(&fake, "missing/model").await.unwrap_err();
        assert!(matches!(err, CatalogError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_available_quants_empty_repository() {
        let fake = FakeCatalog::with_files("a/b", &["config.json", "model.safetensors"]);
        assert!(available_quants(&fake, "a/b").await.unwrap().is_empty());
    }

    #[test]
    fn test_details_url() {
        let client = CatalogClient::with_base_url("http://localhost:9000/api/models/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000/api/models");
        assert_eq!(
            client.details_url("TheBloke/Llama-2-7B-GGUF"),
            "http://localhost:9000/api/models/TheBloke/Llama-2-7B-GGUF"
        );
    }

    #[test]
    fn test_token_precedence() {
        let client = CatalogClient::new(Some("client".into())).unwrap();
        assert_eq!(client.token_for(None), Some("client"));
        assert_eq!(client.token_for(Some("")), Some("client"));
        assert_eq!(client.token_for(Some("call")), Some("call"));

        let anonymous = CatalogClient::new(Some(String::new())).unwrap();
        assert_eq!(anonymous.token_for(None), None);
    }

    #[test]
    fn test_debug_hides_token() {
        let client = CatalogClient::new(Some("hf_secret".into())).unwrap();
        let dbg = format!("{client:?}");
        assert!(dbg.contains("has_token: true"));
        assert!(!dbg.contains("hf_secret"));
    }
}
