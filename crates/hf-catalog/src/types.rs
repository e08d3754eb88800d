//! Catalog record types and query options.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

//  Query options

/// Filters and sort order for a model listing.
///
/// Empty strings and zero numbers are treated as unset and never sent.
#[derive(Debug, Clone, Default)]
pub struct ListModelsOptions {
    pub search: Option<String>,
    pub filter: Option<String>,
    pub author: Option<String>,
    pub pipeline_tag: Option<String>,
    pub library_name: Option<String>,
    pub language: Option<String>,
    pub tag: Option<String>,
    /// Maximum number of models (0 = server default).
    pub limit: u32,
    pub sort: Option<String>,
    /// -1 descending, 1 ascending, 0 = server default.
    pub direction: i32,
    /// Per-call bearer token, takes precedence over the client token.
    pub token: Option<String>,
}

impl ListModelsOptions {
    /// Query parameters in the order the catalog API documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        let strings = [
            ("search", &self.search),
            ("filter", &self.filter),
            ("author", &self.author),
            ("pipeline_tag", &self.pipeline_tag),
            ("library", &self.library_name),
            ("language", &self.language),
            ("tags", &self.tag),
        ];
        for (key, value) in strings {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((key, v.to_string()));
            }
        }
        if self.limit > 0 {
            params.push(("limit", self.limit.to_string()));
        }
        if let Some(sort) = self.sort.as_deref().filter(|s| !s.is_empty()) {
            params.push(("sort", sort.to_string()));
        }
        if self.direction != 0 {
            params.push(("direction", self.direction.to_string()));
        }
        params
    }
}

//  Model summary

/// One entry of a model listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub author: String,
    pub downloads: u64,
    pub likes: u64,
    #[serde(rename = "lastModified")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub library_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pipeline_tag: String,
    pub private: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub gated: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub trending_score: f64,
}

fn is_false(v: &bool) -> bool {
    !*v
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

/// Treat an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Raw listing record as returned by the API.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiModel {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub downloads: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: u64,
    #[serde(rename = "lastModified", default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub library_name: Option<String>,
    #[serde(default)]
    pub pipeline_tag: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub private: bool,
    #[serde(default)]
    pub gated: Option<Gated>,
    #[serde(rename = "trendingScore", default, deserialize_with = "null_as_default")]
    pub trending_score: f64,
}

/// `gated` is either a flag or an access mode such as `"auto"`/`"manual"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Gated {
    Flag(bool),
    Mode(String),
}

impl Gated {
    fn is_gated(&self) -> bool {
        match self {
            Self::Flag(v) => *v,
            Self::Mode(s) => !s.is_empty() && s != "false",
        }
    }
}

impl From<ApiModel> for Model {
    fn from(raw: ApiModel) -> Self {
        let author = raw
            .id
            .split_once('/')
            .map(|(owner, _)| owner.to_string())
            .unwrap_or_default();
        Self {
            author,
            downloads: raw.downloads,
            likes: raw.likes,
            last_modified: raw.last_modified,
            library_name: raw.library_name.unwrap_or_default(),
            pipeline_tag: raw.pipeline_tag.unwrap_or_default(),
            private: raw.private,
            gated: raw.gated.as_ref().is_some_and(Gated::is_gated),
            trending_score: raw.trending_score,
            id: raw.id,
        }
    }
}

//  Model details

/// Detailed record for a single repository, including its file listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelDetails {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub downloads: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: u64,
    #[serde(rename = "lastModified", default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pipeline_tag: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub library_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub siblings: Vec<Sibling>,
    #[serde(rename = "cardData", default, deserialize_with = "null_as_default")]
    pub card_data: CardData,
    #[serde(rename = "gguf", default)]
    pub gguf_info: Option<GgufInfo>,
}

/// A file in the model repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sibling {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rfilename: String,
}

impl Sibling {
    pub fn new(rfilename: impl Into<String>) -> Self {
        Self {
            rfilename: rfilename.into(),
        }
    }
}

/// Model card metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub model_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub model_type: String,
    #[serde(default)]
    pub base_model: Option<OneOrMany>,
    #[serde(default)]
    pub license: Option<OneOrMany>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantized_by: String,
}

impl CardData {
    /// First base model, or `""` when none is declared.
    pub fn base_model(&self) -> &str {
        self.base_model.as_ref().and_then(OneOrMany::first).unwrap_or("")
    }

    /// First license, or `""` when none is declared.
    pub fn license(&self) -> &str {
        self.license.as_ref().and_then(OneOrMany::first).unwrap_or("")
    }
}

/// A card field that may hold one string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    Single(String),
    Multiple(Vec<String>),
}

impl OneOrMany {
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s.as_str()),
            Self::Multiple(v) => v.first().map(String::as_str),
        }
    }
}

/// GGUF summary the API attaches to GGUF repositories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GgufInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub architecture: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub context_length: u64,
}
