//! Client for the Hugging Face model catalog API.
//!
//! Lists models by filter/sort criteria, fetches per-model detail records
//! and recovers the set of GGUF quantization variants present in a
//! repository's file listing.
//!
//! * **quant**: pure filename classifier (`Q4_K_M`, `IQ4_NL`, `BF16`, ...).
//! * **client**: thin async wrapper over the `/api/models` endpoints.
//! * **format**: table / JSON rendering for CLI output.

pub mod client;
pub mod error;
pub mod format;
pub mod quant;
pub mod types;

pub use client::{
    CatalogClient, CatalogService, DEFAULT_API_URL, available_quants, list_models_formatted,
};
pub use error::{CatalogError, Result};
pub use format::{OutputFormat, format_details, format_json, format_quants, format_table};
pub use quant::{
    GGUF_EXTENSION, extract_quants, extract_quants_from_siblings, is_quant_name, quant_from_filename,
};
pub use types::{CardData, GgufInfo, ListModelsOptions, Model, ModelDetails, OneOrMany, Sibling};
