//! Table and JSON rendering of catalog results.

use std::fmt::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::types::{Model, ModelDetails};

const NO_MODELS: &str = "No models found matching the specified criteria.";
const TABLE_HEADERS: [&str; 7] = [
    "Model ID",
    "Author",
    "Downloads",
    "Likes",
    "Last Modified",
    "Library",
    "Task",
];

/// How command output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(CatalogError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

//  Model listing

/// Render models as a box-drawn table.
pub fn format_table(models: &[Model]) -> String {
    if models.is_empty() {
        return NO_MODELS.to_string();
    }

    let rows: Vec<[String; 7]> = models
        .iter()
        .map(|m| {
            [
                m.id.clone(),
                m.author.clone(),
                format_number(m.downloads),
                format_number(m.likes),
                m.last_modified
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "N/A".into()),
                or_na(&m.library_name),
                or_na(&m.pipeline_tag),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let separator = build_separator(&widths);
    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');
    push_row(&mut out, &TABLE_HEADERS[..], &widths);
    out.push_str(&separator);
    out.push('\n');
    for row in &rows {
        push_row(&mut out, &row[..], &widths);
    }
    out.push_str(&separator);
    out
}

/// Render models as pretty-printed JSON (`[]` when empty).
pub fn format_json(models: &[Model]) -> Result<String> {
    if models.is_empty() {
        return Ok("[]".into());
    }
    serde_json::to_string_pretty(models).map_err(CatalogError::Json)
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    out.push('│');
    for (cell, width) in cells.iter().zip(widths) {
        let _ = write!(out, " {:<width$} │", cell.as_ref());
    }
    out.push('\n');
}

fn build_separator(widths: &[usize]) -> String {
    let inner: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("├{}┤", inner.join("┼"))
}

fn or_na(s: &str) -> String {
    if s.is_empty() { "N/A".into() } else { s.to_string() }
}

/// `1234567` → `"1,234,567"`.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

//  Model details / quantizations

/// Render a detail record with its extracted quantizations.
pub fn format_details(details: &ModelDetails, quants: &[String]) -> String {
    let date = details
        .last_modified
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".into());
    let card = &details.card_data;

    let mut fields = vec![
        ("Model ID", details.id.clone()),
        ("Author", or_na(&details.author)),
        ("Downloads", format_number(details.downloads)),
        ("Likes", format_number(details.likes)),
        ("Last Modified", date),
        ("Library", or_na(&details.library_name)),
        ("Task", or_na(&details.pipeline_tag)),
        ("Base Model", or_na(card.base_model())),
        ("License", or_na(card.license())),
        ("Quantized By", or_na(&card.quantized_by)),
    ];
    if let Some(gguf) = &details.gguf_info {
        fields.push(("Architecture", or_na(&gguf.architecture)));
        fields.push(("Context", format_number(gguf.context_length)));
        fields.push(("Parameters", format_number(gguf.total)));
    }
    let quant_list = if quants.is_empty() {
        "-".to_string()
    } else {
        quants.join(", ")
    };
    fields.push(("Files", details.siblings.len().to_string()));
    fields.push(("Quantizations", quant_list));

    let lines: Vec<String> = fields
        .into_iter()
        .map(|(key, value)| format!("{key:<14} {value}"))
        .collect();
    lines.join("\n")
}

/// Render a quantization list: one label per line, or a JSON array.
pub fn format_quants(quants: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(quants).map_err(CatalogError::Json),
        OutputFormat::Table if quants.is_empty() => Ok("No GGUF quantizations found.".into()),
        OutputFormat::Table => Ok(quants.join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::types::{CardData, OneOrMany, Sibling};

    fn model(id: &str, author: &str, downloads: u64) -> Model {
        Model {
            id: id.into(),
            author: author.into(),
            downloads,
            likes: 7,
            last_modified: None,
            library_name: String::new(),
            pipeline_tag: String::new(),
            private: false,
            gated: false,
            trending_score: 0.0,
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(12345678), "12,345,678");
    }

    #[test]
    fn test_empty_outputs() {
        assert_eq!(format_table(&[]), NO_MODELS);
        assert_eq!(format_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_table_layout() {
        let mut m = model("google/bert-base-uncased", "google", 1234567);
        m.last_modified = Some(Utc.with_ymd_and_hms(2024, 3, 9, 10, 0, 0).unwrap());
        m.library_name = "transformers".into();
        let table = format_table(&[m, model("gpt2", "", 5)]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("├──"));
        assert!(lines[0].ends_with('┤'));
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0], lines[5]);
        assert!(lines[1].starts_with("│ Model ID "));
        assert!(lines[3].contains("│ 1,234,567 │"));
        assert!(lines[3].contains("│ 2024-03-09    │"));
        assert!(lines[4].contains("│ N/A           │"));
        // All rows share one width.
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_json_is_pretty() {
        let json = format_json(&[model("gpt2", "", 5)]).unwrap();
        assert!(json.starts_with("[\n  {"));
        assert!(json.contains("\"lastModified\": null"));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn test_format_quants() {
        let quants = vec!["Q4_K_M".to_string(), "BF16".to_string()];
        assert_eq!(format_quants(&quants, OutputFormat::Table).unwrap(), "Q4_K_M\nBF16");
        assert_eq!(
            format_quants(&quants, OutputFormat::Json).unwrap(),
            "[\n  \"Q4_K_M\",\n  \"BF16\"\n]"
        );
        assert_eq!(
            format_quants(&[], OutputFormat::Table).unwrap(),
            "No GGUF quantizations found."
        );
    }

    #[test]
    fn test_format_details() {
        let details = ModelDetails {
            id: "unsloth/Qwen3-8B-GGUF".into(),
            siblings: vec![Sibling::new("Qwen3-8B-Q4_K_M.gguf")],
            card_data: CardData {
                base_model: Some(OneOrMany::Multiple(vec!["Qwen/Qwen3-8B".into()])),
                ..Default::default()
            },
            ..Default::default()
        };
        let out = format_details(&details, &["Q4_K_M".to_string()]);
        assert!(out.contains("Base Model     Qwen/Qwen3-8B"));
        assert!(out.contains("License        N/A"));
        assert!(out.ends_with("Quantizations  Q4_K_M"));
        assert!(!out.contains("Architecture"));
    }

    #[test]
    fn test_format_details_with_gguf_block() {
        let details = ModelDetails {
            id: "a/b".into(),
            gguf_info: Some(crate::types::GgufInfo {
                total: 8_190_735_360,
                architecture: "qwen3".into(),
                context_length: 40960,
            }),
            ..Default::default()
        };
        let out = format_details(&details, &[]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[10], "Architecture   qwen3");
        assert_eq!(lines[11], "Context        40,960");
        assert_eq!(lines[12], "Parameters     8,190,735,360");
        assert_eq!(lines[13], "Files          0");
        assert_eq!(lines[14], "Quantizations  -");
        assert_eq!(lines.len(), 15);
    }
}
