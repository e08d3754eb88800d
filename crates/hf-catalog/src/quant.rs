//! Quantization labels from GGUF filenames.
//!
//! Repositories publish quantized weights under three naming conventions:
//!
//! ```text
//! model-Q4_K_M.gguf                    # plain suffix
//! model-Q4_K_M-00001-of-00005.gguf     # split archive
//! BF16/model-BF16-00001-of-00005.gguf  # quant-named directory
//! ```
//!
//! A quant-named directory is checked first. Otherwise the filename is
//! tried against [`FILENAME_PATTERNS`] in order and the first match wins.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::types::Sibling;

/// File extension gating which files are considered at all.
pub const GGUF_EXTENSION: &str = ".gguf";

/// Prefixes that make a directory name look like a quantization.
const QUANT_PREFIXES: &[&str] = &["Q", "IQ", "F16", "F32", "BF16", "TQ"];

/// Filename shapes, most specific family first. Split-file variants follow
/// their plain counterparts.
const FILENAME_PATTERNS: &[&str] = &[
    // model-Q4_K_M.gguf, model.Q8_0.gguf
    r"(?i)[._-](Q[0-9]+_[A-Z0-9_]+)\.gguf",
    r"(?i)[._-](IQ[0-9]+_[A-Z0-9_]+)\.gguf",
    r"(?i)[._-](F16|F32|BF16)\.gguf",
    // model-UD-TQ1_0.gguf
    r"(?i)[._-]((?:UD-)?TQ[0-9]+_[0-9]+)\.gguf",
    // model-Q4_K_M-00001-of-00005.gguf
    r"(?i)[._-](Q[0-9]+_[A-Z0-9_]+)-[0-9]+-of-[0-9]+\.gguf",
    r"(?i)[._-](IQ[0-9]+_[A-Z0-9_]+)-[0-9]+-of-[0-9]+\.gguf",
    r"(?i)[._-](F16|F32|BF16)-[0-9]+-of-[0-9]+\.gguf",
];

static FILENAME_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FILENAME_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("Invalid quant filename regex"))
        .collect()
});

/// Leading directory segment, e.g. `BF16` in `BF16/model.gguf`.
static DIR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+)/").expect("Invalid quant directory regex"));

/// Whether `s` looks like a quantization name (case-insensitive prefix test).
pub fn is_quant_name(s: &str) -> bool {
    let upper = s.to_uppercase();
    QUANT_PREFIXES.iter().any(|p| upper.starts_with(p))
}

/// Recover the quantization label of a single GGUF filename.
///
/// Returns `None` for non-GGUF files and for files with no recognizable
/// marker. A quant-named directory is returned with its own casing;
/// labels taken from the filename are upper-cased.
///
/// The directory check only looks at the prefix, so a model-family
/// directory such as `Qwen3/model.gguf` yields `"Qwen3"`.
pub fn quant_from_filename(filename: &str) -> Option<String> {
    if !filename.to_lowercase().ends_with(GGUF_EXTENSION) {
        return None;
    }

    if let Some(dir) = DIR_REGEX
        .captures(filename)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        && is_quant_name(dir)
    {
        return Some(dir.to_string());
    }

    FILENAME_REGEXES.iter().find_map(|re| {
        re.captures(filename)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_uppercase())
    })
}

/// Distinct quantization labels across `filenames`, in first-seen order.
pub fn extract_quants<I, S>(filenames: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut quants = Vec::new();
    let mut scanned = 0usize;

    for name in filenames {
        scanned += 1;
        if let Some(quant) = quant_from_filename(name.as_ref())
            && seen.insert(quant.clone())
        {
            quants.push(quant);
        }
    }

    debug!(files = scanned, quants = ?quants, "quant extraction complete");
    quants
}

/// [`extract_quants`] over a repository's file listing.
pub fn extract_quants_from_siblings(siblings: &[Sibling]) -> Vec<String> {
    extract_quants(siblings.iter().map(|s| s.rfilename.as_str()))
}
