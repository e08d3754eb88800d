use hf_catalog::{Sibling, extract_quants, extract_quants_from_siblings};

fn quants(files: &[&str]) -> Vec<String> {
    extract_quants(files.iter().copied())
}

#[test]
fn test_listing_properties() {
    let cases: &[(&[&str], &[&str])] = &[
        (&["BF16/model-Q4_K_M-00001-of-00005.gguf"], &["BF16"]),
        (&["model-Q4_K_M.gguf"], &["Q4_K_M"]),
        (&["model-Q4_K_M-00001-of-00005.gguf"], &["Q4_K_M"]),
        (&["model.F16.gguf"], &["F16"]),
        (&["model.BF16.gguf"], &["BF16"]),
        (&["model-UD-TQ1_0.gguf"], &["UD-TQ1_0"]),
        (
            &["readme.md", "model-Q4_K_M.gguf", "model-Q8_0.gguf"],
            &["Q4_K_M", "Q8_0"],
        ),
    ];
    for (files, expected) in cases {
        assert_eq!(quants(files), *expected, "files: {files:?}");
    }
}

/// A realistic split-archive repository: every shard shares one label.
#[test]
fn test_sharded_repository() {
    let mut files = vec![".gitattributes".to_string(), "README.md".to_string()];
    for quant in ["Q2_K", "Q4_K_M", "IQ4_XS"] {
        for part in 1..=3 {
            files.push(format!("{quant}/DeepSeek-R1-{quant}-0000{part}-of-00003.gguf"));
        }
    }
    files.push("DeepSeek-R1-Q8_0-00001-of-00002.gguf".into());
    files.push("DeepSeek-R1-Q8_0-00002-of-00002.gguf".into());
    files.push("mmproj-F16.gguf".into());

    assert_eq!(
        extract_quants(&files),
        vec!["Q2_K", "Q4_K_M", "IQ4_XS", "Q8_0", "F16"]
    );
}

#[test]
fn test_no_duplicates_and_upper_case() {
    let files = [
        "a-q4_k_m.gguf",
        "b-Q4_K_M.gguf",
        "c.q8_0.gguf",
        "d-iq3_xxs.gguf",
        "e-Q8_0-00001-of-00002.gguf",
        "f_bf16.gguf",
    ];
    let result = quants(&files);
    assert_eq!(result, vec!["Q4_K_M", "Q8_0", "IQ3_XXS", "BF16"]);
    assert!(result.iter().all(|q| *q == q.to_uppercase()));
}

#[test]
fn test_non_gguf_contributes_nothing() {
    let files = [
        "model-Q4_K_M.safetensors",
        "Q4_K_M/model.bin",
        "model-F16.gguf.lock",
        "config.json",
    ];
    assert!(quants(&files).is_empty());
}

#[test]
fn test_idempotent() {
    let siblings: Vec<Sibling> = [
        "Q4_K_M/model-Q4_K_M-00001-of-00002.gguf",
        "model-IQ4_NL.gguf",
        "model.F32.gguf",
        "notes.txt",
    ]
    .into_iter()
    .map(Sibling::new)
    .collect();

    let first = extract_quants_from_siblings(&siblings);
    let second = extract_quants_from_siblings(&siblings);
    assert_eq!(first, second);
    assert_eq!(first, vec!["Q4_K_M", "IQ4_NL", "F32"]);
}
