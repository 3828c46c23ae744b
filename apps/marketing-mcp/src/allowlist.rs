//! Tool allowlist from `--allow` and `--config`.

use std::collections::HashSet;
use std::fs;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    allowlist: Option<HashSet<String>>,
}

/// Parses `a, b,,c` into a set; an empty result counts as no list.
pub fn parse_allow(s: &str) -> Option<HashSet<String>> {
    let set: HashSet<String> = s
        .split(',')
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();
    (!set.is_empty()).then_some(set)
}

fn parse_file_config(s: &str) -> Option<HashSet<String>> {
    match serde_json::from_str::<FileConfig>(s) {
        Ok(fc) => fc.allowlist,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse config JSON; ignoring");
            None
        }
    }
}

/// Resolves the allowlist; `--allow` wins over the config file.
pub fn resolve(allow: Option<&str>, config: Option<&str>) -> Option<HashSet<String>> {
    if let Some(set) = allow.and_then(parse_allow) {
        return Some(set);
    }
    let path = config?;
    match fs::read_to_string(path) {
        Ok(s) => parse_file_config(&s),
        Err(e) => {
            tracing::warn!(path, error = %e, "failed to read config file; ignoring");
            None
        }
    }
}
