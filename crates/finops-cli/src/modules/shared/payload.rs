use std::fs;

use anyhow::Context;
use serde_json::Value;

/// Parses a `--data` argument: inline JSON, or `@path` naming a JSON file.
/// Only objects are accepted.
pub(crate) fn parse_payload(raw: &str) -> anyhow::Result<Value> {
    let contents = match raw.strip_prefix('@') {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
        }
        None => raw.to_string(),
    };
    let value: Value = serde_json::from_str(&contents).context("--data is not valid JSON")?;
    if !value.is_object() {
        anyhow::bail!("--data must be a JSON object");
    }
    Ok(value)
}
