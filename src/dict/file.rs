//! Reading and writing the dictionary file.

use crate::Result;
use anyhow::Context;
use serde_json::{Map, Value};
use std::fs;

/// The whole dictionary file as an order-preserving JSON object.
pub type Document = Map<String, Value>;

/// Read and parse the dictionary at `path`.
pub fn load_dictionary(path: &str) -> Result<Document> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read dictionary file {}", path))?;
    let doc =
        serde_json::from_str(&text).with_context(|| format!("parse dictionary file {}", path))?;
    Ok(doc)
}

/// Serialize `doc` and overwrite `path` with it.
///
/// Two-space indentation, non-ASCII written literally, no trailing newline,
/// members in in-memory order. The write is a direct overwrite; there is no
/// temporary-file-and-rename step.
pub fn save_dictionary(path: &str, doc: &Document) -> Result<()> {
    let text = serde_json::to_string_pretty(doc).context("serialize dictionary")?;
    fs::write(path, text).with_context(|| format!("write dictionary file {}", path))?;
    Ok(())
}
