use crate::output::print_json;
use actionmeta_core::manifest::{ResourceManifest, WarnLevel};
use anyhow::Context;
use std::path::Path;

pub fn run(manifest_path: &Path, json: bool) -> anyhow::Result<()> {
    let manifest = ResourceManifest::load(manifest_path).context("failed to load manifest")?;
    let warnings = manifest.validate();

    if json {
        let value = serde_json::json!({
            "warnings": warnings,
        });
        print_json(&value)?;
    } else if warnings.is_empty() {
        println!("Manifest is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }
    Ok(())
}
