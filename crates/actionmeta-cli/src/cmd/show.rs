use crate::output::{print_json, print_table};
use actionmeta_core::manifest::ResourceManifest;
use actionmeta_core::record::ActionRecord;
use anyhow::Context;
use std::path::Path;

pub fn run(manifest_path: &Path, file: &Path, json: bool) -> anyhow::Result<()> {
    let data = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let record: ActionRecord =
        serde_yaml::from_str(&data).context("failed to parse action record")?;
    let manifest = ResourceManifest::load(manifest_path).context("failed to load manifest")?;
    let table = manifest
        .build_table()
        .context("failed to build lookup table")?;
    let thumbnail = record.thumbnail_id(&table, &manifest.namespace);

    if json {
        let value = serde_json::json!({
            "record": record,
            "thumbnail": thumbnail,
            "found": !thumbnail.is_none(),
        });
        print_json(&value)?;
        return Ok(());
    }

    println!("action_type: {}", record.action_type);
    println!("action:      {}", record.action);
    if thumbnail.is_none() {
        println!("thumbnail:   (none)");
    } else {
        println!("thumbnail:   {}", thumbnail);
    }
    if !record.extras.is_empty() {
        println!();
        let rows: Vec<(&str, &str)> = record
            .extras
            .iter()
            .map(|e| (e.key.as_str(), e.value.as_str()))
            .collect();
        print_table("key", "value", &rows);
    }
    Ok(())
}
