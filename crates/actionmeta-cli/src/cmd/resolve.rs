use crate::output::print_json;
use actionmeta_core::manifest::ResourceManifest;
use actionmeta_core::record::ActionRecord;
use actionmeta_core::registry::{ResourceCategory, ResourceRegistry};
use anyhow::Context;
use std::path::Path;

pub fn run(
    manifest_path: &Path,
    action_type: &str,
    category: &str,
    json: bool,
) -> anyhow::Result<()> {
    let category: ResourceCategory = category.parse()?;
    let manifest = ResourceManifest::load(manifest_path).context("failed to load manifest")?;
    let table = manifest
        .build_table()
        .context("failed to build lookup table")?;

    // Drawable resolution goes through the record so the action-type
    // normalization stays in one place; other categories query directly.
    let id = if category == ResourceCategory::Drawable {
        ActionRecord::new(action_type, "").thumbnail_id(&table, &manifest.namespace)
    } else {
        table.lookup(&action_type.to_lowercase(), category, &manifest.namespace)
    };

    if id.is_none() {
        tracing::debug!(action_type, %category, "no resource registered");
    }

    if json {
        let value = serde_json::json!({
            "action_type": action_type,
            "namespace": manifest.namespace,
            "category": category,
            "id": id,
            "found": !id.is_none(),
        });
        print_json(&value)?;
    } else if id.is_none() {
        println!("{} -> (none)", action_type);
    } else {
        println!("{} -> {}", action_type, id);
    }
    Ok(())
}
