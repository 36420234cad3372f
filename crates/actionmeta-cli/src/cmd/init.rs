use actionmeta_core::io::write_if_missing;
use actionmeta_core::manifest::ResourceManifest;
use anyhow::Context;
use std::path::Path;

pub fn run(manifest_path: &Path, namespace: &str) -> anyhow::Result<()> {
    let manifest = ResourceManifest::example(namespace);
    let data = serde_yaml::to_string(&manifest).context("failed to serialize manifest")?;
    let written = write_if_missing(manifest_path, data.as_bytes())
        .with_context(|| format!("failed to write {}", manifest_path.display()))?;

    if written {
        tracing::info!(path = %manifest_path.display(), "wrote starter manifest");
        println!("created: {}", manifest_path.display());
    } else {
        println!("exists:  {}", manifest_path.display());
    }
    Ok(())
}
