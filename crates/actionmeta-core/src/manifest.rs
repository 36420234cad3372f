use crate::error::{ActionMetaError, Result};
use crate::io::atomic_write;
use crate::registry::{ResourceCategory, ResourceId, ResourceTable};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

// ---------------------------------------------------------------------------
// ManifestWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ResourceManifest
// ---------------------------------------------------------------------------

/// On-disk registry contents: resource name → id per category, under one
/// namespace. The bundled-asset analog that feeds a `ResourceTable`.
///
/// ```yaml
/// version: 1
/// namespace: com.example.app
/// resources:
///   drawable:
///     call: 42
///     reminder: 43
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceManifest {
    #[serde(default = "default_version")]
    pub version: u32,
    pub namespace: String,
    /// Category name → (resource name → id). Keys stay strings at the serde
    /// layer so an unknown category is reported through `FromStr` with the
    /// offending name rather than a serde path.
    #[serde(default)]
    pub resources: BTreeMap<String, BTreeMap<String, u32>>,
}

fn default_version() -> u32 {
    1
}

impl ResourceManifest {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            version: 1,
            namespace: namespace.into(),
            resources: BTreeMap::new(),
        }
    }

    /// Starter manifest written by `actionmeta init`.
    pub fn example(namespace: impl Into<String>) -> Self {
        let mut manifest = Self::new(namespace);
        let drawable = manifest
            .resources
            .entry(ResourceCategory::Drawable.as_str().to_string())
            .or_default();
        drawable.insert("call".to_string(), 1);
        drawable.insert("reminder".to_string(), 2);
        manifest
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ActionMetaError::ManifestNotFound(
                path.display().to_string(),
            ));
        }
        let data = std::fs::read_to_string(path)?;
        let manifest: ResourceManifest = serde_yaml::from_str(&data)?;
        for category in manifest.resources.keys() {
            category.parse::<ResourceCategory>()?;
        }
        Ok(manifest)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        atomic_write(path, data.as_bytes())
    }

    /// Materialize the lookup table. Fails on a category name `load` did not
    /// vet (a manifest built in memory).
    pub fn build_table(&self) -> Result<ResourceTable> {
        let mut table = ResourceTable::new();
        for (category, entries) in &self.resources {
            let category: ResourceCategory = category.parse()?;
            for (name, id) in entries {
                table.insert(&self.namespace, category, name, ResourceId(*id));
            }
        }
        Ok(table)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Non-fatal lint over the manifest contents.
    pub fn validate(&self) -> Vec<ManifestWarning> {
        let mut warnings = Vec::new();

        if self.namespace.is_empty() {
            warnings.push(ManifestWarning {
                level: WarnLevel::Error,
                message: "namespace is empty — no lookup can match".to_string(),
            });
        }

        for (category, entries) in &self.resources {
            // id 0 is the reserved "no resource" sentinel
            for (name, id) in entries {
                if *id == 0 {
                    warnings.push(ManifestWarning {
                        level: WarnLevel::Error,
                        message: format!(
                            "resource '{}' in {} has id 0 (reserved for 'not found')",
                            name, category
                        ),
                    });
                }

                // The resolver lower-cases before querying, so a name with
                // uppercase letters can never be reached.
                if name.chars().any(|c| c.is_uppercase()) {
                    warnings.push(ManifestWarning {
                        level: WarnLevel::Warning,
                        message: format!(
                            "resource '{}' in {} is not lower-case and is unreachable by type resolution",
                            name, category
                        ),
                    });
                }
            }

            let mut seen: HashMap<u32, &str> = HashMap::new();
            for (name, id) in entries {
                if let Some(first) = seen.get(id) {
                    warnings.push(ManifestWarning {
                        level: WarnLevel::Warning,
                        message: format!(
                            "id {} in {} is registered under both '{}' and '{}'",
                            id, category, first, name
                        ),
                    });
                } else {
                    seen.insert(*id, name);
                }
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ResourceRegistry;
    use tempfile::TempDir;

    #[test]
    fn example_roundtrip() {
        let manifest = ResourceManifest::example("com.example.app");
        let yaml = serde_yaml::to_string(&manifest).unwrap();
        let parsed: ResourceManifest = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.namespace, "com.example.app");
        assert_eq!(parsed.version, 1);
        assert_eq!(parsed.resources["drawable"]["call"], 1);
    }

    #[test]
    fn save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resources.yaml");
        let manifest = ResourceManifest::example("com.example.app");
        manifest.save(&path).unwrap();

        let loaded = ResourceManifest::load(&path).unwrap();
        assert_eq!(loaded.namespace, "com.example.app");
        assert_eq!(loaded.resources["drawable"]["reminder"], 2);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = ResourceManifest::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ActionMetaError::ManifestNotFound(_)));
    }

    #[test]
    fn load_unknown_category_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resources.yaml");
        let yaml = "namespace: com.example.app\nresources:\n  sticker:\n    call: 1\n";
        std::fs::write(&path, yaml).unwrap();

        let err = ResourceManifest::load(&path).unwrap_err();
        assert!(matches!(err, ActionMetaError::InvalidCategory(ref c) if c == "sticker"));
    }

    #[test]
    fn load_without_resources_backward_compat() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resources.yaml");
        std::fs::write(&path, "namespace: com.example.app\n").unwrap();

        let manifest = ResourceManifest::load(&path).unwrap();
        assert_eq!(manifest.version, 1);
        assert!(manifest.resources.is_empty());
        assert!(manifest.build_table().unwrap().is_empty());
    }

    #[test]
    fn build_table_registers_all_categories() {
        let yaml = r#"
namespace: com.example.app
resources:
  drawable:
    call: 42
  mipmap:
    launcher: 100
"#;
        let manifest: ResourceManifest = serde_yaml::from_str(yaml).unwrap();
        let table = manifest.build_table().unwrap();
        assert_eq!(
            table.lookup("call", ResourceCategory::Drawable, "com.example.app"),
            ResourceId(42)
        );
        assert_eq!(
            table.lookup("launcher", ResourceCategory::Mipmap, "com.example.app"),
            ResourceId(100)
        );
        assert!(table
            .lookup("launcher", ResourceCategory::Drawable, "com.example.app")
            .is_none());
    }

    #[test]
    fn build_table_unknown_category_fails() {
        let mut manifest = ResourceManifest::new("com.example.app");
        manifest
            .resources
            .entry("sticker".to_string())
            .or_default()
            .insert("call".to_string(), 1);
        assert!(manifest.build_table().is_err());
    }

    #[test]
    fn validate_clean_manifest_no_warnings() {
        let manifest = ResourceManifest::example("com.example.app");
        assert!(manifest.validate().is_empty());
    }

    #[test]
    fn validate_zero_id() {
        let mut manifest = ResourceManifest::new("com.example.app");
        manifest
            .resources
            .entry("drawable".to_string())
            .or_default()
            .insert("call".to_string(), 0);
        let warnings = manifest.validate();
        assert!(warnings
            .iter()
            .any(|w| w.level == WarnLevel::Error && w.message.contains("id 0")));
    }

    #[test]
    fn validate_duplicate_id() {
        let mut manifest = ResourceManifest::new("com.example.app");
        let drawable = manifest.resources.entry("drawable".to_string()).or_default();
        drawable.insert("call".to_string(), 7);
        drawable.insert("reminder".to_string(), 7);
        let warnings = manifest.validate();
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("id 7") && w.message.contains("'call'")));
    }

    #[test]
    fn validate_uppercase_name() {
        let mut manifest = ResourceManifest::new("com.example.app");
        manifest
            .resources
            .entry("drawable".to_string())
            .or_default()
            .insert("Call".to_string(), 3);
        let warnings = manifest.validate();
        assert!(warnings.iter().any(|w| w.message.contains("unreachable")));
    }

    #[test]
    fn validate_empty_namespace() {
        let manifest = ResourceManifest::new("");
        let warnings = manifest.validate();
        assert!(warnings
            .iter()
            .any(|w| w.level == WarnLevel::Error && w.message.contains("namespace")));
    }

    #[test]
    fn duplicate_ids_across_categories_are_fine() {
        // Category tables are independent id spaces.
        let yaml = r#"
namespace: com.example.app
resources:
  drawable:
    call: 7
  mipmap:
    launcher: 7
"#;
        let manifest: ResourceManifest = serde_yaml::from_str(yaml).unwrap();
        assert!(manifest.validate().is_empty());
    }
}
