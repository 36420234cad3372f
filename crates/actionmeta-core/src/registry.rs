use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ---------------------------------------------------------------------------
// ResourceId
// ---------------------------------------------------------------------------

/// A platform display-resource identifier. `0` is reserved: it means
/// "no resource" and is never a valid registered id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub u32);

impl ResourceId {
    /// The "no resource" sentinel.
    pub const NONE: ResourceId = ResourceId(0);

    pub fn is_none(self) -> bool {
        self == ResourceId::NONE
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ResourceCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Drawable,
    Mipmap,
    Raw,
    Layout,
}

impl ResourceCategory {
    pub fn all() -> &'static [ResourceCategory] {
        &[
            ResourceCategory::Drawable,
            ResourceCategory::Mipmap,
            ResourceCategory::Raw,
            ResourceCategory::Layout,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceCategory::Drawable => "drawable",
            ResourceCategory::Mipmap => "mipmap",
            ResourceCategory::Raw => "raw",
            ResourceCategory::Layout => "layout",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResourceCategory {
    type Err = crate::error::ActionMetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drawable" => Ok(ResourceCategory::Drawable),
            "mipmap" => Ok(ResourceCategory::Mipmap),
            "raw" => Ok(ResourceCategory::Raw),
            "layout" => Ok(ResourceCategory::Layout),
            _ => Err(crate::error::ActionMetaError::InvalidCategory(
                s.to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// ResourceRegistry
// ---------------------------------------------------------------------------

/// The injected lookup capability. Implementations are read-only and total:
/// a miss is `ResourceId::NONE`, never an error.
///
/// Lookup is exact on `name` and `namespace` — callers normalize names
/// before querying.
pub trait ResourceRegistry {
    fn lookup(&self, name: &str, category: ResourceCategory, namespace: &str) -> ResourceId;
}

// ---------------------------------------------------------------------------
// ResourceTable
// ---------------------------------------------------------------------------

/// In-memory registry keyed by `(namespace, category, name)`. Backs the CLI
/// and tests; platform registries plug in behind the trait instead.
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    entries: HashMap<(String, ResourceCategory, String), ResourceId>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource. Returns the previously registered id when
    /// overwriting an existing entry.
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        category: ResourceCategory,
        name: impl Into<String>,
        id: ResourceId,
    ) -> Option<ResourceId> {
        self.entries
            .insert((namespace.into(), category, name.into()), id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceRegistry for ResourceTable {
    fn lookup(&self, name: &str, category: ResourceCategory, namespace: &str) -> ResourceId {
        self.entries
            .get(&(namespace.to_string(), category, name.to_string()))
            .copied()
            .unwrap_or(ResourceId::NONE)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
