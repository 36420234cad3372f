use crate::registry::{ResourceCategory, ResourceId, ResourceRegistry};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Extra
// ---------------------------------------------------------------------------

/// One auxiliary key/value pair attached to an action. Keys are not unique;
/// a record may carry the same key more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extra {
    pub key: String,
    pub value: String,
}

impl Extra {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// ActionRecord
// ---------------------------------------------------------------------------

/// Metadata describing one user-facing action ("call", "reminder", ...):
/// a category label, the concrete action payload, and ordered extras.
///
/// No field carries a format constraint; any of them may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub action_type: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<Extra>,
}

impl ActionRecord {
    pub fn new(action_type: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            action: action.into(),
            extras: Vec::new(),
        }
    }

    /// Append an extra, preserving insertion order.
    pub fn push_extra(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extras.push(Extra::new(key, value));
    }

    /// First-match lookup by key. Duplicate keys stay in the list; iteration
    /// over `extras` sees all of them in insertion order.
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    /// Resolve the drawable resource representing this record's action type.
    ///
    /// The action type is lower-cased before the query, so `"Reminder"` and
    /// `"reminder"` resolve identically. An empty action type resolves to
    /// `ResourceId::NONE` without consulting the registry; a registry miss
    /// is also `ResourceId::NONE`. Never fails.
    pub fn thumbnail_id(&self, registry: &dyn ResourceRegistry, namespace: &str) -> ResourceId {
        if self.action_type.is_empty() {
            return ResourceId::NONE;
        }
        let name = self.action_type.to_lowercase();
        registry.lookup(&name, ResourceCategory::Drawable, namespace)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
