//! Resource identity keys.

use kube::ResourceExt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a resource by name and namespace.
///
/// Cluster-scoped resources carry an empty namespace. Equality is
/// structural, so the key can be used directly as a set or map entry.
/// Empty or unusual names are ordinary values, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceKey {
    /// Object name
    pub name: String,

    /// Object namespace (empty for cluster-scoped resources)
    pub namespace: String,
}

impl ResourceKey {
    /// Creates a key from explicit name and namespace strings.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// Extracts the key of a Kubernetes object.
    pub fn from_object<K: ResourceExt>(obj: &K) -> Self {
        Self {
            name: obj.name_any(),
            namespace: obj.namespace().unwrap_or_default(),
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}/{}", self.namespace, self.name)
        }
    }
}
