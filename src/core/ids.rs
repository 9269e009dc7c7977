use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub type NodeId = u32;

/// Node identifier as it appears in a graph document: generated documents
/// use either plain integers or their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeKey {
    Int(u64),
    Str(String),
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Int(id) => write!(f, "{id}"),
            NodeKey::Str(id) => write!(f, "\"{id}\""),
        }
    }
}

/// Maps external node keys onto dense `NodeId`s in insertion order.
pub struct NodeRegistry {
    map: HashMap<NodeKey, NodeId>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Registers `key` and returns its id together with whether it was new.
    /// Returns `None` once the id space is exhausted.
    pub fn insert(&mut self, key: NodeKey) -> Option<(NodeId, bool)> {
        if let Some(id) = self.map.get(&key) {
            return Some((*id, false));
        }
        let next = NodeId::try_from(self.map.len()).ok()?;
        self.map.insert(key, next);
        Some((next, true))
    }

    pub fn get(&self, key: &NodeKey) -> Option<NodeId> {
        self.map.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
