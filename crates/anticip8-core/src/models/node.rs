use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{FIELD_SEPARATOR, NODE_SEPARATOR};

/// A navigable endpoint: a service name and a normalized path.
///
/// Ordering is by service, then path. The ranking stage relies on it to break
/// score ties deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId {
    pub service: String,
    pub path: String,
}

impl NodeId {
    pub fn new(service: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            path: path.into(),
        }
    }

    /// Counter-store hash field form: `service|path`.
    pub fn to_field(&self) -> String {
        format!("{}{FIELD_SEPARATOR}{}", self.service, self.path)
    }

    /// Parse a `service|path` hash field. Splits on the first separator.
    pub fn from_field(field: &str) -> Option<Self> {
        field
            .split_once(FIELD_SEPARATOR)
            .map(|(service, path)| Self::new(service, path))
    }

    /// Embedding artifact form: `service::path`.
    pub fn to_node_key(&self) -> String {
        format!("{}{NODE_SEPARATOR}{}", self.service, self.path)
    }

    /// Parse a `service::path` artifact node. Splits on the first separator.
    pub fn from_node_key(value: &str) -> Option<Self> {
        value
            .split_once(NODE_SEPARATOR)
            .map(|(service, path)| Self::new(service, path))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{NODE_SEPARATOR}{}", self.service, self.path)
    }
}
