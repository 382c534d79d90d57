//! Dotted-path lookup into the configuration tree

use crate::content::ConfigNode;

/// Result of resolving a dotted path
#[derive(Debug, Clone, PartialEq)]
pub enum FieldLookup<'a> {
    Present(&'a ConfigNode),
    Missing(String),
}

impl<'a> FieldLookup<'a> {
    pub fn is_present(&self) -> bool {
        matches!(self, FieldLookup::Present(_))
    }

    pub fn node(&self) -> Option<&'a ConfigNode> {
        match self {
            FieldLookup::Present(node) => Some(node),
            FieldLookup::Missing(_) => None,
        }
    }
}

/// Walk `tree` one dotted segment at a time.
///
/// Missing when a segment is absent, when an intermediate node is not a
/// mapping, or when the final node is an explicit null.
pub fn lookup<'a>(tree: &'a ConfigNode, path: &str) -> FieldLookup<'a> {
    let mut node = tree;
    for segment in path.split('.') {
        match node.get(segment) {
            Some(child) => node = child,
            None => return FieldLookup::Missing(path.to_string()),
        }
    }

    if node.is_null() {
        FieldLookup::Missing(path.to_string())
    } else {
        FieldLookup::Present(node)
    }
}
