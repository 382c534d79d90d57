//! Third-party script registry

use indexmap::IndexSet;

use crate::helpers::script_tag;

/// Scripts to load on the page, each at most once, in first-request order
#[derive(Debug, Clone, Default)]
pub struct ScriptRegistry {
    urls: IndexSet<String>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a script. Returns false when it was already registered.
    pub fn register(&mut self, url: &str) -> bool {
        if self.urls.contains(url) {
            return false;
        }
        self.urls.insert(url.to_string())
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// `<script>` tags for every registered script
    pub fn to_html(&self) -> String {
        self.urls
            .iter()
            .map(|url| script_tag(url))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
