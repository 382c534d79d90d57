//! Front-matter splitting

use super::tree::{ConfigNode, TreeParser};

const DELIMITER: &str = "---";

/// A document split into its front-matter text and body text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    pub front_matter: String,
    pub body: String,
}

impl ParsedDocument {
    /// Split a raw document at its `---` delimiter lines.
    ///
    /// Front matter exists only when the very first line is `---` and a
    /// second `---` line follows. Otherwise the whole input is body; this
    /// never fails.
    pub fn split(document: &str) -> Self {
        let mut lines = document.split_inclusive('\n');

        let Some(first) = lines.next() else {
            return Self::body_only(document);
        };
        if !is_delimiter(first) {
            return Self::body_only(document);
        }

        let mut offset = first.len();
        for line in lines {
            if is_delimiter(line) {
                let front_matter = &document[first.len()..offset];
                let body = &document[offset + line.len()..];
                return Self {
                    front_matter: front_matter.to_string(),
                    body: body.to_string(),
                };
            }
            offset += line.len();
        }

        Self::body_only(document)
    }

    fn body_only(document: &str) -> Self {
        Self {
            front_matter: String::new(),
            body: document.to_string(),
        }
    }

    pub fn has_front_matter(&self) -> bool {
        !self.front_matter.trim().is_empty()
    }

    /// Parse the front-matter region into a configuration tree
    pub fn config(&self, parser: &TreeParser) -> ConfigNode {
        parser.parse(&self.front_matter)
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == DELIMITER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_front_matter() {
        let doc = "---\nartist:\n  name: \"Test\"\n---\nHello **world**";
        let parsed = ParsedDocument::split(doc);
        assert_eq!(parsed.front_matter, "artist:\n  name: \"Test\"\n");
        assert_eq!(parsed.body, "Hello **world**");
        assert!(parsed.has_front_matter());
    }

    #[test]
    fn test_no_delimiters_is_all_body() {
        let doc = "Just a bio.\n\n- with a list";
        let parsed = ParsedDocument::split(doc);
        assert_eq!(parsed.front_matter, "");
        assert_eq!(parsed.body, doc);
        assert!(!parsed.has_front_matter());
    }

    #[test]
    fn test_unclosed_front_matter_is_all_body() {
        let doc = "---\nartist:\n  name: Test\nno closing line";
        let parsed = ParsedDocument::split(doc);
        assert_eq!(parsed.front_matter, "");
        assert_eq!(parsed.body, doc);
    }

    #[test]
    fn test_delimiter_not_on_first_line() {
        let doc = "\n---\ntitle: x\n---\nbody";
        let parsed = ParsedDocument::split(doc);
        assert_eq!(parsed.front_matter, "");
        assert_eq!(parsed.body, doc);
    }

    #[test]
    fn test_delimiter_must_be_exact() {
        let doc = "---\ntitle: x\n----\nbody\n--- \nmore";
        let parsed = ParsedDocument::split(doc);
        assert_eq!(parsed.front_matter, "");
        assert_eq!(parsed.body, doc);
    }

    #[test]
    fn test_crlf_delimiters() {
        let doc = "---\r\ntitle: x\r\n---\r\nbody\r\n";
        let parsed = ParsedDocument::split(doc);
        assert_eq!(parsed.front_matter, "title: x\r\n");
        assert_eq!(parsed.body, "body\r\n");
    }

    #[test]
    fn test_empty_front_matter_and_later_rules() {
        let doc = "---\n---\nintro\n---\nafter rule";
        let parsed = ParsedDocument::split(doc);
        assert_eq!(parsed.front_matter, "");
        assert_eq!(parsed.body, "intro\n---\nafter rule");
    }

    #[test]
    fn test_empty_document() {
        let parsed = ParsedDocument::split("");
        assert_eq!(parsed, ParsedDocument::default());
    }

    #[test]
    fn test_config_from_front_matter() {
        let parsed = ParsedDocument::split("---\nartist:\n  name: Test\n---\n");
        let tree = parsed.config(&TreeParser::default());
        assert_eq!(
            tree.get("artist").and_then(|a| a.get("name")),
            Some(&ConfigNode::Text("Test".to_string()))
        );
        assert_eq!(parsed.body, "");
    }
}
