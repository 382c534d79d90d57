//! Front-matter configuration tree
//!
//! A restricted YAML dialect: indented `key: value` lines forming nested
//! mappings. Sequences, flow collections, anchors and multi-line scalars are
//! not supported; lines that do not look like `key: value` are skipped.

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered mapping of keys to nodes
pub type Mapping = IndexMap<String, ConfigNode>;

/// A node in the parsed configuration tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigNode {
    Text(String),
    Bool(bool),
    Null,
    Mapping(Mapping),
}

impl ConfigNode {
    /// An empty mapping, the shape of every parsed root
    pub fn empty() -> Self {
        ConfigNode::Mapping(Mapping::new())
    }

    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.as_mapping().and_then(|m| m.get(key))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            ConfigNode::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigNode::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigNode::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, ConfigNode::Mapping(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConfigNode::Null)
    }

    /// Serialize back into the indented `key: value` syntax.
    ///
    /// Text is always double-quoted, so re-parsing the output of a parsed
    /// tree yields the same tree. A scalar root renders as its literal.
    pub fn to_text(&self) -> String {
        match self {
            ConfigNode::Mapping(m) => {
                let mut out = String::new();
                write_mapping(m, 0, &mut out);
                out
            }
            scalar => scalar_literal(scalar),
        }
    }
}

impl Default for ConfigNode {
    fn default() -> Self {
        Self::empty()
    }
}

/// Parse front-matter text with the default tab width
pub fn parse(text: &str) -> ConfigNode {
    TreeParser::default().parse(text)
}

/// Indentation-driven parser for the front-matter dialect
#[derive(Debug, Clone, Copy)]
pub struct TreeParser {
    tab_width: usize,
}

impl Default for TreeParser {
    fn default() -> Self {
        Self { tab_width: 2 }
    }
}

/// A mapping still being filled in, waiting to be attached to its parent
struct Frame {
    indent: usize,
    key: String,
    map: Mapping,
    /// Set when the key was first declared as a scalar; the block and all
    /// of its children are dropped on close
    discard: bool,
}

impl TreeParser {
    pub fn new(tab_width: usize) -> Self {
        Self { tab_width }
    }

    /// Parse text into a mapping root. Never fails.
    pub fn parse(&self, text: &str) -> ConfigNode {
        // The root mapping is the sentinel frame below every indentation
        let mut root = Mapping::new();
        let mut stack: Vec<Frame> = Vec::new();

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some((key, value)) = split_key_value(trimmed) else {
                continue;
            };
            let indent = self.indent_width(line);

            while stack.last().is_some_and(|f| f.indent >= indent) {
                close_frame(&mut root, &mut stack);
            }

            let existing = current(&mut root, &mut stack)
                .get(&key)
                .map(ConfigNode::is_mapping);

            if value.is_empty() {
                stack.push(Frame {
                    indent,
                    key,
                    map: Mapping::new(),
                    discard: existing == Some(false),
                });
            } else if existing != Some(true) {
                current(&mut root, &mut stack).insert(key, coerce_scalar(value));
            }
        }

        while !stack.is_empty() {
            close_frame(&mut root, &mut stack);
        }

        ConfigNode::Mapping(root)
    }

    /// Width of the leading whitespace, tabs counted as `tab_width` spaces
    fn indent_width(&self, line: &str) -> usize {
        let mut width = 0;
        for c in line.chars() {
            match c {
                ' ' => width += 1,
                '\t' => width += self.tab_width,
                _ => break,
            }
        }
        width
    }
}

fn current<'a>(root: &'a mut Mapping, stack: &'a mut [Frame]) -> &'a mut Mapping {
    match stack.last_mut() {
        Some(frame) => &mut frame.map,
        None => root,
    }
}

fn close_frame(root: &mut Mapping, stack: &mut Vec<Frame>) {
    if let Some(frame) = stack.pop() {
        if !frame.discard {
            current(root, stack).insert(frame.key, ConfigNode::Mapping(frame.map));
        }
    }
}

/// Split a trimmed line at its first unescaped colon.
///
/// `\:` and `\\` are the only escapes recognised in keys.
fn split_key_value(line: &str) -> Option<(String, &str)> {
    if line == "-" || line.starts_with("- ") {
        return None;
    }

    let mut key = String::new();
    let mut chars = line.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&(_, next)) if next == ':' || next == '\\' => {
                    key.push(next);
                    chars.next();
                }
                _ => key.push('\\'),
            },
            ':' => {
                let key = key.trim();
                if key.is_empty() {
                    return None;
                }
                return Some((key.to_string(), line[i + 1..].trim()));
            }
            _ => key.push(c),
        }
    }

    None
}

fn coerce_scalar(value: &str) -> ConfigNode {
    match strip_quotes(value) {
        "true" => ConfigNode::Bool(true),
        "false" => ConfigNode::Bool(false),
        "null" | "~" => ConfigNode::Null,
        other => ConfigNode::Text(other.to_string()),
    }
}

/// Remove one layer of matching surrounding quotes
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn write_mapping(map: &Mapping, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for (key, node) in map {
        let key = escape_key(key);
        match node {
            ConfigNode::Mapping(child) => {
                out.push_str(&format!("{}{}:\n", indent, key));
                write_mapping(child, depth + 1, out);
            }
            scalar => {
                out.push_str(&format!("{}{}: {}\n", indent, key, scalar_literal(scalar)));
            }
        }
    }
}

fn escape_key(key: &str) -> String {
    key.replace('\\', "\\\\").replace(':', "\\:")
}

fn scalar_literal(node: &ConfigNode) -> String {
    match node {
        ConfigNode::Text(s) => format!("\"{}\"", s),
        ConfigNode::Bool(b) => b.to_string(),
        ConfigNode::Null => "null".to_string(),
        ConfigNode::Mapping(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> ConfigNode {
        ConfigNode::Text(s.to_string())
    }

    #[test]
    fn test_parse_nested() {
        let tree = parse("artist:\n  name: \"Test\"\n  tagline: Loud music\n");
        let artist = tree.get("artist").unwrap();
        assert_eq!(artist.get("name"), Some(&text("Test")));
        assert_eq!(artist.get("tagline"), Some(&text("Loud music")));
    }

    #[test]
    fn test_dedent_closes_nested_mapping() {
        let tree = parse("a:\n  b: 1\nc: 2");
        assert_eq!(tree.get("c"), Some(&text("2")));
        assert_eq!(tree.get("a").unwrap().get("b"), Some(&text("1")));
        assert_eq!(tree.get("a").unwrap().get("c"), None);
    }

    #[test]
    fn test_dedent_closes_several_levels() {
        let tree = parse("a:\n  b:\n    c: deep\n  d: mid\ne: top\n");
        let a = tree.get("a").unwrap();
        assert_eq!(a.get("b").unwrap().get("c"), Some(&text("deep")));
        assert_eq!(a.get("d"), Some(&text("mid")));
        assert_eq!(tree.get("e"), Some(&text("top")));
    }

    #[test]
    fn test_last_write_wins() {
        let tree = parse("name: first\nname: second\n");
        assert_eq!(tree.get("name"), Some(&text("second")));
        assert_eq!(tree.as_mapping().unwrap().len(), 1);
    }

    #[test]
    fn test_redeclared_block_replaces() {
        let tree = parse("a:\n  x: 1\na:\n  y: 2\n");
        let a = tree.get("a").unwrap();
        assert_eq!(a.get("x"), None);
        assert_eq!(a.get("y"), Some(&text("2")));
    }

    #[test]
    fn test_shape_fixed_by_first_occurrence() {
        let tree = parse("a: scalar\na:\n  child: 1\nb:\n  c: 2\nb: flat\n");
        assert_eq!(tree.get("a"), Some(&text("scalar")));
        assert_eq!(tree.get("child"), None);
        assert_eq!(tree.get("b").unwrap().get("c"), Some(&text("2")));
    }

    #[test]
    fn test_scalar_coercion() {
        let tree = parse("t: true\nf: false\nn: null\ntilde: ~\nq: \"true\"\ns: 'single'\nnum: 42\n");
        assert_eq!(tree.get("t"), Some(&ConfigNode::Bool(true)));
        assert_eq!(tree.get("f"), Some(&ConfigNode::Bool(false)));
        assert_eq!(tree.get("n"), Some(&ConfigNode::Null));
        assert_eq!(tree.get("tilde"), Some(&ConfigNode::Null));
        assert_eq!(tree.get("q"), Some(&ConfigNode::Bool(true)));
        assert_eq!(tree.get("s"), Some(&text("single")));
        assert_eq!(tree.get("num"), Some(&text("42")));
    }

    #[test]
    fn test_only_one_quote_layer_stripped() {
        let tree = parse("a: \"'x'\"\nb: \"\"\nc: \"\n");
        assert_eq!(tree.get("a"), Some(&text("'x'")));
        assert_eq!(tree.get("b"), Some(&text("")));
        assert_eq!(tree.get("c"), Some(&text("\"")));
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let tree = parse("url: https://example.com/a:b\n");
        assert_eq!(tree.get("url"), Some(&text("https://example.com/a:b")));
    }

    #[test]
    fn test_escaped_colon_in_key() {
        let tree = parse("a\\:b: value\n");
        assert_eq!(tree.get("a:b"), Some(&text("value")));
    }

    #[test]
    fn test_comments_blank_and_malformed_lines_skipped() {
        let tree = parse("# comment\n\njust some words\n: no key\n- item\nkey: v\n  # indented comment\n");
        let map = tree.as_mapping().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(tree.get("key"), Some(&text("v")));
    }

    #[test]
    fn test_tabs_count_as_indentation() {
        let tree = TreeParser::new(2).parse("a:\n\tb: 1\n  c: 2\n");
        let a = tree.get("a").unwrap();
        assert_eq!(a.get("b"), Some(&text("1")));
        assert_eq!(a.get("c"), Some(&text("2")));
    }

    #[test]
    fn test_empty_block_is_empty_mapping() {
        let tree = parse("social:\nbooking: x\n");
        assert_eq!(tree.get("social"), Some(&ConfigNode::empty()));
        assert_eq!(tree.get("booking"), Some(&text("x")));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let tree = parse("z: 1\na: 2\nm: 3\n");
        let keys: Vec<_> = tree.as_mapping().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_empty_input_gives_empty_root() {
        assert_eq!(parse(""), ConfigNode::empty());
    }

    #[test]
    fn test_reserialize_round_trip() {
        let source = r#"
artist:
  name: "Test Artist"
  tagline: It's *loud*
seo:
  canonical: https://example.com/
social:
  spotify: ~
  hidden: false
booking:
    email: booking@example.com
weird\:key: "quoted: value"
empty:
"#;
        let tree = parse(source);
        let again = parse(&tree.to_text());
        assert_eq!(tree, again);
    }

    #[test]
    fn test_serialize_to_json() {
        let tree = parse("artist:\n  name: Test\n  live: true\n  label: null\n");
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, r#"{"artist":{"name":"Test","live":true,"label":null}}"#);
    }
}
