//! Markdown rendering for the narrative body
//!
//! Only headings, `- ` bullet lists and paragraphs are recognised; every
//! block's text goes through the inline formatter.

use serde::Serialize;

use super::inline;
use crate::config::HeadingPolicy;

/// A block of rendered body markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedBlock {
    Heading { level: u8, html: String },
    Paragraph { html: String },
    /// A run of contiguous list items
    List { items: Vec<ListItem> },
}

/// One `- ` list entry, already inline-formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub html: String,
}

impl RenderedBlock {
    pub fn to_html(&self) -> String {
        match self {
            RenderedBlock::Heading { level, html } => format!("<h{0}>{1}</h{0}>", level, html),
            RenderedBlock::Paragraph { html } => format!("<p>{}</p>", html),
            RenderedBlock::List { items } => {
                let items: String = items
                    .iter()
                    .map(|item| format!("<li>{}</li>", item.html))
                    .collect();
                format!("<ul>{}</ul>", items)
            }
        }
    }
}

/// Ordered blocks of one rendered body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedBody {
    pub blocks: Vec<RenderedBlock>,
}

impl RenderedBody {
    /// Serialize all blocks, one per line
    pub fn to_html(&self) -> String {
        self.blocks
            .iter()
            .map(RenderedBlock::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Body renderer with heading policy and placeholder substitution
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    headings: HeadingPolicy,
    substitution: Option<(String, String)>,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom settings
    pub fn with_options(headings: HeadingPolicy) -> Self {
        Self {
            headings,
            substitution: None,
        }
    }

    /// Replace every occurrence of `token` in the body with `name` before
    /// rendering. An empty token disables substitution.
    pub fn with_substitution(mut self, token: &str, name: &str) -> Self {
        self.substitution = if token.is_empty() {
            None
        } else {
            Some((token.to_string(), name.to_string()))
        };
        self
    }

    /// Render markdown to blocks
    pub fn render(&self, markdown: &str) -> RenderedBody {
        let substituted;
        let markdown = match &self.substitution {
            Some((token, name)) => {
                substituted = markdown.replace(token.as_str(), name);
                substituted.as_str()
            }
            None => markdown,
        };

        let mut state = BlockState::default();

        for line in markdown.lines() {
            let trimmed = line.trim();

            if trimmed.is_empty() {
                state.flush_paragraph();
                state.close_list();
            } else if let Some((level, content)) = self.heading(trimmed) {
                state.flush_paragraph();
                state.close_list();
                state.blocks.push(RenderedBlock::Heading {
                    level,
                    html: inline::format(content),
                });
            } else if let Some(item) = trimmed.strip_prefix("- ") {
                state.flush_paragraph();
                state
                    .list
                    .get_or_insert_with(Vec::new)
                    .push(ListItem {
                        html: inline::format(item.trim()),
                    });
            } else {
                state.close_list();
                state.paragraph.push(trimmed.to_string());
            }
        }

        state.flush_paragraph();
        state.close_list();

        RenderedBody {
            blocks: state.blocks,
        }
    }

    /// Render markdown straight to HTML
    pub fn render_html(&self, markdown: &str) -> String {
        self.render(markdown).to_html()
    }

    /// Match `#`..`######` followed by a space
    fn heading<'a>(&self, line: &'a str) -> Option<(u8, &'a str)> {
        let markers = line.chars().take_while(|&c| c == '#').count();
        let rest = &line[markers..];
        if !rest.starts_with(' ') {
            return None;
        }
        let level = self.headings.level(markers)?;
        Some((level, rest.trim()))
    }
}

#[derive(Default)]
struct BlockState {
    blocks: Vec<RenderedBlock>,
    paragraph: Vec<String>,
    list: Option<Vec<ListItem>>,
}

impl BlockState {
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join(" ");
        self.paragraph.clear();
        self.blocks.push(RenderedBlock::Paragraph {
            html: inline::format(&text),
        });
    }

    fn close_list(&mut self) {
        if let Some(items) = self.list.take() {
            self.blocks.push(RenderedBlock::List { items });
        }
    }
}
