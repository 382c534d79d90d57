//! One render pass: split, parse, render, bind
//!
//! Everything here is synchronous and holds no state between passes, so a
//! `Pipeline` can be shared across threads and reused for any number of
//! documents.

use serde::Serialize;

use crate::binding::{Binding, ContentBinder, PresentationModel, Warning};
use crate::config::{HeadingPolicy, SiteConfig};
use crate::content::loader::Source;
use crate::content::{ConfigNode, MarkdownRenderer, ParsedDocument, RenderedBody, TreeParser};

/// Everything produced by one render pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOutput {
    pub config: ConfigNode,
    pub body: RenderedBody,
    pub model: PresentationModel,
    pub warnings: Vec<Warning>,
}

/// Configured content pipeline
#[derive(Debug, Clone)]
pub struct Pipeline {
    parser: TreeParser,
    headings: HeadingPolicy,
    placeholder_token: String,
    binder: ContentBinder,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl Pipeline {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            parser: TreeParser::new(config.tab_width),
            headings: config.headings,
            placeholder_token: config.placeholder_token.clone(),
            binder: ContentBinder::new(config),
        }
    }

    pub fn run(&self, source: Source) -> RenderOutput {
        match source {
            Source::Document(text) => self.render_document(&text),
            Source::Fallback(tree) => self.render_tree(tree, ""),
        }
    }

    /// Render a raw document
    pub fn render_document(&self, text: &str) -> RenderOutput {
        let parsed = ParsedDocument::split(text);
        let tree = parsed.config(&self.parser);
        self.render_tree(tree, &parsed.body)
    }

    /// Render an already-parsed configuration with a body
    pub fn render_tree(&self, tree: ConfigNode, body: &str) -> RenderOutput {
        let name = self.binder.display_name(&tree);
        let renderer = MarkdownRenderer::with_options(self.headings)
            .with_substitution(&self.placeholder_token, &name);
        let body = renderer.render(body);

        let Binding { model, warnings } = self.binder.bind(&tree, &body.to_html());

        RenderOutput {
            config: tree,
            body,
            model,
            warnings,
        }
    }
}
