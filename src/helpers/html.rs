//! HTML helper functions

use crate::binding::Seo;

/// Generate a JavaScript script tag that loads asynchronously
pub fn script_tag(src: &str) -> String {
    format!(r#"<script async src="{}"></script>"#, html_escape(src))
}

/// Generate Open Graph meta tags
pub fn open_graph(title: &str, description: &str, url: Option<&str>, image: Option<&str>) -> String {
    let mut tags = vec![
        r#"<meta property="og:type" content="website">"#.to_string(),
        format!(
            r#"<meta property="og:title" content="{}">"#,
            html_escape(title)
        ),
    ];

    if !description.is_empty() {
        tags.push(format!(
            r#"<meta property="og:description" content="{}">"#,
            html_escape(description)
        ));
    }

    if let Some(url) = url {
        tags.push(format!(
            r#"<meta property="og:url" content="{}">"#,
            html_escape(url)
        ));
    }

    if let Some(img) = image {
        tags.push(format!(
            r#"<meta property="og:image" content="{}">"#,
            html_escape(img)
        ));
    }

    tags.join("\n")
}

/// Generate the document head fragment for the bound SEO fields
pub fn seo_head(seo: &Seo) -> String {
    let mut tags = vec![
        format!("<title>{}</title>", html_escape(&seo.title)),
        format!(
            r#"<meta name="description" content="{}">"#,
            html_escape(&seo.description)
        ),
    ];

    if let Some(canonical) = &seo.canonical {
        tags.push(format!(
            r#"<link rel="canonical" href="{}">"#,
            html_escape(canonical)
        ));
    }

    tags.push(open_graph(
        &seo.title,
        &seo.description,
        seo.canonical.as_deref(),
        seo.og_image.as_deref(),
    ));
    tags.push(meta_generator());

    tags.join("\n")
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="artist-page {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seo() -> Seo {
        Seo {
            title: "Nova & Friends".to_string(),
            description: "Synth \"pop\"".to_string(),
            og_image: Some("https://nova.example/og.jpg".to_string()),
            canonical: None,
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_script_tag() {
        assert_eq!(
            script_tag("https://www.tiktok.com/embed.js"),
            r#"<script async src="https://www.tiktok.com/embed.js"></script>"#
        );
    }

    #[test]
    fn test_seo_head() {
        let head = seo_head(&seo());
        assert!(head.contains("<title>Nova &amp; Friends</title>"));
        assert!(head.contains(r#"content="Synth &quot;pop&quot;""#));
        assert!(head.contains(r#"<meta property="og:image" content="https://nova.example/og.jpg">"#));
        assert!(!head.contains("canonical"));
        assert!(!head.contains("og:url"));
    }

    #[test]
    fn test_seo_head_with_canonical() {
        let mut seo = seo();
        seo.canonical = Some("https://nova.example/".to_string());
        let head = seo_head(&seo);
        assert!(head.contains(r#"<link rel="canonical" href="https://nova.example/">"#));
        assert!(head.contains(r#"<meta property="og:url" content="https://nova.example/">"#));
    }
}
