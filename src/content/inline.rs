//! Inline markup: links, bold and italic over escaped text

use lazy_static::lazy_static;
use regex::Regex;

use crate::helpers::html_escape;

lazy_static! {
    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref ITALIC: Regex = Regex::new(r"\*([^*]+)\*").unwrap();
}

/// Format one line of narrative text into inline HTML.
///
/// The raw text is escaped before any markup is introduced, so the only
/// tags in the output are the ones produced here. Links are cut out first;
/// emphasis applies to the text between them and to each label, never to
/// an href. Bold runs before italic so the inner asterisks of `**x**` are
/// never read as emphasis.
///
/// Unmatched asterisks are left as literal `*`; inputs such as `***x**`
/// can still nest oddly, and emphasis does not span across a link.
pub fn format(line: &str) -> String {
    let escaped = html_escape(line);

    let mut out = String::with_capacity(escaped.len());
    let mut last = 0;
    for caps in LINK.captures_iter(&escaped) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&emphasis(&escaped[last..whole.start()]));
        out.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            neutralize_quotes(&caps[2]),
            emphasis(&caps[1])
        ));
        last = whole.end();
    }
    out.push_str(&emphasis(&escaped[last..]));

    out
}

/// Bold, then italic, over already-escaped text
fn emphasis(text: &str) -> String {
    let bold = BOLD.replace_all(text, "<strong>$1</strong>");
    ITALIC.replace_all(&bold, "<em>$1</em>").into_owned()
}

/// Percent-encode any quote character that would end the href attribute
fn neutralize_quotes(url: &str) -> String {
    url.replace('"', "%22").replace('\'', "%27")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(format("Hello world"), "Hello world");
    }

    #[test]
    fn test_escapes_reserved_characters() {
        assert_eq!(
            format(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_no_raw_markup_from_input() {
        let inputs = ["a < b > c & d", "<b>**x**</b>", "[<i>] (<u>)", "*<em>*"];
        for input in inputs {
            let out = format(input);
            let stripped = out
                .replace("<strong>", "")
                .replace("</strong>", "")
                .replace("<em>", "")
                .replace("</em>", "");
            assert!(!stripped.contains('<'), "{} -> {}", input, out);
            assert!(!stripped.contains('>'), "{} -> {}", input, out);
            assert!(
                stripped.matches('&').count()
                    == stripped.matches("&amp;").count()
                        + stripped.matches("&lt;").count()
                        + stripped.matches("&gt;").count()
                        + stripped.matches("&quot;").count()
                        + stripped.matches("&#39;").count(),
                "{} -> {}",
                input,
                out
            );
        }
    }

    #[test]
    fn test_bold_and_italic() {
        let out = format("**bold** and *italic*");
        assert_eq!(out, "<strong>bold</strong> and <em>italic</em>");
        assert_eq!(out.matches("<strong>").count(), 1);
        assert_eq!(out.matches("<em>").count(), 1);
    }

    #[test]
    fn test_italic_inside_bold() {
        assert_eq!(
            format("**very *much* so**"),
            "<strong>very <em>much</em> so</strong>"
        );
    }

    #[test]
    fn test_link_opens_new_context() {
        assert_eq!(
            format("Listen on [Spotify](https://open.spotify.com/artist/1)"),
            r#"Listen on <a href="https://open.spotify.com/artist/1" target="_blank" rel="noopener noreferrer">Spotify</a>"#
        );
    }

    #[test]
    fn test_link_url_quotes_cannot_break_attribute() {
        let out = format(r#"[x](https://a.example/"onmouseover="y)"#);
        assert!(out.starts_with(r#"<a href="https://a.example/&quot;onmouseover=&quot;y""#));
        assert_eq!(out.matches('"').count(), 6);
    }

    #[test]
    fn test_link_query_ampersand_escaped() {
        let out = format("[tour](https://x.example/?a=1&b=2)");
        assert!(out.contains(r#"href="https://x.example/?a=1&amp;b=2""#));
    }

    #[test]
    fn test_asterisks_in_href_are_not_emphasis() {
        assert_eq!(
            format("[a](https://x.example/a*b) and *c*"),
            r#"<a href="https://x.example/a*b" target="_blank" rel="noopener noreferrer">a</a> and <em>c</em>"#
        );
        assert_eq!(
            format("[a](https://x.example/*b*)"),
            r#"<a href="https://x.example/*b*" target="_blank" rel="noopener noreferrer">a</a>"#
        );
    }

    #[test]
    fn test_link_label_gets_emphasis() {
        assert_eq!(
            format("**[new](https://x.example/)** out now"),
            r#"**<a href="https://x.example/" target="_blank" rel="noopener noreferrer">new</a>** out now"#
        );
        assert_eq!(
            format("[**new** single](https://x.example/)"),
            r#"<a href="https://x.example/" target="_blank" rel="noopener noreferrer"><strong>new</strong> single</a>"#
        );
    }

    #[test]
    fn test_unmatched_asterisk_left_literal() {
        assert_eq!(format("5 * 3"), "5 * 3");
    }
}
