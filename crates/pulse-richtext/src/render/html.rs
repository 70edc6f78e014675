//! HTML sink for rendered rich text.

use std::fmt::Write;

use crate::error::RichTextError;
use crate::span::{validate_spans, Span, SpanKind};

use super::{render_to, RichTextOutput};

pub struct HtmlOutput<W: Write> {
    writer: W,
}

impl<W: Write> HtmlOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RichTextOutput for HtmlOutput<W> {
    type Error = std::fmt::Error;

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
        for c in text.chars() {
            match c {
                '&' => self.writer.write_str("&amp;")?,
                '<' => self.writer.write_str("&lt;")?,
                '>' => self.writer.write_str("&gt;")?,
                _ => self.writer.write_char(c)?,
            }
        }
        Ok(())
    }

    fn start_span(&mut self, kind: &SpanKind) -> Result<(), Self::Error> {
        match kind {
            SpanKind::Bold => write!(self.writer, "<strong>"),
            SpanKind::Italic => write!(self.writer, "<em>"),
            SpanKind::Underline => write!(self.writer, "<u>"),
            SpanKind::Strike => write!(self.writer, "<s>"),
            SpanKind::Code => write!(self.writer, "<code>"),
            SpanKind::Spoiler => write!(self.writer, "<span class=\"spoiler\">"),
            SpanKind::Link { url } => {
                write!(self.writer, "<a href=\"")?;
                for c in url.chars() {
                    match c {
                        '"' => self.writer.write_str("%22")?,
                        _ => self.writer.write_char(c)?,
                    }
                }
                write!(self.writer, "\">")
            }
            SpanKind::Mention { username } => {
                write!(
                    self.writer,
                    "<a class=\"mention\" href=\"/profile/{}\">",
                    username
                )
            }
            SpanKind::Hashtag { tag } => {
                write!(self.writer, "<a class=\"hashtag\" href=\"/tags/{}\">", tag)
            }
        }
    }

    fn end_span(&mut self, kind: &SpanKind) -> Result<(), Self::Error> {
        match kind {
            SpanKind::Bold => write!(self.writer, "</strong>"),
            SpanKind::Italic => write!(self.writer, "</em>"),
            SpanKind::Underline => write!(self.writer, "</u>"),
            SpanKind::Strike => write!(self.writer, "</s>"),
            SpanKind::Code => write!(self.writer, "</code>"),
            SpanKind::Spoiler => write!(self.writer, "</span>"),
            SpanKind::Link { .. } | SpanKind::Mention { .. } | SpanKind::Hashtag { .. } => {
                write!(self.writer, "</a>")
            }
        }
    }
}

/// Render stored text + spans straight to an HTML string. Spans are
/// validated on entry.
pub fn render_html(text: &str, spans: &[Span]) -> Result<String, RichTextError> {
    validate_spans(text, spans)?;
    let mut output = HtmlOutput::new(String::new());
    render_to(text, spans, &mut output)?;
    Ok(output.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_bold() {
        let spans = [Span::new(SpanKind::Bold, 0, 5)];
        assert_eq!(
            render_html("hello world", &spans).unwrap(),
            "<strong>hello</strong> world"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(render_html("a<b&c>", &[]).unwrap(), "a&lt;b&amp;c&gt;");
    }

    #[test]
    fn test_nesting_order_code_innermost() {
        let spans = [
            Span::new(SpanKind::Bold, 0, 1),
            Span::new(SpanKind::Code, 0, 1),
        ];
        assert_eq!(
            render_html("x", &spans).unwrap(),
            "<strong><code>x</code></strong>"
        );
    }

    #[test]
    fn test_entity_wraps_styles() {
        let spans = [
            Span::new(SpanKind::Bold, 0, 4),
            Span::new(SpanKind::Hashtag { tag: "tag".into() }, 0, 4),
        ];
        assert_eq!(
            render_html("#tag", &spans).unwrap(),
            "<a class=\"hashtag\" href=\"/tags/tag\"><strong>#tag</strong></a>"
        );
    }

    #[test]
    fn test_link_href_quotes_escaped() {
        let spans = [Span::new(
            SpanKind::Link {
                url: "https://x/\"y".into(),
            },
            0,
            4,
        )];
        assert_eq!(
            render_html("here", &spans).unwrap(),
            "<a href=\"https://x/%22y\">here</a>"
        );
    }

    #[test]
    fn test_spoiler_wrapper() {
        let spans = [Span::new(SpanKind::Spoiler, 0, 6)];
        assert_eq!(
            render_html("hidden", &spans).unwrap(),
            "<span class=\"spoiler\">hidden</span>"
        );
    }

    #[test]
    fn test_mention_anchor() {
        let spans = [Span::new(
            SpanKind::Mention {
                username: "bob".into(),
            },
            0,
            4,
        )];
        assert_eq!(
            render_html("@bob", &spans).unwrap(),
            "<a class=\"mention\" href=\"/profile/bob\">@bob</a>"
        );
    }
}
