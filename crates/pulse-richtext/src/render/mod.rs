//! Rendering stored `(text, spans)` pairs.
//!
//! Clean text is split into maximal runs on span boundaries; each run
//! carries the set of styles covering it and at most one entity. Sinks
//! implement [`RichTextOutput`] and receive the runs in order, wrapped in
//! a fixed nesting: entity outermost, then spoiler, strike, underline,
//! italic, bold, with code innermost.

mod html;
mod tree;

pub use html::{render_html, HtmlOutput};
pub use tree::{render, Entity, RichNode};

use crate::span::{Span, SpanKind, Styles};

/// Sink for rendered rich text. `start_span`/`end_span` bracket each
/// styled or entity-wrapped stretch of a run; kinds are closed in the
/// reverse of their opening order.
pub trait RichTextOutput {
    type Error;

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error>;
    fn start_span(&mut self, kind: &SpanKind) -> Result<(), Self::Error>;
    fn end_span(&mut self, kind: &SpanKind) -> Result<(), Self::Error>;
}

/// Wrapping order, outermost first. Code sits innermost so its content
/// renders verbatim inside every other decoration.
const STYLE_NESTING: [(Styles, SpanKind); 6] = [
    (Styles::SPOILER, SpanKind::Spoiler),
    (Styles::STRIKE, SpanKind::Strike),
    (Styles::UNDERLINE, SpanKind::Underline),
    (Styles::ITALIC, SpanKind::Italic),
    (Styles::BOLD, SpanKind::Bold),
    (Styles::CODE, SpanKind::Code),
];

/// One maximal run of clean text with its active decorations.
pub(crate) struct Segment<'a> {
    pub text: &'a str,
    pub styles: Styles,
    pub entity: Option<&'a SpanKind>,
}

/// Split clean text into runs. Callers must have validated `spans`
/// against `text` first.
pub(crate) fn segments<'a>(text: &'a str, spans: &'a [Span]) -> Vec<Segment<'a>> {
    let mut points = Vec::with_capacity(2 * spans.len() + 2);
    points.push(0);
    points.push(text.len());
    for span in spans {
        points.push(span.offset);
        points.push(span.end());
    }
    points.sort_unstable();
    points.dedup();

    let mut segs = Vec::new();
    for pair in points.windows(2) {
        let run = pair[0]..pair[1];
        let mut styles = Styles::empty();
        let mut link = None;
        let mut mention = None;
        let mut hashtag = None;
        for span in spans {
            if !span.covers(&run) {
                continue;
            }
            match &span.kind {
                SpanKind::Link { .. } => link = Some(&span.kind),
                SpanKind::Mention { .. } => mention = Some(&span.kind),
                SpanKind::Hashtag { .. } => hashtag = Some(&span.kind),
                kind => styles |= kind.style().unwrap_or_else(Styles::empty),
            }
        }
        segs.push(Segment {
            text: &text[run],
            styles,
            // At most one entity covers a run in well-formed data; on
            // corrupt overlap, links win over mentions over hashtags.
            entity: link.or(mention).or(hashtag),
        });
    }
    segs
}

/// Drive `output` over the runs of `text`. This is the low-level hook
/// behind [`render`] and [`render_html`]; unlike those, it does not
/// validate `spans` first.
pub fn render_to<O: RichTextOutput>(
    text: &str,
    spans: &[Span],
    output: &mut O,
) -> Result<(), O::Error> {
    for seg in segments(text, spans) {
        let mut opened: Vec<&SpanKind> = Vec::new();
        if let Some(entity) = seg.entity {
            output.start_span(entity)?;
            opened.push(entity);
        }
        for (flag, kind) in &STYLE_NESTING {
            if seg.styles.contains(*flag) {
                output.start_span(kind)?;
                opened.push(kind);
            }
        }
        output.write_text(seg.text)?;
        for kind in opened.iter().rev() {
            output.end_span(kind)?;
        }
    }
    Ok(())
}
