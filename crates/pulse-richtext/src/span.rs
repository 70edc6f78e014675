//! Canonical span types and the stored wire shape.
//!
//! A [`Span`] is the persisted unit: an offset + length range addressed
//! against clean (marker-free) text, tagged with a [`SpanKind`]. Offsets
//! and lengths are byte positions into the UTF-8 clean text; the engine
//! only ever produces values on character boundaries.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::RichTextError;

/// What a span means: either an inline style or a recognized entity.
///
/// The wire encoding is internally tagged as `{"kind": "bold"}`,
/// `{"kind": "link", "url": "..."}` and so on. Old stored data may carry
/// `"monospace"`, which deserializes as [`SpanKind::Code`] and serializes
/// back as `"code"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SpanKind {
    Bold,
    Italic,
    Underline,
    Strike,
    Spoiler,
    #[serde(alias = "monospace")]
    Code,
    Link { url: SmolStr },
    Hashtag { tag: SmolStr },
    Mention { username: SmolStr },
}

impl SpanKind {
    /// Whether this kind is recognized from text shape rather than markers.
    pub fn is_entity(&self) -> bool {
        matches!(
            self,
            Self::Link { .. } | Self::Hashtag { .. } | Self::Mention { .. }
        )
    }

    /// The style flag for this kind, if it is a style kind.
    pub fn style(&self) -> Option<Styles> {
        match self {
            Self::Bold => Some(Styles::BOLD),
            Self::Italic => Some(Styles::ITALIC),
            Self::Underline => Some(Styles::UNDERLINE),
            Self::Strike => Some(Styles::STRIKE),
            Self::Spoiler => Some(Styles::SPOILER),
            Self::Code => Some(Styles::CODE),
            _ => None,
        }
    }
}

bitflags::bitflags! {
    /// Set of inline styles active on a run of rendered text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Styles: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKE = 1 << 3;
        const SPOILER = 1 << 4;
        const CODE = 1 << 5;
    }
}

/// One stored annotation over clean text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    #[serde(flatten)]
    pub kind: SpanKind,
    pub offset: usize,
    pub length: usize,
}

impl Span {
    pub fn new(kind: SpanKind, offset: usize, length: usize) -> Self {
        Self {
            kind,
            offset,
            length,
        }
    }

    /// End of the span, exclusive.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether this span fully covers the run `[run.start, run.end)`.
    ///
    /// The same containment test is used for style and entity spans alike.
    pub fn covers(&self, run: &Range<usize>) -> bool {
        self.offset <= run.start && run.end <= self.end()
    }
}

/// Storage-ready parse result: marker-free text plus canonical spans.
///
/// Serializes to the transmitted shape:
/// `{ "cleanText": ..., "spans": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parsed {
    pub clean_text: String,
    pub spans: Vec<Span>,
}

/// Reject spans that do not address `text`. Stored data is not trusted:
/// a corrupt span must surface as an error here, never as a panic in the
/// slicing code behind it.
pub(crate) fn validate_spans(text: &str, spans: &[Span]) -> Result<(), RichTextError> {
    for span in spans {
        let end = span
            .offset
            .checked_add(span.length)
            .filter(|end| *end <= text.len())
            .ok_or(RichTextError::SpanOutOfBounds {
                offset: span.offset,
                length: span.length,
                text_len: text.len(),
            })?;
        if !text.is_char_boundary(span.offset) {
            return Err(RichTextError::SpanNotOnCharBoundary {
                offset: span.offset,
            });
        }
        if !text.is_char_boundary(end) {
            return Err(RichTextError::SpanNotOnCharBoundary { offset: end });
        }
    }
    Ok(())
}
