//! Structured content tree for display surfaces.
//!
//! A [`RichNode`] is one run of clean text with its decorations resolved
//! to plain data. Interaction is the consumer's concern: entity payloads
//! carry the url/tag/username to navigate on, and a spoiler run stays
//! masked until the consumer flips its own revealed flag.

use smol_str::SmolStr;

use crate::error::RichTextError;
use crate::span::{validate_spans, Span, SpanKind, Styles};

use super::segments;

/// Entity wrapping a run, outermost in the render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Link { url: SmolStr },
    Hashtag { tag: SmolStr },
    Mention { username: SmolStr },
}

impl Entity {
    fn from_kind(kind: &SpanKind) -> Option<Self> {
        match kind {
            SpanKind::Link { url } => Some(Self::Link { url: url.clone() }),
            SpanKind::Hashtag { tag } => Some(Self::Hashtag { tag: tag.clone() }),
            SpanKind::Mention { username } => Some(Self::Mention {
                username: username.clone(),
            }),
            _ => None,
        }
    }
}

/// One run of rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichNode {
    pub text: String,
    pub styles: Styles,
    pub entity: Option<Entity>,
}

impl RichNode {
    /// Whether this run should start out visually masked.
    pub fn is_spoiler(&self) -> bool {
        self.styles.contains(Styles::SPOILER)
    }
}

/// Resolve stored text + spans into a flat run list for display.
/// Spans are validated first; corrupt storage surfaces as an error
/// rather than a panic.
pub fn render(text: &str, spans: &[Span]) -> Result<Vec<RichNode>, RichTextError> {
    validate_spans(text, spans)?;
    Ok(segments(text, spans)
        .into_iter()
        .map(|seg| RichNode {
            text: seg.text.to_owned(),
            styles: seg.styles,
            entity: seg.entity.and_then(Entity::from_kind),
        })
        .collect())
}
