//! Static marker configuration.
//!
//! Two fixed tables drive the whole engine: the per-style delimiter pair
//! used for matching and reconstruction, and the full set of literals the
//! tokenizer recognizes. The sets differ: `*` and `***` are tokenized
//! (single-star italic, combined bold+italic) but reconstruction always
//! prefers the canonical delimiter of each kind.

use crate::span::SpanKind;

/// Open/close delimiter pair for one style kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub open: &'static str,
    pub close: &'static str,
}

impl Marker {
    const fn symmetric(delim: &'static str) -> Self {
        Self {
            open: delim,
            close: delim,
        }
    }
}

impl SpanKind {
    /// Delimiters used to reconstruct this kind, if it has any.
    /// Entities are recognized from text shape and carry no delimiters.
    pub fn marker(&self) -> Option<Marker> {
        match self {
            Self::Bold => Some(Marker::symmetric("**")),
            Self::Italic => Some(Marker::symmetric("_")),
            Self::Underline => Some(Marker::symmetric("__")),
            Self::Strike => Some(Marker::symmetric("~~")),
            Self::Spoiler => Some(Marker::symmetric("||")),
            Self::Code => Some(Marker::symmetric("`")),
            _ => None,
        }
    }
}

/// Every literal the tokenizer recognizes as a style marker, longest
/// variants first. This is also the suppression set: a run of original
/// text equal to any of these never reaches the clean output.
pub(crate) const MARKER_LITERALS: [&str; 8] = ["***", "**", "__", "_", "~~", "||", "`", "*"];

/// Style kind a closing/opening marker resolves to. `***` toggles bold
/// and italic together and is special-cased by the resolver.
pub(crate) fn kind_for_marker(literal: &str) -> Option<SpanKind> {
    match literal {
        "**" => Some(SpanKind::Bold),
        "*" | "_" => Some(SpanKind::Italic),
        "__" => Some(SpanKind::Underline),
        "~~" => Some(SpanKind::Strike),
        "||" => Some(SpanKind::Spoiler),
        "`" => Some(SpanKind::Code),
        _ => None,
    }
}

pub(crate) fn is_marker_literal(text: &str) -> bool {
    MARKER_LITERALS.contains(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_style_kind_has_a_marker() {
        for kind in [
            SpanKind::Bold,
            SpanKind::Italic,
            SpanKind::Underline,
            SpanKind::Strike,
            SpanKind::Spoiler,
            SpanKind::Code,
        ] {
            assert!(kind.marker().is_some(), "{kind:?} has no marker");
        }
    }

    #[test]
    fn test_entities_have_no_marker() {
        assert!(
            SpanKind::Hashtag { tag: "news".into() }.marker().is_none()
        );
    }

    #[test]
    fn test_single_star_is_italic() {
        assert_eq!(kind_for_marker("*"), Some(SpanKind::Italic));
        assert_eq!(kind_for_marker("_"), Some(SpanKind::Italic));
    }

    #[test]
    fn test_triple_star_has_no_single_kind() {
        assert_eq!(kind_for_marker("***"), None);
    }

    #[test]
    fn test_suppression_set_includes_unconfigured_literals() {
        assert!(is_marker_literal("***"));
        assert!(is_marker_literal("*"));
        assert!(!is_marker_literal("**bold"));
        assert!(!is_marker_literal(""));
    }
}
