//! Marker matching: pairs openers with closers into raw spans.
//!
//! Entity tokens pass straight through. Style tokens go through a single
//! stack shared across all marker kinds: a token whose literal matches an
//! unmatched opener closes it (searching from the top of the stack down),
//! anything else is pushed as a new opener. Openers left on the stack at
//! end of input produce no span; their literal text is still stripped
//! during canonicalization, so a stray `**` silently disappears instead
//! of leaking into the clean text.

use std::ops::Range;

use smol_str::SmolStr;

use crate::marker::kind_for_marker;
use crate::span::SpanKind;
use crate::token::{Token, TokenKind};

/// A formatting or entity range addressed against the original,
/// marker-bearing text. Raw spans may nest and overlap freely; the
/// canonicalizer flattens them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawSpan {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
}

impl RawSpan {
    /// Whether this span fully covers the run `[run.start, run.end)`.
    /// Style and entity spans use the same containment test.
    pub fn covers(&self, run: &Range<usize>) -> bool {
        self.start <= run.start && run.end <= self.end
    }
}

/// Resolver output. `markers` holds the extent of every style token
/// seen, matched or not: the canonicalizer needs them as cut points so
/// marker literals become isolated runs and drop out of the clean text.
#[derive(Debug, Default)]
pub(crate) struct Resolution {
    pub spans: Vec<RawSpan>,
    pub markers: Vec<Range<usize>>,
}

/// Fold the token stream into raw spans, ordered by start.
pub(crate) fn resolve(tokens: Vec<Token>) -> Resolution {
    let mut spans = Vec::new();
    let mut markers = Vec::new();
    let mut stack: Vec<(SmolStr, Range<usize>)> = Vec::new();

    for token in tokens {
        let range = token.range;
        match token.kind {
            TokenKind::Link { url } => spans.push(RawSpan {
                kind: SpanKind::Link { url },
                start: range.start,
                end: range.end,
            }),
            TokenKind::Hashtag { tag } => spans.push(RawSpan {
                kind: SpanKind::Hashtag { tag },
                start: range.start,
                end: range.end,
            }),
            TokenKind::Mention { username } => spans.push(RawSpan {
                kind: SpanKind::Mention { username },
                start: range.start,
                end: range.end,
            }),
            TokenKind::Marker { literal } => {
                markers.push(range.clone());
                if literal == "***" {
                    // Combined bold+italic toggle: only pairs with a `***`
                    // sitting directly on top of the stack.
                    if stack.last().is_some_and(|(open, _)| *open == "***") {
                        if let Some((_, open)) = stack.pop() {
                            spans.push(RawSpan {
                                kind: SpanKind::Bold,
                                start: open.start,
                                end: range.end,
                            });
                            spans.push(RawSpan {
                                kind: SpanKind::Italic,
                                start: open.start,
                                end: range.end,
                            });
                        }
                    } else {
                        stack.push((literal, range));
                    }
                } else if let Some(kind) = kind_for_marker(&literal) {
                    // Most recent unmatched opener with the same literal;
                    // entries above it stay on the stack.
                    if let Some(idx) = stack.iter().rposition(|(open, _)| *open == literal) {
                        let (_, open) = stack.remove(idx);
                        spans.push(RawSpan {
                            kind,
                            start: open.start,
                            end: range.end,
                        });
                    } else {
                        stack.push((literal, range));
                    }
                }
            }
        }
    }

    spans.sort_by_key(|span| span.start);
    Resolution { spans, markers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    fn resolve_text(text: &str) -> Resolution {
        resolve(tokenize(text))
    }

    #[test]
    fn test_simple_pair() {
        let res = resolve_text("**hello**");
        assert_eq!(
            res.spans,
            vec![RawSpan {
                kind: SpanKind::Bold,
                start: 0,
                end: 9
            }]
        );
        assert_eq!(res.markers, vec![0..2, 7..9]);
    }

    #[test]
    fn test_star_and_underscore_both_italic() {
        let res = resolve_text("*a*");
        assert_eq!(res.spans[0].kind, SpanKind::Italic);
        let res = resolve_text("_a_");
        assert_eq!(res.spans[0].kind, SpanKind::Italic);
    }

    #[test]
    fn test_star_only_closes_star() {
        // `_` cannot close `*` even though both resolve to italic;
        // matching is by literal, not by kind.
        let res = resolve_text("*a_");
        assert!(res.spans.is_empty());
        assert_eq!(res.markers.len(), 2);
    }

    #[test]
    fn test_triple_star_emits_both_kinds() {
        let res = resolve_text("***wow***");
        assert_eq!(res.spans.len(), 2);
        assert_eq!(res.spans[0].kind, SpanKind::Bold);
        assert_eq!(res.spans[1].kind, SpanKind::Italic);
        assert_eq!((res.spans[0].start, res.spans[0].end), (0, 9));
        assert_eq!((res.spans[1].start, res.spans[1].end), (0, 9));
    }

    #[test]
    fn test_nested_kinds() {
        let res = resolve_text("**bold _and italic_**");
        assert_eq!(res.spans.len(), 2);
        assert_eq!(res.spans[0].kind, SpanKind::Bold);
        assert_eq!((res.spans[0].start, res.spans[0].end), (0, 21));
        assert_eq!(res.spans[1].kind, SpanKind::Italic);
        assert_eq!((res.spans[1].start, res.spans[1].end), (7, 19));
    }

    #[test]
    fn test_crossing_markers_still_pair_by_literal() {
        // bold opens, underline opens, bold closes over the underline
        // opener, underline closes later: two overlapping raw spans.
        let res = resolve_text("**a__b**c__");
        assert_eq!(res.spans.len(), 2);
        assert_eq!(res.spans[0].kind, SpanKind::Bold);
        assert_eq!((res.spans[0].start, res.spans[0].end), (0, 8));
        assert_eq!(res.spans[1].kind, SpanKind::Underline);
        assert_eq!((res.spans[1].start, res.spans[1].end), (3, 11));
    }

    #[test]
    fn test_unmatched_opener_produces_no_span() {
        let res = resolve_text("**oops");
        assert!(res.spans.is_empty());
        assert_eq!(res.markers, vec![0..2]);
    }

    #[test]
    fn test_entities_bypass_the_stack() {
        let res = resolve_text("**see #tag");
        // Unmatched bold opener is dropped; the hashtag still resolves.
        assert_eq!(res.spans.len(), 1);
        assert_eq!(res.spans[0].kind, SpanKind::Hashtag { tag: "tag".into() });
    }

    #[test]
    fn test_adjacent_empty_pair() {
        let res = resolve_text("____");
        assert_eq!(
            res.spans,
            vec![RawSpan {
                kind: SpanKind::Underline,
                start: 0,
                end: 4
            }]
        );
    }

    #[test]
    fn test_four_stars_lex_as_triple_plus_single() {
        // Longest-match-first: `***` then `*`, two openers that never
        // pair. No span; both literals are stripped downstream.
        let res = resolve_text("****");
        assert!(res.spans.is_empty());
        assert_eq!(res.markers, vec![0..3, 3..4]);
    }
}
