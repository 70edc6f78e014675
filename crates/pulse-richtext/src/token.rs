//! Single-pass tokenizer for authored composition text.
//!
//! One regex scan, left to right. Alternation order is the priority
//! order: URLs first (so markers inside a URL are swallowed by the URL
//! match and never re-tokenized), then hashtags, mentions, and style
//! markers longest-first (`***` before `**` before `*`, `__` before `_`).
//! Text matching none of the patterns produces no token.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use smol_str::SmolStr;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?P<link>https?://[^\s<>"')\]]+)|#(?P<tag>[A-Za-zа-яА-ЯёЁ0-9_]+)|@(?P<mention>[A-Za-z0-9_]+)|(?P<marker>\*\*\*|\*\*|__|_|~~|\|\||`|\*)"#,
    )
    .unwrap()
});

/// One lexical item, addressed against the original text. The range
/// always covers the full occurrence, sigil included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub range: Range<usize>,
    pub kind: TokenKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Link { url: SmolStr },
    Hashtag { tag: SmolStr },
    Mention { username: SmolStr },
    Marker { literal: SmolStr },
}

/// Scan `text` into an ordered token stream.
pub(crate) fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for caps in TOKEN_RE.captures_iter(text) {
        if let Some(link) = caps.name("link") {
            tokens.push(Token {
                range: link.range(),
                kind: TokenKind::Link {
                    url: link.as_str().into(),
                },
            });
        } else if let Some(tag) = caps.name("tag") {
            tokens.push(Token {
                // extent includes the leading sigil
                range: tag.start() - 1..tag.end(),
                kind: TokenKind::Hashtag {
                    tag: tag.as_str().into(),
                },
            });
        } else if let Some(mention) = caps.name("mention") {
            tokens.push(Token {
                range: mention.start() - 1..mention.end(),
                kind: TokenKind::Mention {
                    username: mention.as_str().into(),
                },
            });
        } else if let Some(marker) = caps.name("marker") {
            tokens.push(Token {
                range: marker.range(),
                kind: TokenKind::Marker {
                    literal: marker.as_str().into(),
                },
            });
        }
    }
    tokens
}
