//! Rebuilds editable markup from clean text plus style spans.
//!
//! The approximate inverse of parsing, restricted to style spans:
//! entities are already literal `@name`/`#tag`/URL text in the clean
//! text and get no delimiters. Each style span contributes an open and a
//! close insertion; applying them from the highest index down means a
//! splice never shifts an index that is still pending.

use crate::error::RichTextError;
use crate::span::{validate_spans, Span};

struct Insertion {
    index: usize,
    text: &'static str,
    close: bool,
}

/// Produce markup text that re-parses to `(text, spans)`. Spans are
/// validated on entry; zero-length spans come out as an adjacent
/// delimiter pair.
pub fn reconstruct(text: &str, spans: &[Span]) -> Result<String, RichTextError> {
    validate_spans(text, spans)?;

    let mut insertions = Vec::with_capacity(2 * spans.len());
    for span in spans {
        let Some(marker) = span.kind.marker() else {
            continue;
        };
        insertions.push(Insertion {
            index: span.offset,
            text: marker.open,
            close: false,
        });
        insertions.push(Insertion {
            index: span.end(),
            text: marker.close,
            close: true,
        });
    }

    // Descending index; at equal indices closes are spliced first, which
    // leaves opens to their left in the final string. The sort is stable,
    // so spans keep their stored order within a tie.
    insertions.sort_by(|a, b| b.index.cmp(&a.index).then(b.close.cmp(&a.close)));

    let mut result = text.to_string();
    for ins in &insertions {
        result.insert_str(ins.index, ins.text);
    }
    Ok(result)
}
