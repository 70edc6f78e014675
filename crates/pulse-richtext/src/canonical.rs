//! Interval canonicalization: flattens raw spans into offset+length spans
//! over marker-free clean text.
//!
//! The original text is cut at every raw-span edge and every marker-token
//! edge, so no span extent is ever crossed and every marker literal is
//! isolated as its own run. Marker-literal runs are dropped; surviving
//! runs are appended to the clean text while each covering span grows to
//! match. A span split in two by a removed interior marker (bold around
//! nested italic) is stitched back into one canonical span this way.

use crate::marker::is_marker_literal;
use crate::resolve::Resolution;
use crate::span::{Parsed, Span};

pub(crate) fn canonicalize(text: &str, resolution: Resolution) -> Parsed {
    let Resolution { spans: raw, markers } = resolution;

    let mut points = Vec::with_capacity(2 * raw.len() + 2 * markers.len() + 2);
    points.push(0);
    points.push(text.len());
    for span in &raw {
        points.push(span.start);
        points.push(span.end);
    }
    for marker in &markers {
        points.push(marker.start);
        points.push(marker.end);
    }
    points.sort_unstable();
    points.dedup();

    let mut clean = String::with_capacity(text.len());
    let mut out: Vec<Span> = Vec::new();
    // Canonical entry for each raw span, created the moment the walk
    // passes the span's start. A span whose every run is suppressed
    // (`****`) therefore still surfaces, with length 0.
    let mut slots: Vec<Option<usize>> = vec![None; raw.len()];

    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);

        for (idx, span) in raw.iter().enumerate() {
            if span.start == start && slots[idx].is_none() {
                slots[idx] = Some(out.len());
                out.push(Span::new(span.kind.clone(), clean.len(), 0));
            }
        }

        let run = &text[start..end];
        // Suppression is by string equality against the marker literals,
        // independent of whether this run was ever matched into a span.
        if is_marker_literal(run) {
            continue;
        }

        for (idx, span) in raw.iter().enumerate() {
            if span.covers(&(start..end)) {
                if let Some(slot) = slots[idx] {
                    out[slot].length += run.len();
                }
            }
        }
        clean.push_str(run);
    }

    tracing::debug!(
        "canonicalized {} raw spans into {} over {} clean bytes",
        raw.len(),
        out.len(),
        clean.len()
    );
    Parsed {
        clean_text: clean,
        spans: out,
    }
}
