//! Validation errors for stored span data.
//!
//! Parsing authored markup never fails: malformed or unmatched markers
//! degrade to plain text with no span. Errors exist only on the consuming
//! side, where spans arrive from storage and must be checked before any
//! slicing happens.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[non_exhaustive]
pub enum RichTextError {
    /// A span extends past the end of the clean text it claims to address.
    #[error("span at offset {offset} with length {length} exceeds text length {text_len}")]
    #[diagnostic(code(richtext::span_out_of_bounds))]
    SpanOutOfBounds {
        offset: usize,
        length: usize,
        text_len: usize,
    },

    /// A span boundary lands inside a multi-byte character.
    #[error("span boundary at byte {offset} is not a character boundary")]
    #[diagnostic(code(richtext::span_not_char_aligned))]
    SpanNotOnCharBoundary { offset: usize },

    /// The output sink failed while rendering.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}
