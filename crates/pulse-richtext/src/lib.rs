//! pulse-richtext: the span engine behind post composition.
//!
//! Converts authored text with inline markup (`**bold**`, `_italic_`,
//! `~~strike~~`, `||spoiler||`, `` `code` ``) and entity sigils (URLs,
//! `#hashtags`, `@mentions`) into marker-free clean text plus a flat
//! list of offset-addressed [`Span`]s, and provides the two inverse
//! views consumers need:
//!
//! - [`render`] / [`render_html`] turn stored `(text, spans)` back into
//!   displayable content;
//! - [`reconstruct`] rebuilds an editable markup string so previously
//!   published content can be re-edited with its markers intact.
//!
//! Parsing never fails. Unmatched or malformed markup degrades to plain
//! text: the marker characters are stripped and no span is produced.
//!
//! ```
//! use pulse_richtext::{parse_for_storage, reconstruct};
//!
//! let parsed = parse_for_storage("**hello** world");
//! assert_eq!(parsed.clean_text, "hello world");
//! assert_eq!(
//!     reconstruct(&parsed.clean_text, &parsed.spans).unwrap(),
//!     "**hello** world"
//! );
//! ```

mod canonical;
mod error;
mod marker;
mod reconstruct;
mod resolve;
mod span;
mod token;

pub mod render;

pub use error::RichTextError;
pub use marker::Marker;
pub use reconstruct::reconstruct;
pub use render::{render, render_html, render_to, Entity, HtmlOutput, RichNode, RichTextOutput};
pub use smol_str::SmolStr;
pub use span::{Parsed, Span, SpanKind, Styles};

/// Parse authored markup into the storage-ready `(clean text, spans)`
/// pair. This is the composition-side entry point, called before a post
/// or comment is handed to the transport layer.
pub fn parse_for_storage(text: &str) -> Parsed {
    if text.is_empty() {
        return Parsed::default();
    }
    let tokens = token::tokenize(text);
    tracing::trace!("tokenized {} bytes into {} tokens", text.len(), tokens.len());
    let resolution = resolve::resolve(tokens);
    canonical::canonicalize(text, resolution)
}
