//! fixref - rewrites hyperref-style anchors in generated LaTeX into native
//! label/ref cross-references.
//!
//! Upstream document generators emit `\hypertarget{ID}{...}` anchors and
//! `\hyperlink{ID}{text}` links, the HTML-flavored cross-referencing of the
//! hyperref package. For print output those constructs have to become plain
//! `\label{ID}` / `\ref{ID}` pairs attached to the right figure caption or
//! sectioning command. This crate does that rewrite as three sequential
//! passes over one in-memory buffer; see [`passes`] for the exact rules.
//!
//! This is deliberately not a LaTeX parser: only the handful of command
//! tokens above are recognized, by literal search plus balanced-brace
//! scanning, and unbalanced input aborts the run with a panic.

pub mod passes;
pub mod scan;

pub use passes::{relabel_figure_targets, relabel_section_targets, resolve_hyperlinks};
pub use scan::Buffer;

/// Runs the full rewrite over `input`: figure targets, then hyperlinks,
/// then sectioning targets.
pub fn fix_references(input: &str) -> String {
    let buf = Buffer::new(input.to_string());
    let buf = passes::relabel_figure_targets(buf);
    let buf = passes::resolve_hyperlinks(buf);
    let buf = passes::relabel_section_targets(buf);
    buf.into_inner()
}
