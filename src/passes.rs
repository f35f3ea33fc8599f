//! The three rewrite passes.
//!
//! Each pass owns the buffer for its duration, scans left to right, and
//! resumes the search one byte past the start of the occurrence it just
//! handled. The hypertarget passes run before and after hyperlink
//! resolution: an anchor that survives the figure pass may still be the
//! target of links elsewhere, and every splice shifts the offsets of
//! everything behind it, so the passes never interleave.

use crate::scan::Buffer;

const HYPERTARGET: &str = "\\hypertarget";
const HYPERLINK: &str = "\\hyperlink";
const FIGURE_ENV: &str = "\\begin{figure}";
const CAPTION: &str = "\\caption";

/// Anchors generated for source-code links; stripped without a label.
const INTERNAL_MARKER: &str = "--doc-src";

const SECTIONING: [&str; 4] = [
    "\\chapter{",
    "\\section{",
    "\\subsection{",
    "\\subsubsection{",
];

fn label_for(id: &str) -> String {
    format!("\\label{{{}}}", id)
}

/// Locates a two-argument anchor command's ID (between the first `{` and
/// first `}` after the token at `start`) and the offset of the closing
/// brace of its second argument group.
fn anchor_parts(buf: &Buffer, start: usize) -> (String, usize) {
    let open = buf.must_find("{", start);
    let close = buf.must_find("}", start);
    let id = buf.slice(open + 1..close).to_string();
    let end = buf.matching_close(close + 1);
    (id, end)
}

/// Pass 1: hypertargets sitting directly in front of a figure environment
/// lose their wrapper and the figure's caption gains `\label{ID}` instead.
///
/// Occurrences not followed by `\begin{figure}` (ignoring whitespace), or
/// with no `\caption` anywhere after them, are left untouched for pass 3.
pub fn relabel_figure_targets(mut buf: Buffer) -> Buffer {
    let mut from = 0;
    while let Some(start) = buf.find_from(HYPERTARGET, from) {
        from = start + 1;
        let (id, end) = anchor_parts(&buf, start);

        let next = buf.skip_whitespace(end + 1);
        if !buf.starts_with_at(next, FIGURE_ENV) {
            continue;
        }
        let caption = match buf.find_from(CAPTION, start) {
            Some(pos) => pos,
            None => continue,
        };
        let caption_close = buf.matching_close(caption);

        // Insert after the caption first; the wrapper sits in front of it,
        // so removing the wrapper second keeps both offsets valid.
        buf.insert(caption_close + 1, &label_for(&id));
        buf.remove(start..end + 1);
    }
    buf
}

/// Pass 2: every `\hyperlink{ID}{text}` becomes `\ref{ID}`, discarding the
/// link text. Unlike the hypertarget passes, nothing is ever skipped.
pub fn resolve_hyperlinks(mut buf: Buffer) -> Buffer {
    let mut from = 0;
    while let Some(start) = buf.find_from(HYPERLINK, from) {
        from = start + 1;
        let (id, end) = anchor_parts(&buf, start);
        buf.replace(start..end + 1, &format!("\\ref{{{}}}", id));
    }
    buf
}

/// Pass 3: hypertargets that precede a sectioning command lose their
/// wrapper and the command's argument is followed by `\label{ID}`.
///
/// IDs carrying the internal marker are stripped outright. Anything
/// between the wrapper and the sectioning command's backslash is removed
/// along with the wrapper. Occurrences followed by no recognized
/// sectioning command stay in the output verbatim.
pub fn relabel_section_targets(mut buf: Buffer) -> Buffer {
    let mut from = 0;
    while let Some(start) = buf.find_from(HYPERTARGET, from) {
        from = start + 1;
        let (id, mut end) = anchor_parts(&buf, start);

        if id.contains(INTERNAL_MARKER) {
            buf.remove(start..end + 1);
            continue;
        }

        while buf.byte(end + 1) != b'\\' {
            end += 1;
        }
        let command = end + 1;
        if !SECTIONING
            .iter()
            .any(|tok| buf.starts_with_at(command, tok))
        {
            continue;
        }
        let arg_close = buf.matching_close(command);

        buf.insert(arg_close + 1, &label_for(&id));
        buf.remove(start..command);
    }
    buf
}
