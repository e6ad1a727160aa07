//! Case-insensitive match highlighting
//!
//! The query is matched literally; characters that would be special in a
//! pattern language carry no meaning here.

use crate::search::fold_case;

/// Split `text` into runs, flagging the runs that match `query`
///
/// Matches are found left to right without overlap and keep the original
/// case of `text`. Case is folded the same way search folds it, so a match
/// may cover a whole character whose lowercase form is longer than the
/// matched part of the query. An empty (or whitespace-only) query yields the
/// whole text as one unflagged run.
pub fn highlight_spans<'a>(text: &'a str, query: &str) -> Vec<(&'a str, bool)> {
    let needle = fold_case(query.trim());
    if needle.is_empty() || text.is_empty() {
        return vec![(text, false)];
    }

    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while cursor < text.len() {
        if let Some(end) = match_end(text, cursor, &needle) {
            if plain_start < cursor {
                spans.push((&text[plain_start..cursor], false));
            }
            spans.push((&text[cursor..end], true));
            cursor = end;
            plain_start = end;
        } else {
            cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if plain_start < text.len() {
        spans.push((&text[plain_start..], false));
    }
    spans
}

/// Wrap every match of `query` in `text` with `open` and `close`
pub fn highlight(text: &str, query: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (run, hit) in highlight_spans(text, query) {
        if hit {
            out.push_str(open);
            out.push_str(run);
            out.push_str(close);
        } else {
            out.push_str(run);
        }
    }
    out
}

/// Byte offset where a match of the folded `needle` starting at `start`
/// ends, if there is one
fn match_end(text: &str, start: usize, needle: &str) -> Option<usize> {
    let mut folded = String::new();
    for (offset, c) in text[start..].char_indices() {
        folded.extend(c.to_lowercase());
        if folded.starts_with(needle) {
            return Some(start + offset + c.len_utf8());
        }
        if !needle.starts_with(folded.as_str()) {
            return None;
        }
    }
    None
}
