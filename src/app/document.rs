//! The text shown in the window, and word wrapping for it.

use std::path::Path;

use anyhow::Context;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Heading shown above the document body.
pub const HEADING: &str = "Terms of Use";

/// Bundled sample terms, used when no file is given on the command line.
const BUNDLED_TERMS: &str = include_str!("../../assets/terms.txt");

/// Read the document body from `path`, or fall back to the bundled text.
pub fn load_body(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("could not read terms from {}", path.display())),
        None => Ok(BUNDLED_TERMS.to_string()),
    }
}

/// Greedy word wrap to `width` terminal columns.
///
/// Widths are display widths, so double-width characters count as two
/// columns.  Each input line starts a new output line; blank input lines are
/// kept.  Words wider than `width` are hard-split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0usize;

        for mut word in paragraph.split_whitespace() {
            // Hard-split words that can never fit.
            while word.width() > width {
                if line_width > 0 {
                    out.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                let (head, rest) = split_at_width(word, width);
                if rest.is_empty() {
                    // A single character wider than the line.
                    break;
                }
                out.push(head.to_string());
                word = rest;
            }

            let word_width = word.width();
            let needed = if line_width == 0 { word_width } else { line_width + 1 + word_width };
            if needed > width && line_width > 0 {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }

        out.push(line);
    }

    out
}

/// Split `word` after the longest prefix that fits in `width` columns.  The
/// prefix always holds at least one character.
fn split_at_width(word: &str, width: usize) -> (&str, &str) {
    let mut used = 0usize;
    for (i, c) in word.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width && i > 0 {
            return word.split_at(i);
        }
        used += w;
    }
    (word, "")
}
