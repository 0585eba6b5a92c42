//! Fixed-width line wrapping for the reading pane.

use std::collections::VecDeque;
use std::str::Lines;

/// Wrap `text` into display lines at most `width` characters wide.
///
/// Semantics match the reading pane contract:
/// - each tab expands to four spaces,
/// - lines longer than `width` are hard-split into consecutive chunks
///   with no word-boundary awareness,
/// - an empty source line yields one empty display line.
///
/// The returned iterator is lazy (one source line is expanded at a time)
/// and restartable by calling `wrap_body` again. A zero width yields no
/// lines.
pub fn wrap_body(text: &str, width: usize) -> WrappedLines<'_> {
    WrappedLines {
        source: text.lines(),
        width,
        pending: VecDeque::new(),
    }
}

pub struct WrappedLines<'a> {
    source: Lines<'a>,
    width: usize,
    pending: VecDeque<String>,
}

impl WrappedLines<'_> {
    fn split_line(&mut self, line: &str) {
        let expanded = line.replace('\t', "    ");
        if expanded.is_empty() {
            self.pending.push_back(String::new());
            return;
        }

        let chars: Vec<char> = expanded.chars().collect();
        for chunk in chars.chunks(self.width) {
            self.pending.push_back(chunk.iter().collect());
        }
    }
}

impl Iterator for WrappedLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.width == 0 {
            return None;
        }
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(line);
            }
            let line = self.source.next()?;
            self.split_line(line);
        }
    }
}
