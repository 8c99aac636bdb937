//! Editor command glue.
//!
//! The host hands over its buffer and current selections; cleaning either the
//! selections or, when nothing is selected, the whole buffer. The result is a
//! single replacement buffer so the host can apply it as one undoable step.

use std::ops::Range;

use crate::config::Config;
use crate::error::{Error, Result};

/// What an editor command touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Nothing was selected; the whole buffer was cleaned.
    WholeBuffer,
    /// This many non-empty selections were cleaned.
    Selections(usize),
}

/// The outcome of one clean command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The full buffer after cleaning.
    pub buffer: String,
    /// Which part of the buffer was cleaned.
    pub scope: Scope,
}

impl Edit {
    /// Status-bar message for the host.
    #[must_use]
    pub fn status(&self) -> String {
        match self.scope {
            Scope::WholeBuffer => "HTML Cleaner: Cleaned entire file".to_string(),
            Scope::Selections(n) => format!("HTML Cleaner: Cleaned {n} selection(s)"),
        }
    }
}

/// Clean the selected regions of a buffer, or all of it.
///
/// Selections are byte ranges into `buffer`. With no selection, or a single
/// empty one (a caret), the whole buffer is cleaned. Otherwise each non-empty
/// selection is cleaned in place, last to first so earlier offsets stay valid.
///
/// # Errors
///
/// Returns `Error::InvalidSelection` when a range is inverted, runs past the
/// end of the buffer, splits a UTF-8 character, or overlaps another range. The
/// buffer is not modified in that case.
pub fn clean_buffer(buffer: &str, selections: &[Range<usize>], config: &Config) -> Result<Edit> {
    let caret_only = match selections {
        [] => true,
        [only] => only.is_empty() && only.start <= buffer.len(),
        _ => false,
    };
    if caret_only {
        log::debug!("no selection; cleaning entire buffer");
        return Ok(Edit {
            buffer: crate::clean(buffer, config),
            scope: Scope::WholeBuffer,
        });
    }

    let mut ranges = selections.to_vec();
    for range in &ranges {
        validate(buffer, range)?;
    }
    ranges.sort_by_key(|range| range.start);
    for pair in ranges.windows(2) {
        if pair[1].start < pair[0].end {
            return Err(invalid(&pair[1], "overlaps another selection"));
        }
    }

    let mut out = buffer.to_string();
    let mut cleaned = 0;
    for range in ranges.iter().rev().filter(|range| !range.is_empty()) {
        let replacement = crate::clean(&buffer[range.clone()], config);
        out.replace_range(range.clone(), &replacement);
        cleaned += 1;
    }
    log::debug!("cleaned {cleaned} selection(s)");

    Ok(Edit {
        buffer: out,
        scope: Scope::Selections(cleaned),
    })
}

fn validate(buffer: &str, range: &Range<usize>) -> Result<()> {
    if range.start > range.end {
        return Err(invalid(range, "start is after end"));
    }
    if range.end > buffer.len() {
        return Err(invalid(range, "extends past the end of the buffer"));
    }
    if !buffer.is_char_boundary(range.start) || !buffer.is_char_boundary(range.end) {
        return Err(invalid(range, "splits a character"));
    }
    Ok(())
}

fn invalid(range: &Range<usize>, reason: &'static str) -> Error {
    Error::InvalidSelection {
        start: range.start,
        end: range.end,
        reason,
    }
}
