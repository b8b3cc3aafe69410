//! Nested and doubled code fence repair.
//!
//! Converters that wrap an already-fenced snippet in a second fence leave
//! artifacts like:
//!
//! ```text
//! ```
//! ```csharp
//! var x = 1;
//! ```
//! ```
//! ```
//!
//! Only lines that open a block are considered, so a closing fence followed by
//! the next block's header is never mistaken for a nested pair.

use regex::Regex;
use std::sync::LazyLock;

use super::code_fence_detection::{CodeFence, parse_fence_line};

static BACKTICK_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"`{6,}").expect("BACKTICK_RUN: hardcoded regex is valid")
});

/// Collapse an opening fence that is immediately followed by a tagged fence
/// header down to the innermost header.
///
/// Handles both the tagged-outer (` ```a` then ` ```b`) and the bare-outer
/// (` ``` ` then ` ```b`) shapes, repeated for any run of stacked headers.
/// For each dropped header one surplus bare fence directly after the
/// repaired block's closer is also dropped.
pub fn collapse_nested_fences(markdown: &str) -> String {
    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut output: Vec<&str> = Vec::with_capacity(lines.len());

    let mut open: Option<CodeFence> = None;
    let mut surplus_closers = 0usize;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        match open {
            None => {
                let Some(fence) = parse_fence_line(line) else {
                    output.push(line);
                    i += 1;
                    continue;
                };

                // Skip every stacked header, keeping only the innermost one
                let mut header = i;
                while let Some(next) = lines.get(header + 1).and_then(|l| parse_fence_line(l)) {
                    if next.is_bare() || next.char != fence.char {
                        break;
                    }
                    header += 1;
                }

                let dropped = header - i;
                if dropped > 0 {
                    tracing::debug!(dropped, line = i + 1, "Collapsed nested fence headers");
                }
                surplus_closers = dropped;

                let inner = lines[header];
                output.push(inner);
                open = parse_fence_line(inner).map(|f| f.open_at(header));
                i = header + 1;
            }
            Some(current) => {
                output.push(line);
                i += 1;

                if parse_fence_line(line).is_some_and(|f| f.closes(&current)) {
                    open = None;

                    while surplus_closers > 0
                        && lines
                            .get(i)
                            .and_then(|l| parse_fence_line(l))
                            .is_some_and(|f| f.closes(&current))
                    {
                        surplus_closers -= 1;
                        i += 1;
                    }
                    surplus_closers = 0;
                }
            }
        }
    }

    output.join("\n")
}

/// Collapse any run of six or more backticks to a plain three-backtick fence.
pub fn collapse_double_fences(markdown: &str) -> String {
    BACKTICK_RUN.replace_all(markdown, "```").into_owned()
}
