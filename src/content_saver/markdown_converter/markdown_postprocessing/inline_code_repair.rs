//! Inline code that the converter emitted as a fenced block.
//!
//! Two shapes are repaired:
//!
//! - an untagged block holding a single non-blank line, optionally padded by
//!   blank lines, becomes an inline span on its own line
//! - a block opened at the end of a text line (`Run the ```` + newline +
//!   `make` + newline + ```` ``` to build`) is joined back into the
//!   surrounding sentence
//!
//! Tagged blocks are never inlined.

use super::code_fence_detection::{find_closing_fence, parse_fence_line};

/// Repair misclassified and broken inline code.
pub fn repair_inline_code(markdown: &str) -> String {
    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut output: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if let Some(fence) = parse_fence_line(line) {
            let open = fence.open_at(i);
            let Some(close) = find_closing_fence(&lines, &open, i + 1) else {
                // Unclosed block runs to the end of the document
                output.extend(lines[i..].iter().map(|l| (*l).to_string()));
                break;
            };

            if fence.is_bare()
                && let Some(code) = single_code_line(&lines[i + 1..close])
            {
                output.push(format!("{}`{}`", fence.indent, code));
            } else {
                output.extend(lines[i..=close].iter().map(|l| (*l).to_string()));
            }
            i = close + 1;
            continue;
        }

        if let Some(prefix) = trailing_inline_opener(line)
            && let Some((code, suffix, closer)) = broken_inline_tail(&lines, i + 1)
        {
            output.push(format!("{prefix}`{code}`{suffix}"));
            i = closer + 1;
            continue;
        }

        output.push(line.to_string());
        i += 1;
    }

    output.join("\n")
}

/// The only non-blank line of a block body, trimmed, if it holds no backtick.
fn single_code_line(body: &[&str]) -> Option<String> {
    let mut non_blank = body.iter().filter(|l| !l.trim().is_empty());
    let only = non_blank.next()?;
    if non_blank.next().is_some() || only.contains('`') {
        return None;
    }
    Some(only.trim().to_string())
}

/// Text before a line-final triple backtick, when that is all the backticks
/// the line contains.
fn trailing_inline_opener(line: &str) -> Option<&str> {
    let trimmed = line.trim_end();
    let prefix = trimmed.strip_suffix("```")?;
    if prefix.trim().is_empty() || prefix.contains('`') {
        return None;
    }
    Some(prefix)
}

/// Match `blank* code blank* ```suffix` starting at `from`.
///
/// Returns the trimmed code, the text following the closing backticks, and
/// the index of the closing line.
fn broken_inline_tail<'a>(lines: &[&'a str], from: usize) -> Option<(&'a str, &'a str, usize)> {
    let mut idx = from;
    while lines.get(idx).is_some_and(|l| l.trim().is_empty()) {
        idx += 1;
    }

    let code = lines.get(idx)?.trim();
    if code.contains('`') {
        return None;
    }
    idx += 1;

    while lines.get(idx).is_some_and(|l| l.trim().is_empty()) {
        idx += 1;
    }

    let closer = lines.get(idx)?.trim_start();
    let suffix = closer.strip_prefix("```")?;
    // "```js" after the code is the next block's header, not a closer
    if suffix.contains('`') || suffix.chars().next().is_some_and(char::is_alphanumeric) {
        return None;
    }
    Some((code, suffix.trim_end(), idx))
}
