//! Stray backticks just inside a fenced block.
//!
//! Source that was already decorated with inline-code backticks sometimes ends
//! up fenced as well, producing a body like `` `let x = 1;` ``. The boundary
//! backticks are dropped so the fence is the only delimiter.

use super::code_fence_detection::{find_closing_fence, parse_fence_line};

/// Strip one boundary backtick from each end of every fenced block body that
/// has no other backtick.
pub fn strip_redundant_backticks(markdown: &str) -> String {
    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut output: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        output.push(line.to_string());

        let Some(fence) = parse_fence_line(line) else {
            i += 1;
            continue;
        };
        let open = fence.open_at(i);
        let Some(close) = find_closing_fence(&lines, &open, i + 1) else {
            output.extend(lines[i + 1..].iter().map(|l| (*l).to_string()));
            break;
        };

        let body = &lines[i + 1..close];
        match strip_body(body) {
            Some(stripped) => output.extend(stripped),
            None => output.extend(body.iter().map(|l| (*l).to_string())),
        }
        output.push(lines[close].to_string());
        i = close + 1;
    }

    output.join("\n")
}

fn strip_body(body: &[&str]) -> Option<Vec<String>> {
    let (first, last) = (*body.first()?, *body.last()?);

    if body.len() == 1 {
        let inner = first.strip_prefix('`')?.strip_suffix('`')?;
        if inner.contains('`') {
            return None;
        }
        return Some(vec![inner.to_string()]);
    }

    let head = first.strip_prefix('`')?;
    let tail = last.strip_suffix('`')?;
    let middle = &body[1..body.len() - 1];
    if head.contains('`') || tail.contains('`') || middle.iter().any(|l| l.contains('`')) {
        return None;
    }

    let mut stripped = Vec::with_capacity(body.len());
    stripped.push(head.to_string());
    stripped.extend(middle.iter().map(|l| (*l).to_string()));
    stripped.push(tail.to_string());
    Some(stripped)
}
