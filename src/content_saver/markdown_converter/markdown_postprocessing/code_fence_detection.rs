//! Code fence detection and validation utilities.

/// Code fence state to track fence type and character count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeFence {
    pub char: char,         // '`' or '~'
    pub count: usize,       // Number of characters in the fence
    pub line_number: usize, // Line number where the fence opened
}

/// A line that is a fence header or closer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceLine<'a> {
    /// Leading whitespace before the fence characters
    pub indent: &'a str,
    pub char: char,
    pub count: usize,
    /// Trimmed info string (language tag), empty for a bare fence
    pub info: &'a str,
}

impl FenceLine<'_> {
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.info.is_empty()
    }

    /// True if this line closes a block opened by `open`
    #[must_use]
    pub fn closes(&self, open: &CodeFence) -> bool {
        self.is_bare() && self.char == open.char && self.count >= open.count
    }

    #[must_use]
    pub fn open_at(&self, line_number: usize) -> CodeFence {
        CodeFence {
            char: self.char,
            count: self.count,
            line_number,
        }
    }
}

/// Detect code fence marker at the start of a line
/// Returns Some((char, count)) if the line starts with 3+ backticks or tildes
pub fn detect_code_fence(line: &str) -> Option<(char, usize)> {
    let trimmed = line.trim_start();

    // Check for backticks
    if trimmed.starts_with('`') {
        let count = trimmed.chars().take_while(|&c| c == '`').count();
        if count >= 3 {
            return Some(('`', count));
        }
    }

    // Check for tildes
    if trimmed.starts_with('~') {
        let count = trimmed.chars().take_while(|&c| c == '~').count();
        if count >= 3 {
            return Some(('~', count));
        }
    }

    None
}

/// Parse a full fence line into its parts.
///
/// A backtick fence whose info string contains a backtick is an inline code
/// span on its own line, not a fence.
pub fn parse_fence_line(line: &str) -> Option<FenceLine<'_>> {
    let (ch, count) = detect_code_fence(line)?;
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];
    // Fence characters are ASCII, one byte each
    let info = trimmed[count..].trim();

    if ch == '`' && info.contains('`') {
        return None;
    }

    Some(FenceLine {
        indent,
        char: ch,
        count,
        info,
    })
}

/// Index of the first line at or after `from` that closes `open`
pub fn find_closing_fence(lines: &[&str], open: &CodeFence, from: usize) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, line)| parse_fence_line(line).is_some_and(|fence| fence.closes(open)))
        .map(|(idx, _)| idx)
}
