//! Convergent cleanup of already-written Markdown.
//!
//! Each pass is a single structural walk over fence lines. A pass either
//! returns its input unchanged or a strictly shorter string, so repeating the
//! full sequence until nothing changes is bounded by the input length.

mod backtick_stripping;
mod code_fence_detection;
mod inline_code_repair;
mod nested_fences;


pub use backtick_stripping::strip_redundant_backticks;
pub use code_fence_detection::{CodeFence, FenceLine, detect_code_fence, parse_fence_line};
pub use inline_code_repair::repair_inline_code;
pub use nested_fences::{collapse_double_fences, collapse_nested_fences};

/// Run one round of every cleanup pass, in order.
fn clean_round(markdown: &str) -> String {
    let markdown = collapse_nested_fences(markdown);
    let markdown = collapse_double_fences(&markdown);
    let markdown = repair_inline_code(&markdown);
    strip_redundant_backticks(&markdown)
}

/// Normalize fence artifacts until the text stops changing.
///
/// The result is a fixed point: `post_process(&post_process(x)) == post_process(x)`.
#[must_use]
pub fn post_process(markdown: &str) -> String {
    let mut current = markdown.to_string();
    let mut rounds = 0usize;

    loop {
        let next = clean_round(&current);
        if next == current {
            break;
        }
        if next.len() >= current.len() {
            // Unreachable while every pass only shortens; stop rather than spin
            tracing::warn!(rounds, "Markdown cleanup stopped without shrinking");
            break;
        }
        current = next;
        rounds += 1;
    }

    if rounds > 0 {
        tracing::trace!(rounds, "Markdown cleanup converged");
    }
    current
}
