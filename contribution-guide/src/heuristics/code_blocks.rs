//! Markdown code-block extraction.

/// Where the scanner currently is while walking lines.
enum BlockState {
    /// Regular prose.
    Text { previous_blank: bool },
    /// Inside a fenced block opened by `fence` (e.g. "```" or "~~~~").
    Fenced { fence: String, lines: Vec<String> },
    /// Inside an indented block.
    Indented { lines: Vec<String> },
}

/// Extracts fenced and indented code blocks from markdown text, in document order.
///
/// Fences are runs of three or more backticks or tildes; a block closes on a
/// fence of the same character at least as long as the opener. An unclosed
/// fence runs to the end of the text. Indented blocks are lines starting with
/// four spaces or a tab that follow a blank line (or the start of the text).
/// Blocks that contain only whitespace are dropped.
#[must_use]
pub fn extract_code_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut state = BlockState::Text {
        previous_blank: true,
    };

    for line in text.lines() {
        state = match state {
            BlockState::Text { previous_blank } => {
                if let Some(fence) = opening_fence(line) {
                    BlockState::Fenced {
                        fence,
                        lines: Vec::new(),
                    }
                } else if let Some(content) = indented_content(line).filter(|_| previous_blank) {
                    BlockState::Indented {
                        lines: vec![content.to_string()],
                    }
                } else {
                    BlockState::Text {
                        previous_blank: line.trim().is_empty(),
                    }
                }
            }
            BlockState::Fenced { fence, mut lines } => {
                if closes_fence(line, &fence) {
                    push_block(&mut blocks, &lines);
                    BlockState::Text {
                        previous_blank: false,
                    }
                } else {
                    lines.push(line.to_string());
                    BlockState::Fenced { fence, lines }
                }
            }
            BlockState::Indented { mut lines } => {
                if let Some(content) = indented_content(line) {
                    lines.push(content.to_string());
                    BlockState::Indented { lines }
                } else if line.trim().is_empty() {
                    lines.push(String::new());
                    BlockState::Indented { lines }
                } else {
                    push_block(&mut blocks, &lines);
                    match opening_fence(line) {
                        Some(fence) => BlockState::Fenced {
                            fence,
                            lines: Vec::new(),
                        },
                        None => BlockState::Text {
                            previous_blank: false,
                        },
                    }
                }
            }
        };
    }

    match state {
        BlockState::Fenced { lines, .. } | BlockState::Indented { lines } => {
            push_block(&mut blocks, &lines);
        }
        BlockState::Text { .. } => {}
    }

    blocks
}

/// Returns the fence marker if `line` opens a fenced block.
fn opening_fence(line: &str) -> Option<String> {
    let trimmed = line.trim_start();
    if line.len() - trimmed.len() > 3 {
        return None;
    }

    let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let fence: String = trimmed.chars().take_while(|c| *c == marker).collect();
    (fence.len() >= 3).then_some(fence)
}

/// Returns true if `line` closes a block opened with `fence`.
fn closes_fence(line: &str, fence: &str) -> bool {
    let trimmed = line.trim();
    let Some(marker) = fence.chars().next() else {
        return false;
    };

    trimmed.len() >= fence.len() && trimmed.chars().all(|c| c == marker)
}

/// Returns the content of an indented code line, without its indentation.
fn indented_content(line: &str) -> Option<&str> {
    line.strip_prefix("    ")
        .or_else(|| line.strip_prefix('\t'))
        .filter(|content| !content.trim().is_empty())
}

fn push_block(blocks: &mut Vec<String>, lines: &[String]) {
    let block = lines.join("\n");
    let block = block.trim_end();
    if !block.trim().is_empty() {
        blocks.push(block.to_string());
    }
}
