//! Markdown section lookup by heading.

enum ScanState {
    Searching,
    Capturing(Vec<String>),
}

/// Returns the first non-empty block of text that follows a markdown heading
/// whose title contains a word starting with one of `headings`
/// (case-insensitive). `install` matches "Installation" but not "Uninstalling".
///
/// The block runs until the next heading of any level or the end of the text.
/// Lines inside fenced code are never treated as headings, so a shell comment
/// such as `# install deps` inside a code block does not start or end a
/// section. A matching heading with an empty body is skipped in favor of the
/// next match.
#[must_use]
pub fn find_section<S: AsRef<str>>(text: &str, headings: &[S]) -> Option<String> {
    let wanted: Vec<String> = headings
        .iter()
        .map(|h| h.as_ref().trim().to_lowercase())
        .filter(|h| !h.is_empty())
        .collect();
    if wanted.is_empty() {
        return None;
    }

    let matches_wanted = |title: &str| -> bool {
        let title = title.to_lowercase();
        wanted.iter().any(|w| starts_a_word(&title, w))
    };

    let mut state = ScanState::Searching;
    let mut in_fence = false;

    for line in text.lines() {
        let heading = if in_fence { None } else { heading_title(line) };
        if is_fence(line) {
            in_fence = !in_fence;
        }

        state = match (state, heading) {
            (ScanState::Searching, Some(title)) if matches_wanted(title) => {
                ScanState::Capturing(Vec::new())
            }
            (ScanState::Searching, _) => ScanState::Searching,
            (ScanState::Capturing(lines), Some(title)) => {
                if let Some(section) = finish(&lines) {
                    return Some(section);
                }
                if matches_wanted(title) {
                    ScanState::Capturing(Vec::new())
                } else {
                    ScanState::Searching
                }
            }
            (ScanState::Capturing(mut lines), None) => {
                lines.push(line.to_string());
                ScanState::Capturing(lines)
            }
        };
    }

    match state {
        ScanState::Capturing(lines) => finish(&lines),
        ScanState::Searching => None,
    }
}

/// True if `needle` occurs in `haystack` at the start of a word.
fn starts_a_word(haystack: &str, needle: &str) -> bool {
    haystack
        .match_indices(needle)
        .any(|(at, _)| !haystack[..at].chars().next_back().is_some_and(char::is_alphanumeric))
}

/// Returns the heading title if `line` is an ATX heading (`#` to `######`).
fn heading_title(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if line.len() - trimmed.len() > 3 {
        return None;
    }

    let level = trimmed.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }

    let rest = &trimmed[level..];
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return None;
    }

    Some(rest.trim().trim_end_matches('#').trim_end())
}

fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

fn finish(lines: &[String]) -> Option<String> {
    let section = lines.join("\n");
    let section = section.trim();
    (!section.is_empty()).then(|| section.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETUP: &[&str] = &["install", "setup", "getting started"];

    #[test]
    fn captures_until_next_heading() {
        let readme = "# Widget\nIntro.\n\n## Installation\n\nRun `cargo install widget`.\n\n## Usage\nUse it.";
        assert_eq!(
            find_section(readme, SETUP).as_deref(),
            Some("Run `cargo install widget`.")
        );
    }

    #[test]
    fn heading_match_is_case_insensitive() {
        let readme = "### GETTING STARTED ###\nClone the repo.";
        assert_eq!(find_section(readme, SETUP).as_deref(), Some("Clone the repo."));
    }

    #[test]
    fn code_comments_are_not_headings() {
        let readme = "## Setup\n```sh\n# install deps\nnpm ci\n```\n## License\nMIT";
        assert_eq!(
            find_section(readme, SETUP).as_deref(),
            Some("```sh\n# install deps\nnpm ci\n```")
        );
    }

    #[test]
    fn skips_empty_matching_section() {
        let readme = "## Install\n\n## Setup\nmake setup";
        assert_eq!(find_section(readme, SETUP).as_deref(), Some("make setup"));
    }

    #[test]
    fn missing_section_yields_none() {
        assert_eq!(find_section("# Title\nNothing here.", SETUP), None);
        assert_eq!(find_section("", SETUP), None);
        assert_eq!(find_section("## Install\nsteps", &[] as &[&str]), None);
    }

    #[test]
    fn heading_must_start_with_the_word() {
        let readme = "## Uninstalling\nrm -rf ~/.widget\n\n## Quick install\ncargo install widget";
        assert_eq!(
            find_section(readme, SETUP).as_deref(),
            Some("cargo install widget")
        );
        assert_eq!(find_section("## Reinstall\nagain", SETUP), None);
    }

    #[test]
    fn hashtags_are_not_headings() {
        assert_eq!(find_section("#install\nnot a heading", SETUP), None);
    }
}
