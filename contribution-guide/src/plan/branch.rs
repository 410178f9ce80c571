//! Branch name suggestions.

use bstr::ByteSlice;

/// Longest slug taken from the issue title.
const MAX_SLUG_LEN: usize = 40;

/// Suggests a git branch name for an issue, e.g. `issue-42-fix-typo-in-readme`.
///
/// The title is lowercased and reduced to ASCII alphanumerics separated by
/// single hyphens. If the result is not a valid git reference name the plain
/// `issue-<number>` form is returned.
#[must_use]
pub fn suggest_branch_name(number: u64, title: &str) -> String {
    let fallback = format!("issue-{number}");
    let slug = slugify(title);
    if slug.is_empty() {
        return fallback;
    }

    let candidate = format!("{fallback}-{slug}");
    match gix_validate::reference::name_partial(candidate.as_bytes().as_bstr()) {
        Ok(_) => candidate,
        Err(_) => fallback,
    }
}

fn slugify(title: &str) -> String {
    let mut slug = String::new();
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
    }
    slug.trim_end_matches('-').to_string()
}
