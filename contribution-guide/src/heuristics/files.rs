//! File-path extraction from free text.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use url::Url;

/// File extensions that mark a bare token (no path separator) as a file reference.
pub const KNOWN_EXTENSIONS: &[&str] = &[
    "bat", "c", "cc", "cfg", "cmake", "conf", "cpp", "cs", "css", "dart", "ex", "exs", "go",
    "gradle", "h", "hpp", "hs", "html", "ini", "ipynb", "java", "js", "json", "jsx", "kt", "kts",
    "lock", "lua", "md", "mdx", "mjs", "ml", "php", "pl", "proto", "ps1", "py", "pyi", "r", "rb",
    "rs", "rst", "scala", "scss", "sh", "sql", "svelte", "swift", "toml", "ts", "tsx", "txt",
    "vue", "xml", "yaml", "yml", "zig",
];

/// Library and product names that look like file names but almost never are.
const PRODUCT_NAMES: &[&str] = &[
    "chart.js", "d3.js", "express.js", "next.js", "node.js", "nuxt.js", "react.js", "three.js",
    "vue.js",
];

/// Longest extension accepted when it is not in [`KNOWN_EXTENSIONS`].
const MAX_UNKNOWN_EXTENSION_LEN: usize = 5;

/// Hosts whose URLs point at files inside a repository.
const GITHUB_HOST: &str = "github.com";
const GITHUB_RAW_HOST: &str = "raw.githubusercontent.com";

lazy_static! {
    static ref URL_RE: Result<Regex, regex::Error> = Regex::new(r#"https?://[^\s<>()\[\]"'`]+"#);
    static ref TOKEN_RE: Result<Regex, regex::Error> = Regex::new(r"[A-Za-z0-9_\-./\\]+");
}

/// Extracts unique path-like substrings from `text`.
///
/// A token counts as a file reference when its final segment carries one of
/// the [`KNOWN_EXTENSIONS`], or when it contains a path separator and its final
/// segment has a short lowercase extension after a non-numeric stem. GitHub `blob`/`tree` and raw-content URLs
/// contribute the repository path they point at; other URLs are ignored.
///
/// Results are sorted so that repeated runs produce identical output.
#[must_use]
pub fn extract_file_references(text: &str) -> BTreeSet<String> {
    let mut references = BTreeSet::new();
    if text.is_empty() {
        return references;
    }

    let (url_re, token_re) = match (URL_RE.as_ref(), TOKEN_RE.as_ref()) {
        (Ok(url_re), Ok(token_re)) => (url_re, token_re),
        _ => return references,
    };

    for found in url_re.find_iter(text) {
        if let Some(path) = path_from_url(found.as_str()) {
            references.insert(path);
        }
    }

    let without_urls = url_re.replace_all(text, " ");
    for token in token_re.find_iter(&without_urls) {
        if let Some(path) = normalize_candidate(token.as_str()) {
            references.insert(path);
        }
    }

    references
}

/// Maps a GitHub file URL to the path inside the repository.
fn path_from_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim_end_matches(['.', ',', ';', ':', '!', '?']);
    let url = Url::parse(trimmed).ok()?;
    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();

    let path_segments = match url.host_str()? {
        // github.com/{owner}/{repo}/blob/{ref}/{path...}
        GITHUB_HOST if segments.len() > 4 && matches!(segments[2], "blob" | "tree") => {
            &segments[4..]
        }
        // raw.githubusercontent.com/{owner}/{repo}/{ref}/{path...}
        GITHUB_RAW_HOST if segments.len() > 3 => &segments[3..],
        _ => return None,
    };

    normalize_candidate(&path_segments.join("/"))
}

/// Cleans up a raw token and returns it if it has a file-path shape.
fn normalize_candidate(raw: &str) -> Option<String> {
    let mut candidate = raw.replace('\\', "/");
    while let Some(rest) = candidate.strip_prefix("./") {
        candidate = rest.to_string();
    }
    let candidate = candidate.trim_start_matches('/').trim_end_matches('.');

    if candidate.is_empty() || PRODUCT_NAMES.contains(&candidate.to_lowercase().as_str()) {
        return None;
    }

    let segments: Vec<&str> = candidate.split('/').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return None;
    }

    let file_name = segments.last()?;
    let (stem, extension) = file_name.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }

    if KNOWN_EXTENSIONS.contains(&extension.to_lowercase().as_str()) {
        return Some(candidate.to_string());
    }

    let has_separator = segments.len() > 1;
    (has_separator && looks_like_extension(extension) && !is_numeric(stem))
        .then(|| candidate.to_string())
}

/// Extensions outside the known list must be short lowercase text, not a bare
/// number. This rejects prose such as `input/output.Then`.
fn looks_like_extension(extension: &str) -> bool {
    (1..=MAX_UNKNOWN_EXTENSION_LEN).contains(&extension.len())
        && extension
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        && !is_numeric(extension)
}

fn is_numeric(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}
