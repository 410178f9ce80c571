//! Text heuristics shared by the profile builder and the issue scorer.
//!
//! Every function here is pure: it never fails, and empty input yields an
//! empty result.

mod code_blocks;
mod complexity;
mod files;
mod keywords;
mod sections;

pub use code_blocks::extract_code_blocks;
pub use complexity::{estimate_complexity, exceeds_length};
pub use files::{extract_file_references, KNOWN_EXTENSIONS};
pub use keywords::{contains_any, keyword_hits, KeywordSet};
pub use sections::find_section;
