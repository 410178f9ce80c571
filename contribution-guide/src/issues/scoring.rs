//! Approachability score adjustments.
//!
//! The score starts at [`BASE_SCORE`], every entry of [`ADJUSTMENTS`] is
//! evaluated in order, and the sum is clamped to [`MIN_SCORE`]..=[`MAX_SCORE`]
//! once at the end.

use super::Category;
use crate::config::ScoringConfig;
use crate::heuristics::{exceeds_length, keyword_hits};
use crate::profile::RepositoryProfile;
use serde::Serialize;
use std::collections::BTreeSet;

/// Score every issue starts from.
pub const BASE_SCORE: i32 = 5;

/// Lowest possible score.
pub const MIN_SCORE: i32 = 0;

/// Highest possible score.
pub const MAX_SCORE: i32 = 10;

const DOCUMENTATION_BONUS: i32 = 2;
const REFERENCE_BONUS: i32 = 2;
const LONG_BODY_PENALTY: i32 = 1;
const SETUP_BONUS: i32 = 1;

/// A single score rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Adjustment {
    /// Documentation issues are usually easier.
    DocumentationBonus,
    /// The issue points at concrete files.
    ReferenceBonus,
    /// Each hard keyword costs a point, up to the configured cap.
    HardKeywordPenalty,
    /// Very long issues are harder to scope.
    LongBodyPenalty,
    /// The repository documents how to get started.
    SetupBonus,
}

/// Evaluation order of the score rules.
pub const ADJUSTMENTS: [Adjustment; 5] = [
    Adjustment::DocumentationBonus,
    Adjustment::ReferenceBonus,
    Adjustment::HardKeywordPenalty,
    Adjustment::LongBodyPenalty,
    Adjustment::SetupBonus,
];

/// Everything the score rules look at.
pub struct ScoreInputs<'a> {
    pub category: Category,
    pub title: &'a str,
    pub body: &'a str,
    pub references: &'a BTreeSet<String>,
    pub profile: &'a RepositoryProfile,
    pub config: &'a ScoringConfig,
    /// Malformed issues skip keyword-based adjustments.
    pub malformed: bool,
}

/// An adjustment that changed the score, kept for the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedAdjustment {
    pub adjustment: Adjustment,
    pub delta: i32,
    pub reason: String,
}

impl Adjustment {
    /// Returns the score delta and a human-readable reason, or `None` if the
    /// rule does not apply.
    fn evaluate(self, inputs: &ScoreInputs<'_>) -> Option<(i32, String)> {
        match self {
            Self::DocumentationBonus => (inputs.category == Category::Documentation)
                .then(|| (DOCUMENTATION_BONUS, "documentation issue".to_string())),
            Self::ReferenceBonus => (!inputs.references.is_empty()).then(|| {
                (
                    REFERENCE_BONUS,
                    format!("references {} file(s)", inputs.references.len()),
                )
            }),
            Self::HardKeywordPenalty => {
                if inputs.malformed {
                    return None;
                }
                let text = format!("{}\n{}", inputs.title, inputs.body);
                let hits = keyword_hits(&text, &inputs.config.hard_keywords);
                let capped = u32::try_from(hits)
                    .unwrap_or(u32::MAX)
                    .min(inputs.config.hard_keyword_cap);
                (capped > 0).then(|| {
                    (
                        -i32::try_from(capped).unwrap_or(i32::MAX),
                        format!("{hits} hard keyword(s)"),
                    )
                })
            }
            Self::LongBodyPenalty => exceeds_length(inputs.body, inputs.config.long_body_threshold)
                .then(|| {
                    (
                        -LONG_BODY_PENALTY,
                        format!(
                            "body longer than {} characters",
                            inputs.config.long_body_threshold
                        ),
                    )
                }),
            Self::SetupBonus => inputs
                .profile
                .setup_instructions
                .is_found()
                .then(|| (SETUP_BONUS, "repository has setup instructions".to_string())),
        }
    }
}

/// Computes the clamped score and the list of adjustments that applied.
#[must_use]
pub fn compute_score(inputs: &ScoreInputs<'_>) -> (u8, Vec<AppliedAdjustment>) {
    let mut raw = BASE_SCORE;
    let mut applied = Vec::new();

    for adjustment in ADJUSTMENTS {
        if let Some((delta, reason)) = adjustment.evaluate(inputs) {
            raw += delta;
            applied.push(AppliedAdjustment {
                adjustment,
                delta,
                reason,
            });
        }
    }

    let clamped = raw.clamp(MIN_SCORE, MAX_SCORE);
    (u8::try_from(clamped).unwrap_or(0), applied)
}
