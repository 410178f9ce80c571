//! Guide renderer.

use super::ReportError;
use crate::analysis::{ContributionGuide, GuideEntry};
use crate::profile::RepositoryProfile;
use handlebars::{
    handlebars_helper, no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext,
};
use serde_json::{json, Value};
use std::path::Path;

/// Name the guide template is registered under.
const GUIDE_TEMPLATE: &str = "guide";

/// Built-in markdown template.
pub const DEFAULT_TEMPLATE: &str = include_str!("guide.md.hbs");

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
/// - `eq`, `join` and `signed` helpers
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);

    hbs.register_helper("eq", Box::new(eq_helper));
    hbs.register_helper("join", Box::new(join));
    hbs.register_helper("signed", Box::new(signed));

    hbs
}

/// Helper function for equality comparison in templates.
///
/// Usage: `{{#if (eq category "bug")}}...{{/if}}`
fn eq_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param1 = h.param(0).and_then(|v| v.value().as_str());
    let param2 = h.param(1).and_then(|v| v.value().as_str());

    let result = match (param1, param2) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    out.write(if result { "true" } else { "" })?;
    Ok(())
}

// `{{join items ", "}}`
handlebars_helper!(join: |items: array, separator: str| {
    items
        .iter()
        .filter_map(Value::as_str)
        .collect::<Vec<_>>()
        .join(separator)
});

// `{{signed delta}}` renders `+2` / `-1`.
handlebars_helper!(signed: |n: i64| format!("{n:+}"));

/// Renders a [`ContributionGuide`] to markdown.
pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
}

impl ReportRenderer {
    /// Creates a renderer using the built-in template.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in template fails to register.
    pub fn new() -> Result<Self, ReportError> {
        Self::with_template(DEFAULT_TEMPLATE)
    }

    /// Creates a renderer from template source.
    ///
    /// # Errors
    ///
    /// Returns an error if the template does not parse.
    pub fn with_template(template: &str) -> Result<Self, ReportError> {
        let mut handlebars = create_handlebars_registry();
        handlebars
            .register_template_string(GUIDE_TEMPLATE, template)
            .map_err(Box::new)?;
        Ok(Self { handlebars })
    }

    /// Creates a renderer from a template file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_template_file(path: &Path) -> Result<Self, ReportError> {
        let template = std::fs::read_to_string(path).map_err(|e| ReportError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::with_template(&template)
    }

    /// Renders the guide.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails, e.g. a custom template references
    /// a variable that does not exist.
    pub fn render(&self, guide: &ContributionGuide) -> Result<String, ReportError> {
        let data = guide_data(guide);
        Ok(self.handlebars.render(GUIDE_TEMPLATE, &data)?)
    }
}

/// Template data for the guide. Every key is always present so templates
/// work in strict mode.
fn guide_data(guide: &ContributionGuide) -> Value {
    let issues: Vec<Value> = guide
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| issue_data(index + 1, entry))
        .collect();

    json!({
        "repository": repository_data(&guide.profile),
        "issue_count": issues.len(),
        "warning_count": guide.warnings().count(),
        "issues": issues,
    })
}

fn repository_data(profile: &RepositoryProfile) -> Value {
    json!({
        "name": profile.name,
        "description": profile.description.as_deref().unwrap_or(""),
        "primary_language": profile.primary_language.as_deref().unwrap_or("unknown"),
        "top_contributors": profile.top_contributors,
        "has_readme": profile.has_readme,
        "has_contributing": profile.has_contributing,
        "has_ci_config": profile.has_ci_config,
        "ci_providers": profile.ci_providers,
        "community_files": profile.community_files,
        "coding_standards": profile.coding_standards,
        "dependency_files": profile.dependency_files,
        "issue_templates": profile.issue_templates,
        "important_files": profile.important_files,
        "has_setup_instructions": profile.setup_instructions.is_found(),
        "setup_instructions": profile.setup_instructions.as_str(),
        "has_contribution_guidelines": profile.contribution_guidelines.is_found(),
        "contribution_guidelines": profile.contribution_guidelines.as_str(),
    })
}

fn issue_data(rank: usize, entry: &GuideEntry) -> Value {
    let scored = &entry.issue;
    let labels: Vec<&String> = scored.issue.labels.iter().flatten().collect();
    let adjustments: Vec<Value> = scored
        .adjustments
        .iter()
        .map(|a| json!({ "delta": a.delta, "reason": a.reason }))
        .collect();
    let steps: Vec<Value> = entry
        .plan
        .steps
        .iter()
        .map(|s| json!({ "ordinal": s.ordinal, "text": s.text }))
        .collect();
    let warnings: Vec<String> = scored.warnings.iter().map(ToString::to_string).collect();

    json!({
        "rank": rank,
        "number": scored.number(),
        "title": scored.issue.title,
        "category": scored.category.as_str(),
        "score": scored.score,
        "labels": labels,
        "adjustments": adjustments,
        "referenced_files": scored.referenced_files,
        "known_files": scored.known_files,
        "related_tests": scored.related_tests,
        "has_snippets": !scored.code_snippets.is_empty(),
        "snippet_count": scored.code_snippets.len(),
        "max_complexity": scored.max_snippet_complexity.unwrap_or(0),
        "warnings": warnings,
        "branch_name": entry.plan.branch_name,
        "steps": steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::config::AnalysisConfig;
    use crate::issues::RawIssue;
    use crate::profile::RepositoryFacts;

    fn sample_guide() -> ContributionGuide {
        let facts = RepositoryFacts {
            name: "widget".to_string(),
            description: Some("Widgets & <gadgets>".to_string()),
            files: Some(vec!["README.md".to_string(), "tests/it.rs".to_string()]),
            languages: [("Rust".to_string(), 100)].into_iter().collect(),
            readme: Some("# Widget\n\n## Setup\n\nRun `cargo build`.\n".to_string()),
            contributors: vec!["alice".to_string(), "bob".to_string()],
            ..RepositoryFacts::default()
        };
        let issues = vec![
            RawIssue::new(1, "License", "Please add a LICENSE file, see README.md line 178"),
            RawIssue::new(2, "Crash", "```\nif x { panic!() }\n```").with_label("bug"),
        ];
        analyze(&facts, &issues, &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn renders_default_template() {
        let renderer = ReportRenderer::new().unwrap();
        let output = renderer.render(&sample_guide()).unwrap();

        assert!(output.starts_with("# Contributing to widget"));
        assert!(output.contains("> Widgets & <gadgets>"));
        assert!(output.contains("- **Primary language:** Rust"));
        assert!(output.contains("- **Top contributors:** alice, bob"));
        assert!(output.contains("Run `cargo build`."));
        assert!(output.contains("### 1. #1: License"));
        assert!(output.contains("- **Approachability:** 8/10"));
        assert!(output.contains("+2 references 1 file(s)"));
        assert!(output.contains("### 2. #2: Crash"));
        assert!(output.contains("5. Reproduce the bug"));
        assert!(output.contains("- **Code snippets:** 1 (max complexity 2)"));
    }

    #[test]
    fn renders_layout_files_and_related_tests() {
        let facts = RepositoryFacts {
            name: "widget".to_string(),
            files: Some(
                [
                    "Cargo.toml",
                    "LICENSE",
                    ".github/ISSUE_TEMPLATE/bug_report.md",
                    "src/render.rs",
                    "tests/render.rs",
                ]
                .iter()
                .map(|f| f.to_string())
                .collect(),
            ),
            ..RepositoryFacts::default()
        };
        let issues =
            vec![RawIssue::new(3, "Render glitch", "see src/render.rs").with_label("bug")];
        let guide = analyze(&facts, &issues, &AnalysisConfig::default()).unwrap();
        let output = ReportRenderer::new().unwrap().render(&guide).unwrap();

        assert!(output.contains("- **Key files:** LICENSE\n"));
        assert!(output.contains("- **Dependencies declared in:** Cargo.toml (Rust)"));
        assert!(output.contains("- **Issue templates:** bug_report"));
        assert!(output.contains("- **Related tests:** tests/render.rs"));
    }

    #[test]
    fn renders_not_found_sections() {
        let facts = RepositoryFacts {
            name: "bare".to_string(),
            files: Some(Vec::new()),
            ..RepositoryFacts::default()
        };
        let guide = analyze(&facts, &[], &AnalysisConfig::default()).unwrap();
        let output = ReportRenderer::new().unwrap().render(&guide).unwrap();

        assert!(output.contains("## Getting set up\n\nnot found"));
        assert!(output.contains("No open issues matched"));
    }

    #[test]
    fn custom_template_with_helpers() {
        let template = r#"{{#each issues}}{{number}}:{{#if (eq category "bug")}}bug{{else}}other{{/if}};{{/each}}"#;
        let renderer = ReportRenderer::with_template(template).unwrap();

        assert_eq!(renderer.render(&sample_guide()).unwrap(), "1:other;2:bug;");
    }

    #[test]
    fn strict_mode_rejects_unknown_variables() {
        let renderer = ReportRenderer::with_template("{{does_not_exist}}").unwrap();
        assert!(matches!(
            renderer.render(&sample_guide()),
            Err(ReportError::RenderError(_))
        ));
    }

    #[test]
    fn loads_template_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.hbs");
        std::fs::write(&path, "{{repository.name}} has {{issue_count}} issues").unwrap();

        let renderer = ReportRenderer::from_template_file(&path).unwrap();
        assert_eq!(
            renderer.render(&sample_guide()).unwrap(),
            "widget has 2 issues"
        );
    }

    #[test]
    fn missing_template_file_is_io_error() {
        let result = ReportRenderer::from_template_file(Path::new("/nonexistent/guide.hbs"));
        assert!(matches!(result, Err(ReportError::IoError { .. })));
    }
}
