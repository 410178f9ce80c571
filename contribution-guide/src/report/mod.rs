//! Markdown rendering of the contribution guide.

mod error;
mod renderer;

pub use error::ReportError;
pub use renderer::{create_handlebars_registry, ReportRenderer, DEFAULT_TEMPLATE};

use std::path::Path;
use tracing::info;

/// Writes a rendered report, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ReportError::IoError`] if the directory or file cannot be written.
pub fn write_report(path: &Path, content: &str) -> Result<(), ReportError> {
    let io_error = |source| ReportError::IoError {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, content).map_err(io_error)?;

    info!(path = %path.display(), bytes = content.len(), "Wrote contribution guide");
    Ok(())
}
