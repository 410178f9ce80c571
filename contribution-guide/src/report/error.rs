//! Report rendering error types.

/// Errors that can occur while rendering or writing the guide.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Template registration error.
    #[error("Template registration error: {0}")]
    RegistrationError(#[from] Box<handlebars::TemplateError>),

    /// Failed to read a template or write the report.
    #[error("Failed to access '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
