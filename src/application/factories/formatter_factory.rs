use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DocumentFormatter;

/// Factory for creating document formatters
///
/// Keeps adapter selection out of the CLI entry point.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for `format`
    ///
    /// `pretty` only affects JSON output.
    ///
    /// # Examples
    /// ```
    /// use sbom_model::application::dto::OutputFormat;
    /// use sbom_model::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, true);
    /// ```
    pub fn create(format: OutputFormat, pretty: bool) -> Box<dyn DocumentFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new(pretty)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for `format`
    ///
    /// # Examples
    /// ```
    /// use sbom_model::application::dto::OutputFormat;
    /// use sbom_model::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Encoding records as JSON...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Encoding records as JSON...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
        }
    }
}
