use crate::application::dto::{CodecResponse, DocumentOutcome, ProcessingMode};
use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;

/// Markdown table header for the document report
const TABLE_HEADER: &str = "| Source | Kind | Key | Status |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|--------|------|-----|--------|\n";

/// MarkdownFormatter adapter rendering one report row per document
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and line breaks for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|")
            .replace("\r\n", " ")
            .replace(['\r', '\n'], " ")
    }

    fn render_row(&self, output: &mut String, outcome: &DocumentOutcome) {
        let source = Self::escape_markdown_table_cell(&outcome.source.to_string());
        let row = match &outcome.result {
            Ok(record) => format!(
                "| {} | {} | {} | ✅ OK |\n",
                source,
                record.kind(),
                Self::escape_markdown_table_cell(record.display_key())
            ),
            Err(e) => format!(
                "| {} | - | - | ❌ {} |\n",
                source,
                Self::escape_markdown_table_cell(&e.to_string())
            ),
        };
        output.push_str(&row);
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for MarkdownFormatter {
    fn format(&self, response: &CodecResponse) -> Result<String> {
        let mut output = String::new();

        let title = match response.mode {
            ProcessingMode::Check => "# SBOM Document Check\n\n",
            ProcessingMode::Normalize => "# SBOM Document Normalization\n\n",
        };
        output.push_str(title);
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for outcome in &response.outcomes {
            self.render_row(&mut output, outcome);
        }

        output.push_str(&format!(
            "\n**Summary:** {} decoded, {} failed\n",
            response.decoded_count(),
            response.failed_count()
        ));

        Ok(output)
    }
}
