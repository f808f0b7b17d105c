//! Inspection report pipeline: assemble a [`document::ReportDocument`], lay it out
//! and render it as PDF or DOCX.

pub mod document;
pub mod docx;
pub mod layout;
pub mod metrics;
pub mod pdf;

use chrono::{DateTime, Utc};

use crate::server::error::report::ReportError;
use document::ReportDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pdf,
    Docx,
}

impl ReportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }

    pub fn render(self, doc: &ReportDocument) -> Result<Vec<u8>, ReportError> {
        match self {
            Self::Pdf => pdf::render(doc),
            Self::Docx => docx::render(doc),
        }
    }
}

/// Rendered report ready to be sent as an attachment.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: &'static str,
}

/// `vistoria_<id>_<timestamp>.<ext>`, timestamp in ISO 8601 without `:` and `.`.
pub fn file_name(vistoria_id: &str, format: ReportFormat, now: DateTime<Utc>) -> String {
    format!(
        "vistoria_{}_{}.{}",
        vistoria_id,
        now.format("%Y-%m-%dT%H%M%S%3fZ"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn builds_attachment_file_name() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap()
            + chrono::Duration::milliseconds(42);

        assert_eq!(
            file_name("Vistoria1a2b", ReportFormat::Pdf, now),
            "vistoria_Vistoria1a2b_2024-03-05T140709042Z.pdf"
        );
        assert_eq!(
            file_name("V", ReportFormat::Docx, now),
            "vistoria_V_2024-03-05T140709042Z.docx"
        );
    }
}
