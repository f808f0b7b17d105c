use thiserror::Error;

/// Failures while rendering an inspection report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// PDF object serialization failed.
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// DOCX archive could not be written.
    #[error("DOCX archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Image could not be decoded.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
