use thiserror::Error;

/// Errors that abort a whole import call.
///
/// Per-entry problems (one corrupt ZIP member, one malformed JSON record,
/// a record without a name) are not represented here; they are collected
/// as messages in [`ImportReport`](crate::model::ImportReport) while the
/// remaining entries keep processing.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Input buffer is too short or matches no supported format
    #[error("not a recognized recipe archive")]
    InvalidFile,

    /// Archive was readable but contained no usable recipe records
    #[error("no recipes found in archive")]
    NoRecipesFound,

    /// Gzip member header or footer is structurally invalid
    #[error("invalid gzip data: {0}")]
    InvalidGzipData(String),

    /// A DEFLATE stream could not be decompressed
    #[error("decompression failed: {0}")]
    DecompressionFailed(String),

    /// Failed to read the archive file (binary only)
    #[error("failed to read archive: {0}")]
    Io(#[from] std::io::Error),
}
