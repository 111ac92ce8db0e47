//! Archive container handling.
//!
//! Export files come in three observed shapes: a ZIP of per-recipe
//! gzip-compressed JSON entries, one standalone gzip member, or bare
//! JSON. The container subset is narrow enough that the ZIP and gzip
//! layers parse the bytes directly instead of pulling in a full archive
//! library; only raw-DEFLATE decompression is delegated to `flate2`.

pub mod cursor;
pub mod gzip;
pub mod inflate;
pub mod zip;

use log::{debug, warn};

use crate::error::ImportError;

/// Smallest input worth classifying; anything shorter cannot even hold
/// a format signature plus content
const MIN_INPUT_LEN: usize = 4;

/// Top-level shape of the input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    /// ZIP container, one entry per recipe
    Zip,
    /// Single gzip member wrapping one JSON document
    Gzip,
    /// No container; the buffer is tried as JSON directly
    Json,
}

/// One extracted archive entry, alive only for the current import call.
#[derive(Debug, Clone)]
pub struct RawArchiveEntry {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Classify the input by its leading bytes.
pub fn detect(data: &[u8]) -> Result<ArchiveFormat, ImportError> {
    if data.len() < MIN_INPUT_LEN {
        return Err(ImportError::InvalidFile);
    }
    let format = match (data[0], data[1]) {
        (0x50, 0x4B) => ArchiveFormat::Zip,
        (0x1F, 0x8B) => ArchiveFormat::Gzip,
        _ => ArchiveFormat::Json,
    };
    debug!("detected input format: {:?}", format);
    Ok(format)
}

/// Detect the container format and pull out every readable entry.
///
/// A ZIP produces one result per entry, `Err` carrying the message for
/// a member that failed to inflate. Entries inside a ZIP that are
/// themselves gzip members (the normal layout for these exports) are
/// unwrapped a second time; a failed unwrap keeps the outer bytes,
/// which lets plain-JSON ZIP entries through unchanged.
pub fn extract_entries(
    data: &[u8],
) -> Result<(ArchiveFormat, Vec<Result<RawArchiveEntry, String>>), ImportError> {
    let format = detect(data)?;

    let entries = match format {
        ArchiveFormat::Zip => zip::read_entries(data)
            .into_iter()
            .map(|entry| entry.map(unwrap_inner_gzip))
            .collect(),
        ArchiveFormat::Gzip => vec![Ok(RawArchiveEntry {
            name: "archive".to_string(),
            bytes: gzip::read_member(data)?,
        })],
        ArchiveFormat::Json => vec![Ok(RawArchiveEntry {
            name: "recipe.json".to_string(),
            bytes: data.to_vec(),
        })],
    };

    Ok((format, entries))
}

fn unwrap_inner_gzip(entry: RawArchiveEntry) -> RawArchiveEntry {
    if !gzip::is_gzip(&entry.bytes) {
        return entry;
    }
    match gzip::read_member(&entry.bytes) {
        Ok(bytes) => RawArchiveEntry {
            name: entry.name,
            bytes,
        },
        Err(e) => {
            warn!("entry '{}' looked like gzip but failed to unwrap: {}", entry.name, e);
            entry
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_zip() {
        assert_eq!(detect(b"PK\x03\x04rest").unwrap(), ArchiveFormat::Zip);
    }

    #[test]
    fn test_detects_gzip() {
        assert_eq!(detect(&[0x1F, 0x8B, 0x08, 0x00]).unwrap(), ArchiveFormat::Gzip);
    }

    #[test]
    fn test_falls_back_to_json() {
        assert_eq!(detect(b"{\"name\":\"x\"}").unwrap(), ArchiveFormat::Json);
    }

    #[test]
    fn test_short_buffer_is_invalid() {
        assert!(matches!(detect(b"{}"), Err(ImportError::InvalidFile)));
        assert!(matches!(detect(b""), Err(ImportError::InvalidFile)));
    }
}
