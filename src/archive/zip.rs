//! Forward scan of ZIP local-file-header records.
//!
//! Recipe export archives are plain single-disk ZIPs written front to
//! back, so entries are discovered by walking local-file headers from
//! offset 0 instead of going through the central directory. The scan
//! stops at the first non-header signature (normally the central
//! directory) and treats truncation as end of input, so a damaged tail
//! never costs the entries already found.

use log::warn;

use super::cursor::ByteCursor;
use super::inflate::inflate;
use super::RawArchiveEntry;

/// Local File Header signature, "PK\x03\x04" as little-endian u32
const LFH_SIGNATURE: u32 = 0x0403_4b50;

/// ZIP compression methods this importer handles
const METHOD_STORED: u16 = 0;
const METHOD_DEFLATE: u16 = 8;

/// Extract every entry from a ZIP byte buffer, in archive order.
///
/// Directory entries, zero-length entries and entries with unsupported
/// compression methods are skipped outright. An entry whose DEFLATE
/// stream fails to inflate yields an `Err` message in its position,
/// leaving the rest of the archive usable.
pub fn read_entries(archive: &[u8]) -> Vec<Result<RawArchiveEntry, String>> {
    let mut cursor = ByteCursor::new(archive);
    let mut entries = Vec::new();

    while let Some(()) = read_one(&mut cursor, &mut entries) {}

    if cursor.remaining() > 0 && entries.is_empty() {
        warn!("no local-file records found before offset {}", cursor.position());
    }

    entries
}

/// Parse a single local-file record at the cursor; `None` ends the scan.
fn read_one(
    cursor: &mut ByteCursor<'_>,
    entries: &mut Vec<Result<RawArchiveEntry, String>>,
) -> Option<()> {
    let record_start = cursor.position();

    let signature = cursor.read_u32()?;
    if signature != LFH_SIGNATURE {
        // Central directory or other trailing data reached
        return None;
    }

    cursor.skip(4)?; // version needed, general-purpose flags
    let method = cursor.read_u16()?;
    cursor.skip(8)?; // mod time, mod date, crc32
    let compressed_size = cursor.read_u32()? as usize;
    let uncompressed_size = cursor.read_u32()? as usize;
    let name_len = cursor.read_u16()? as usize;
    let extra_len = cursor.read_u16()? as usize;

    // Lossy conversion handles non-UTF8 filenames gracefully
    let name = String::from_utf8_lossy(cursor.take(name_len)?).into_owned();
    cursor.skip(extra_len)?;
    let payload = cursor.take(compressed_size)?;

    if name.ends_with('/') || compressed_size == 0 {
        return Some(());
    }

    match method {
        METHOD_STORED => entries.push(Ok(RawArchiveEntry {
            name,
            bytes: payload.to_vec(),
        })),
        METHOD_DEFLATE => match inflate(payload, uncompressed_size) {
            Ok(bytes) => entries.push(Ok(RawArchiveEntry { name, bytes })),
            // One corrupt member must not sink the whole archive
            Err(e) => entries.push(Err(format!(
                "{} (at offset {}): {}",
                name, record_start, e
            ))),
        },
        other => {
            warn!(
                "skipping entry '{}': unsupported compression method {}",
                name, other
            );
        }
    }

    Some(())
}
