//! Gzip member parsing (RFC 1952 subset).
//!
//! A member is a 10-byte fixed header, optional flagged fields, a raw
//! DEFLATE stream, and an 8-byte footer (CRC32 + uncompressed size).
//! The header is walked manually to find where the DEFLATE stream
//! starts; decompression itself goes through [`inflate`].

use byteorder::{ByteOrder, LittleEndian};

use super::cursor::ByteCursor;
use super::inflate::inflate;
use crate::error::ImportError;

/// gzip magic bytes (RFC 1952)
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

const FIXED_HEADER_LEN: usize = 10;
const FOOTER_LEN: usize = 8;

const FLAG_FHCRC: u8 = 0x02;
const FLAG_FEXTRA: u8 = 0x04;
const FLAG_FNAME: u8 = 0x08;
const FLAG_FCOMMENT: u8 = 0x10;

/// True when the buffer starts with the gzip magic
pub fn is_gzip(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == GZIP_MAGIC[0] && data[1] == GZIP_MAGIC[1]
}

/// Decompress a single gzip member into its original bytes.
pub fn read_member(data: &[u8]) -> Result<Vec<u8>, ImportError> {
    let deflate_range = locate_deflate_stream(data)?;
    let footer = &data[data.len() - FOOTER_LEN..];
    let size_hint = LittleEndian::read_u32(&footer[4..]) as usize;

    inflate(deflate_range, size_hint)
}

/// Walk the member header and return the embedded raw DEFLATE stream,
/// excluding the trailing footer.
fn locate_deflate_stream(data: &[u8]) -> Result<&[u8], ImportError> {
    if !is_gzip(data) {
        return Err(ImportError::InvalidGzipData("missing gzip magic".to_string()));
    }

    let mut cursor = ByteCursor::new(data);
    skip_header(&mut cursor)
        .ok_or_else(|| ImportError::InvalidGzipData("truncated member header".to_string()))?;

    let stream_start = cursor.position();
    if data.len() < stream_start + FOOTER_LEN {
        return Err(ImportError::InvalidGzipData(
            "member too short for DEFLATE stream and footer".to_string(),
        ));
    }

    Ok(&data[stream_start..data.len() - FOOTER_LEN])
}

/// Advance the cursor past the fixed header and any optional fields
/// selected by the flags byte.
fn skip_header(cursor: &mut ByteCursor<'_>) -> Option<()> {
    cursor.skip(3)?; // magic, compression method
    let flags = cursor.read_u8()?;
    cursor.skip(6)?; // mtime, extra flags, OS
    debug_assert_eq!(cursor.position(), FIXED_HEADER_LEN);

    if flags & FLAG_FEXTRA != 0 {
        let extra_len = cursor.read_u16()? as usize;
        cursor.skip(extra_len)?;
    }
    if flags & FLAG_FNAME != 0 {
        cursor.skip_until_nul()?;
    }
    if flags & FLAG_FCOMMENT != 0 {
        cursor.skip_until_nul()?;
    }
    if flags & FLAG_FHCRC != 0 {
        cursor.skip(2)?;
    }

    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::{DeflateEncoder, GzEncoder};
    use flate2::Compression;
    use std::io::Write;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_round_trip() {
        let original = br#"{"name":"Minestrone","servings":"6"}"#.repeat(20);
        let wrapped = gzip(&original);

        assert!(is_gzip(&wrapped));
        assert_eq!(read_member(&wrapped).unwrap(), original);
    }

    #[test]
    fn test_member_with_fname_and_comment() {
        let original = b"payload with optional header fields";
        let mut deflated = DeflateEncoder::new(Vec::new(), Compression::default());
        deflated.write_all(original).unwrap();
        let deflated = deflated.finish().unwrap();

        let mut member = vec![
            0x1f, 0x8b, // magic
            0x08, // deflate
            FLAG_FNAME | FLAG_FCOMMENT,
            0, 0, 0, 0, // mtime
            0, 0, // xfl, os
        ];
        member.extend_from_slice(b"recipe.json\0");
        member.extend_from_slice(b"a comment\0");
        member.extend_from_slice(&deflated);
        let crc = {
            let mut h = flate2::Crc::new();
            h.update(original);
            h.sum()
        };
        member.extend_from_slice(&crc.to_le_bytes());
        member.extend_from_slice(&(original.len() as u32).to_le_bytes());

        assert_eq!(read_member(&member).unwrap(), original);
    }

    #[test]
    fn test_bad_magic_rejected() {
        let result = read_member(b"PK\x03\x04not gzip at all");
        assert!(matches!(result, Err(ImportError::InvalidGzipData(_))));
    }

    #[test]
    fn test_truncated_header_rejected() {
        let result = read_member(&[0x1f, 0x8b, 0x08, 0x00, 0x00]);
        assert!(matches!(result, Err(ImportError::InvalidGzipData(_))));
    }

    #[test]
    fn test_missing_nul_terminator_rejected() {
        let mut member = vec![0x1f, 0x8b, 0x08, FLAG_FNAME, 0, 0, 0, 0, 0, 0];
        member.extend_from_slice(b"name-with-no-terminator");

        let result = read_member(&member);
        assert!(matches!(result, Err(ImportError::InvalidGzipData(_))));
    }
}
