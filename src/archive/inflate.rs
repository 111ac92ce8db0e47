use std::io::Read;

use flate2::read::DeflateDecoder;

use crate::error::ImportError;

/// Floor for the output pre-allocation when the size hint is tiny or zero.
const MIN_CAPACITY: usize = 1024;

/// Decompress a raw DEFLATE stream.
///
/// `size_hint` is the uncompressed size recorded by the container (ZIP
/// local-file header or gzip footer); it only pre-sizes the output buffer
/// and is not trusted as a limit. An empty result is treated as failure
/// so callers never mistake a broken stream for an empty entry.
pub fn inflate(data: &[u8], size_hint: usize) -> Result<Vec<u8>, ImportError> {
    let mut out = Vec::with_capacity(size_hint.max(MIN_CAPACITY));
    let mut decoder = DeflateDecoder::new(data);
    decoder
        .read_to_end(&mut out)
        .map_err(|e| ImportError::DecompressionFailed(e.to_string()))?;

    if out.is_empty() {
        return Err(ImportError::DecompressionFailed(
            "stream produced no output".to_string(),
        ));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::DeflateEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn deflate(data: &[u8]) -> Vec<u8> {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_round_trip() {
        let original = b"a modest amount of recipe JSON".repeat(50);
        let compressed = deflate(&original);

        let restored = inflate(&compressed, original.len()).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_zero_hint_still_works() {
        let original = b"short";
        let compressed = deflate(original);

        assert_eq!(inflate(&compressed, 0).unwrap(), original);
    }

    #[test]
    fn test_garbage_fails() {
        let result = inflate(&[0xDE, 0xAD, 0xBE, 0xEF], 64);
        assert!(matches!(result, Err(ImportError::DecompressionFailed(_))));
    }
}
