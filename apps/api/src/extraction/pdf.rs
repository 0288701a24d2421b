//! PDF text source. Best-effort plain-text extraction, page order preserved.
//!
//! Any extraction failure maps to empty text: the pipeline treats an
//! unreadable document and an empty document identically (`NoInput`).

use tracing::warn;

/// Extracts plain text from raw PDF bytes. Returns an empty string on any
/// failure.
pub fn extract_text(bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("PDF text extraction failed: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_yield_empty_text() {
        assert_eq!(extract_text(b"definitely not a pdf"), "");
    }

    #[test]
    fn test_empty_bytes_yield_empty_text() {
        assert_eq!(extract_text(b""), "");
    }
}
