//! Parsing of externally supplied document identifiers.

use crate::error::CoreError;
use crate::types::DocId;

/// Length of the hex form of a [`DocId`].
pub const DOC_ID_HEX_LEN: usize = 24;

/// Parse a path segment into a [`DocId`].
///
/// Accepts exactly 24 hexadecimal characters (either case). Anything else,
/// including an empty string, is a [`CoreError::Validation`].
pub fn parse_doc_id(raw: &str) -> Result<DocId, CoreError> {
    if raw.is_empty() {
        return Err(CoreError::Validation("Missing id".into()));
    }
    if raw.len() != DOC_ID_HEX_LEN {
        return Err(CoreError::Validation(format!(
            "Invalid id '{raw}': expected {DOC_ID_HEX_LEN} hex characters"
        )));
    }
    DocId::parse_str(raw)
        .map_err(|_| CoreError::Validation(format!("Invalid id '{raw}': not hexadecimal")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_lowercase_hex() {
        let id = parse_doc_id("65a1f0c2b3d4e5f601234567").unwrap();
        assert_eq!(id.to_hex(), "65a1f0c2b3d4e5f601234567");
    }

    #[test]
    fn parses_uppercase_hex() {
        let id = parse_doc_id("65A1F0C2B3D4E5F601234567").unwrap();
        assert_eq!(id.to_hex(), "65a1f0c2b3d4e5f601234567");
    }

    #[test]
    fn empty_is_rejected() {
        assert_matches!(parse_doc_id(""), Err(CoreError::Validation(msg)) if msg == "Missing id");
    }

    #[test]
    fn too_short() {
        assert_matches!(parse_doc_id("65a1f0c2"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn too_long() {
        assert_matches!(
            parse_doc_id("65a1f0c2b3d4e5f60123456789"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn non_hex_of_right_length() {
        assert_matches!(
            parse_doc_id("zzzzzzzzzzzzzzzzzzzzzzzz"),
            Err(CoreError::Validation(msg)) if msg.contains("not hexadecimal")
        );
    }

    #[test]
    fn multibyte_input_is_rejected() {
        // 12 two-byte characters: 24 bytes, but not hex.
        assert_matches!(
            parse_doc_id("ññññññññññññ"),
            Err(CoreError::Validation(_))
        );
    }
}
