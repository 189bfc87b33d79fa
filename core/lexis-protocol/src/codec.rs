//! Validated encode/decode of `TaggedText` archives crossing the pipeline
//! boundary. Available with the `std` feature.

use alloc::string::{String, ToString};

use rkyv::AlignedVec;
use thiserror::Error;

use crate::model::TaggedText;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("tagged text archive failed validation: {0}")]
    Decode(String),
    #[error("tagged text serialization failed: {0}")]
    Encode(String),
}

/// Validate and deserialize a `TaggedText` archive received from the tagger.
///
/// Malformed bytes come back as `CodecError::Decode`, never a panic.
pub fn decode_tagged_text(bytes: &[u8]) -> Result<TaggedText, CodecError> {
    rkyv::from_bytes::<TaggedText>(bytes).map_err(|e| CodecError::Decode(e.to_string()))
}

/// Serialize a `TaggedText` into the pipeline's archive format.
pub fn encode_tagged_text(text: &TaggedText) -> Result<AlignedVec, CodecError> {
    rkyv::to_bytes::<_, 256>(text).map_err(|e| CodecError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Token;
    use alloc::vec;

    #[test]
    fn test_round_trip() {
        let original = TaggedText {
            version: 1,
            tokens: vec![
                Token::new("Alice", "NNP", 1.0),
                Token::new("fell", "VVD", 0.8),
                Token::new(".", ".", 1.0),
            ],
        };

        let bytes = encode_tagged_text(&original).expect("encode failed");
        let decoded = decode_tagged_text(&bytes).expect("decode failed");

        assert_eq!(original, decoded);
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let result = decode_tagged_text(&[0x13, 0x37, 0x00, 0xff]);
        assert!(matches!(result, Err(CodecError::Decode(_))));
    }
}
