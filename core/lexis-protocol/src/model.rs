use rkyv::{Archive, Deserialize, Serialize};
use crate::tags::{self, TagClass};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One tagged token of a text, as emitted by the upstream tagging pipeline.
///
/// Immutable value: every statistics operation reads tokens and constructs
/// fresh results.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Token {
    /// Literal text of the token.
    pub contents: String,
    /// Part-of-speech tag code, e.g. "NNP" or ".".
    pub part_of_speech: String,
    /// Tagging certainty. Assumed non-NaN; consumers compare with total_cmp.
    pub confidence: f64,
}

impl Token {
    pub fn new(
        contents: impl Into<String>,
        part_of_speech: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            contents: contents.into(),
            part_of_speech: part_of_speech.into(),
            confidence,
        }
    }

    /// Whether the token is an actual word rather than punctuation or
    /// another non-word symbol.
    pub fn is_word(&self) -> bool {
        self.tag_class().contains(TagClass::WORD)
    }

    /// Broad classes of this token's tag.
    pub fn tag_class(&self) -> TagClass {
        tags::classify(&self.part_of_speech)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}:{:.1})",
            self.contents, self.part_of_speech, self.confidence
        )
    }
}

/// Versioned container of tokens in text order, the unit of interchange
/// with the upstream tagger.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct TaggedText {
    pub version: u32,
    pub tokens: Vec<Token>,
}
