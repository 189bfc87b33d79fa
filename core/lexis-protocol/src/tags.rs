use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Tag the upstream tagger assigns to proper nouns.
pub const PROPER_NOUN_TAG: &str = "NNP";

bitflags! {
    /// Broad classes a part-of-speech tag can fall into.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct TagClass: u8 {
        /// The tag marks an actual word.
        const WORD = 1;
        /// The tag is exactly the proper-noun tag. Implies WORD.
        const PROPER_NOUN = 2;
        /// The tag marks punctuation or another non-word symbol.
        const PUNCTUATION = 4;
    }
}

/// Classify a raw tag code into its broad classes.
///
/// Word-class tags ("NNP", "VVM", ...) carry at least one ASCII letter;
/// punctuation-class tags (".", ",", ...) carry none.
pub fn classify(tag: &str) -> TagClass {
    let mut class = if tag.chars().any(|c| c.is_ascii_alphabetic()) {
        TagClass::WORD
    } else {
        TagClass::PUNCTUATION
    };

    if tag == PROPER_NOUN_TAG {
        class |= TagClass::PROPER_NOUN;
    }

    class
}
