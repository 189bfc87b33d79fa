#![no_std]

#[macro_use]
extern crate alloc;

pub mod rank;

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use lexis_protocol::{Token, PROPER_NOUN_TAG};

/// Return the number of tokens whose contents is an actual word.
pub fn count_words(tokens: &[Token]) -> usize {
    tokens.iter().filter(|t| t.is_word()).count()
}

/// Find the most frequent words in the text, case-folded to lowercase.
///
/// Returns up to `size` distinct words ordered by descending frequency.
pub fn vocabulary(tokens: &[Token], size: usize) -> Vec<String> {
    let counts = rank::frequency_map(
        tokens
            .iter()
            .filter(|t| t.is_word())
            .map(|t| t.contents.to_lowercase()),
    );

    rank::top_n(size, &counts)
}

/// Find the most frequent proper nouns in the text, case preserved.
pub fn proper_nouns(tokens: &[Token], size: usize) -> Vec<String> {
    let counts = rank::frequency_map(
        tokens
            .iter()
            .filter(|t| t.part_of_speech == PROPER_NOUN_TAG)
            .map(|t| t.contents.clone()),
    );

    rank::top_n(size, &counts)
}

/// Find the token with the lowest tagging confidence, or `None` for an
/// empty text. Ties go to the first token in text order.
///
/// `Iterator::min_by` keeps the *last* minimum, so the scan is spelled out.
pub fn least_confident_token(tokens: &[Token]) -> Option<&Token> {
    let mut least: Option<&Token> = None;

    for token in tokens {
        let lower = match least {
            Some(current) => token.confidence.total_cmp(&current.confidence).is_lt(),
            None => true,
        };
        if lower {
            least = Some(token);
        }
    }

    least
}

/// Find the frequency of every part-of-speech tag, punctuation included.
pub fn pos_frequencies(tokens: &[Token]) -> BTreeMap<String, usize> {
    rank::frequency_map(tokens.iter().map(|t| t.part_of_speech.clone()))
}
