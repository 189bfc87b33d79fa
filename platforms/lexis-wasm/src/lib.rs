use std::collections::BTreeMap;

use wasm_bindgen::prelude::*;

use lexis_protocol::codec::decode_tagged_text;
use lexis_protocol::{TaggedText, Token};
use serde::Serialize;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The structured response sent back to JavaScript/React
#[derive(Serialize)]
pub struct StatsReport {
    pub word_count: usize,
    pub vocabulary: Vec<String>,
    pub proper_nouns: Vec<String>,
    pub pos_frequencies: BTreeMap<String, usize>,
    pub least_confident: Option<TokenReport>,
    pub debug_info: String,
}

#[derive(Serialize)]
pub struct TokenReport {
    pub contents: String,
    pub part_of_speech: String,
    pub confidence: f64,
}

impl From<&Token> for TokenReport {
    fn from(token: &Token) -> Self {
        Self {
            contents: token.contents.clone(),
            part_of_speech: token.part_of_speech.clone(),
            confidence: token.confidence,
        }
    }
}

/// The Engine Instance running in the Browser
#[wasm_bindgen]
pub struct LexisEngine {
    // We own the decoded text (the archive is loaded via fetch() in JS)
    text: TaggedText,
}

#[wasm_bindgen]
impl LexisEngine {
    /// Validates and decodes a `TaggedText` archive produced by the
    /// upstream tagger. A malformed archive becomes a JS error, not a panic.
    #[wasm_bindgen(constructor)]
    pub fn new(data: Vec<u8>) -> Result<LexisEngine, JsValue> {
        let text = decode_tagged_text(&data).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { text })
    }

    /// The Main Loop: Tokens -> Statistics -> JSON
    pub fn report(&self, size: usize) -> JsValue {
        let tokens = &self.text.tokens;

        let report = StatsReport {
            word_count: lexis_stats::count_words(tokens),
            vocabulary: lexis_stats::vocabulary(tokens, size),
            proper_nouns: lexis_stats::proper_nouns(tokens, size),
            pos_frequencies: lexis_stats::pos_frequencies(tokens),
            least_confident: lexis_stats::least_confident_token(tokens).map(TokenReport::from),
            debug_info: format!(
                "Version: {}, Tokens: {}",
                self.text.version,
                tokens.len()
            ),
        };

        serde_wasm_bindgen::to_value(&report).unwrap()
    }
}
