#![no_std] // Keeps the core types usable from WASM and embedded hosts

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod tags;

// Re-export core types for convenience
pub use tags::{classify, TagClass, PROPER_NOUN_TAG};

pub mod model;
pub use model::{TaggedText, Token};

#[cfg(feature = "std")]
pub mod codec;
