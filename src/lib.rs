//! Replaces random syllables with butts.
//!
//! # Table of contents
//! * [Description](#description)
//! * [Buttifier](#buttifier)
//! * [Hyphenator trait](#hyphenator-trait)
//! * [Randomness](#randomness)
//! * [CLI tool](#cli-tool)
//! * [Feature flags](#feature-flags)
//!
//! # Description
//!
//! Splits words into syllables using hyphenation patterns and replaces some of them with a fixed
//! word, `butt` by default. Replacement follows case of the syllable it replaces: `Someone` becomes
//! `Buttbutt`, `SOMEONE` becomes `BUTTBUTT`.
//!
//! # Buttifier
//!
//! [`Buttifier`] holds [`ButtifierConfig`], a hyphenator and a random source. It can:
//!
//! * buttify a single word, replacing each syllable with `rate` chance
//! * buttify a sentence, picking random words until `rate` share of all syllables is replaced.
//!   The last untouched word is always left alone so the sentence stays readable
//! * do the above only with `probability` chance per sentence
//!
//! # Hyphenator trait
//!
//! [`Hyphenator`] returns syllable boundaries for a word. Default implementation is
//! [`hyphenator::Dictionary`] which uses Knuth-Liang patterns from [`hyphenation`] crate. Output
//! of hyphenators is normalized so that syllables always cover entire word, see
//! [`syllable::segment`].
//!
//! ```rust
//! use buttify::{random::Fixed, Buttifier, ButtifierConfig, Hyphenator};
//!
//! // splits words in halves
//! #[derive(Clone, Debug)]
//! struct Halves;
//!
//! impl Hyphenator for Halves {
//!     fn hyphenate(&self, word: &str) -> Vec<usize> {
//!         if word.len() > 1 {
//!             vec![word.len() / 2]
//!         } else {
//!             Vec::new()
//!         }
//!     }
//! }
//!
//! // always returning 0 makes every random check pass
//! let mut buttifier =
//!     Buttifier::with_hyphenator(ButtifierConfig::default(), Halves).with_random_source(Fixed(0));
//!
//! assert_eq!(buttifier.buttify_word("Hello"), ("Buttbutt".to_owned(), 2));
//! assert_eq!(buttifier.buttify_sentence("HELLO there"), "BUTTBUTT there");
//! ```
//!
//! # Randomness
//!
//! Every decision takes one value from [`RandomSource`]. Default is [`random::FastRand`] seeded
//! from system entropy. [`random::Fixed`] always returns the same value: `Fixed(0)` replaces
//! everything and `Fixed(u64::MAX)` replaces nothing. [`Buttifier`] is not shared between
//! threads, use [`Buttifier::fork`] to get a copy with its own random source.
//!
//! # CLI tool
//!
//! You can run CLI tool by enabling `cli` feature: `cargo run --features=cli -- --help`.
//!
//! `echo hello world | cargo run --features=cli -- --rate 1` will butt at you.
//!
//! # Feature flags
//!
//! Name | Description | Default?
//! ---|---|---
//! `deserialize` | enables deserialization for [`ButtifierConfig`] | yes
//! `embed_en-us` | bundles en-US hyphenation dictionary, enables [`Buttifier::new`] | yes
//! `cli` | required to run CLI tool, requires `deserialize` and `embed_en-us` | no

mod buttifier;
mod config;

#[cfg(feature = "deserialize")]
mod deserialize;

pub mod hyphenator;
pub mod random;
pub mod syllable;

// pub for bench
#[doc(hidden)]
pub mod utils;

pub use buttifier::{Buttifier, SelectionPolicy, MAX_ATTEMPTS_PER_WORD};
pub use config::{ButtifierConfig, CreationError};
pub use hyphenator::Hyphenator;
pub use random::RandomSource;
pub use utils::normalize_case;
