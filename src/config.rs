use std::{error::Error, fmt};

use crate::hyphenator::LoadError;

pub const DEFAULT_BUTT_WORD: &str = "butt";
pub const DEFAULT_RATE: f64 = 0.3;
pub const DEFAULT_PROBABILITY: f64 = 0.1;

/// Engine settings
///
/// * `butt_word` replaces chosen syllables
/// * `rate` is chance of replacing each syllable, also the share of sentence syllables
///   [`Buttifier::buttify_sentence`] aims for
/// * `probability` is chance of [`Buttifier::buttify_sentence_gated`] touching a sentence at all
///
/// [`Buttifier::buttify_sentence`]: crate::Buttifier::buttify_sentence
/// [`Buttifier::buttify_sentence_gated`]: crate::Buttifier::buttify_sentence_gated
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "deserialize",
    derive(serde::Deserialize),
    serde(try_from = "crate::deserialize::ButtifierConfigDef")
)]
pub struct ButtifierConfig {
    butt_word: String,
    rate: f64,
    probability: f64,
}

#[derive(Debug)]
pub enum CreationError {
    Hyphenation(LoadError),
    RateOutOfRange { name: &'static str, value: f64 },
    EmptyButtWord,
}

impl fmt::Display for CreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreationError::Hyphenation(err) => write!(f, "{err}"),
            CreationError::RateOutOfRange { name, value } => {
                write!(f, "{name} must be between 0 and 1, got {value}")
            }
            CreationError::EmptyButtWord => write!(f, "butt word cannot be empty"),
        }
    }
}

impl Error for CreationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CreationError::Hyphenation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LoadError> for CreationError {
    fn from(err: LoadError) -> Self {
        Self::Hyphenation(err)
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<f64, CreationError> {
    // NaN fails both comparisons
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(CreationError::RateOutOfRange { name, value })
    }
}

impl ButtifierConfig {
    pub fn new(butt_word: &str, rate: f64, probability: f64) -> Result<Self, CreationError> {
        if butt_word.is_empty() {
            return Err(CreationError::EmptyButtWord);
        }

        Ok(Self {
            butt_word: butt_word.to_owned(),
            rate: check_rate("rate", rate)?,
            probability: check_rate("probability", probability)?,
        })
    }

    pub fn butt_word(&self) -> &str {
        &self.butt_word
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Produces new config with different butt word
    pub fn with_butt_word(self, butt_word: &str) -> Result<Self, CreationError> {
        Self::new(butt_word, self.rate, self.probability)
    }

    /// Produces new config with different rate
    pub fn with_rate(self, rate: f64) -> Result<Self, CreationError> {
        Self::new(&self.butt_word, rate, self.probability)
    }

    /// Produces new config with different probability
    pub fn with_probability(self, probability: f64) -> Result<Self, CreationError> {
        Self::new(&self.butt_word, self.rate, probability)
    }
}

impl Default for ButtifierConfig {
    fn default() -> Self {
        Self {
            butt_word: DEFAULT_BUTT_WORD.to_owned(),
            rate: DEFAULT_RATE,
            probability: DEFAULT_PROBABILITY,
        }
    }
}
