use crate::config::{
    ButtifierConfig, CreationError, DEFAULT_BUTT_WORD, DEFAULT_PROBABILITY, DEFAULT_RATE,
};

use serde::Deserialize;

fn default_butt_word() -> String {
    DEFAULT_BUTT_WORD.to_owned()
}

fn default_rate() -> f64 {
    DEFAULT_RATE
}

fn default_probability() -> f64 {
    DEFAULT_PROBABILITY
}

// separate from ButtifierConfig to run validation after parsing
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ButtifierConfigDef {
    #[serde(default = "default_butt_word")]
    butt_word: String,
    #[serde(default = "default_rate")]
    rate: f64,
    #[serde(default = "default_probability")]
    probability: f64,
}

impl TryFrom<ButtifierConfigDef> for ButtifierConfig {
    type Error = CreationError;

    fn try_from(def: ButtifierConfigDef) -> Result<Self, Self::Error> {
        Self::new(&def.butt_word, def.rate, def.probability)
    }
}
