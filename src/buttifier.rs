use std::{borrow::Cow, path::Path};

use hyphenation::Language;
use log::{debug, trace};

use crate::{
    config::{ButtifierConfig, CreationError},
    hyphenator::{Dictionary, Hyphenator},
    random::{self, FastRand, RandomSource},
    syllable::HyphenatedWord,
    utils::Token,
};

/// Sentence rate targeting gives up after this many draws per word
pub const MAX_ATTEMPTS_PER_WORD: usize = 4;

/// How syllables of a sentence are picked for replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Every syllable is replaced with `rate` chance
    Independent,
    /// Random words are buttified until `rate` share of sentence syllables is replaced. The last
    /// untouched word is never replaced
    #[default]
    TargetRate,
}

/// Replaces random syllables with butt word
#[derive(Debug)]
pub struct Buttifier {
    config: ButtifierConfig,
    token: Token,
    hyphenator: Box<dyn Hyphenator>,
    rng: Box<dyn RandomSource>,
}

impl Buttifier {
    /// Default config with embedded en-US dictionary
    #[cfg(feature = "embed_en-us")]
    pub fn new() -> Result<Self, CreationError> {
        Self::with_config(ButtifierConfig::default())
    }

    /// Given config with embedded en-US dictionary
    #[cfg(feature = "embed_en-us")]
    pub fn with_config(config: ButtifierConfig) -> Result<Self, CreationError> {
        Ok(Self::with_hyphenator(config, Dictionary::embedded()?))
    }

    /// Given config with en-US dictionary loaded from file
    pub fn from_dictionary_path<P: AsRef<Path>>(
        config: ButtifierConfig,
        path: P,
    ) -> Result<Self, CreationError> {
        Ok(Self::with_hyphenator(
            config,
            Dictionary::from_path(Language::EnglishUS, path)?,
        ))
    }

    /// Uses custom hyphenator and entropy seeded random source
    pub fn with_hyphenator(
        config: ButtifierConfig,
        hyphenator: impl Hyphenator + 'static,
    ) -> Self {
        debug!(
            "buttifier: word={:?} rate={} probability={} hyphenator={:?}",
            config.butt_word(),
            config.rate(),
            config.probability(),
            hyphenator
        );

        Self {
            token: Token::new(config.butt_word().to_owned()),
            config,
            hyphenator: Box::new(hyphenator),
            rng: Box::new(FastRand::new()),
        }
    }

    #[must_use]
    pub fn with_random_source(mut self, rng: impl RandomSource + 'static) -> Self {
        self.set_random_source(rng);
        self
    }

    pub fn set_random_source(&mut self, rng: impl RandomSource + 'static) {
        self.rng = Box::new(rng);
    }

    pub fn config(&self) -> &ButtifierConfig {
        &self.config
    }

    /// Replaces config. Affects subsequent calls only
    pub fn set_config(&mut self, config: ButtifierConfig) {
        self.token = Token::new(config.butt_word().to_owned());
        self.config = config;
    }

    /// Copy sharing config and hyphenator with its own entropy seeded random source
    #[must_use]
    pub fn fork(&self) -> Self {
        Self {
            config: self.config.clone(),
            token: self.token.clone(),
            hyphenator: self.hyphenator.clone(),
            rng: Box::new(FastRand::new()),
        }
    }

    /// Splits word into syllables
    pub fn hyphenate_word<'a>(&self, word: &'a str) -> HyphenatedWord<'a> {
        HyphenatedWord::new(word, &self.hyphenator.hyphenate(word))
    }

    /// One draw against `probability`. Decides whether sentence should be buttified at all
    pub fn should_transform(&mut self) -> bool {
        random::unit_f64(self.rng.next_u64()) < self.config.probability()
    }

    /// Replaces each syllable with `rate` chance. Returns result and number of replaced syllables
    pub fn buttify_word(&mut self, word: &str) -> (String, usize) {
        let word = self.hyphenate_word(word);

        self.substitute(&word)
    }

    /// Buttifies words of sentence until `rate` share of syllables is replaced
    ///
    /// Words are separated by single spaces. See [`SelectionPolicy::TargetRate`]
    pub fn buttify_sentence(&mut self, sentence: &str) -> String {
        self.buttify_sentence_with(sentence, SelectionPolicy::TargetRate)
            .0
    }

    /// Same as [`buttify_sentence`](Self::buttify_sentence) but only runs with `probability`
    /// chance. Second value is true if anything got replaced
    pub fn buttify_sentence_gated(&mut self, sentence: &str) -> (String, bool) {
        if !self.should_transform() {
            return (sentence.to_owned(), false);
        }

        let (buttified, replaced) =
            self.buttify_sentence_with(sentence, SelectionPolicy::TargetRate);

        (buttified, replaced != 0)
    }

    /// Buttifies sentence using given policy. Returns result and number of replaced syllables
    pub fn buttify_sentence_with(
        &mut self,
        sentence: &str,
        policy: SelectionPolicy,
    ) -> (String, usize) {
        let words: Vec<_> = sentence
            .split(' ')
            .map(|word| self.hyphenate_word(word))
            .collect();

        let mut output: Vec<Cow<'_, str>> = words.iter().map(|w| w.word().into()).collect();

        let replaced = match policy {
            SelectionPolicy::Independent => self.substitute_all(&words, &mut output),
            SelectionPolicy::TargetRate => self.substitute_to_rate(&words, &mut output),
        };

        (output.join(" "), replaced)
    }

    fn substitute(&mut self, word: &HyphenatedWord<'_>) -> (String, usize) {
        let mut buttified = String::with_capacity(word.word().len());
        let mut replaced = 0;

        for syllable in word.syllables() {
            if random::unit_f64(self.rng.next_u64()) < self.config.rate() {
                buttified.push_str(&self.token.normalize_case(syllable.as_str()));
                replaced += 1;
            } else {
                buttified.push_str(syllable.as_str());
            }
        }

        (buttified, replaced)
    }

    fn substitute_all<'a>(
        &mut self,
        words: &[HyphenatedWord<'a>],
        output: &mut [Cow<'a, str>],
    ) -> usize {
        let mut replaced = 0;

        for (word, slot) in words.iter().zip(output.iter_mut()) {
            let (buttified, count) = self.substitute(word);

            if count != 0 {
                *slot = buttified.into();
                replaced += count;
            }
        }

        replaced
    }

    fn substitute_to_rate<'a>(
        &mut self,
        words: &[HyphenatedWord<'a>],
        output: &mut [Cow<'a, str>],
    ) -> usize {
        let total: usize = words.iter().map(HyphenatedWord::len).sum();
        if total == 0 {
            return 0;
        }

        let target = self.config.rate();
        let max_attempts = MAX_ATTEMPTS_PER_WORD * words.len();

        let mut untouched: Vec<usize> = (0..words.len()).collect();
        let mut replaced = 0;
        let mut attempts = 0;

        while (replaced as f64 / total as f64) < target && untouched.len() > 1 {
            if attempts == max_attempts {
                debug!("gave up after {attempts} attempts: replaced {replaced} of {total}");
                break;
            }
            attempts += 1;

            let picked = random::index(self.rng.next_u64(), untouched.len());
            let index = untouched[picked];

            let (buttified, count) = self.substitute(&words[index]);

            trace!(
                "attempt {attempts}: {:?} -> {buttified:?} ({count} replaced)",
                words[index].word()
            );

            if count != 0 {
                output[index] = buttified.into();
                replaced += count;
                untouched.remove(picked);
            }
        }

        replaced
    }
}
