use std::{error::Error, fmt, path::Path};

use dyn_clone::{clone_trait_object, DynClone};
use hyphenation::{Hyphenator as _, Language, Load, Standard};

/// Finds syllable boundaries in a word
///
/// Returns byte offsets in ascending order, each one being the end of a syllable. Implementations
/// are allowed to omit the final boundary, return nothing for unbreakable words or return the last
/// character index instead of word length, see [`segment`](crate::syllable::segment).
pub trait Hyphenator: DynClone + fmt::Debug + Send + Sync {
    fn hyphenate(&self, word: &str) -> Vec<usize>;
}

clone_trait_object!(Hyphenator);

/// [`Dictionary`] loading failed
#[derive(Debug)]
pub struct LoadError(hyphenation::load::Error);

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loading hyphenation dictionary: {}", self.0)
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

/// Knuth-Liang pattern dictionary from [`hyphenation`] crate
#[derive(Clone)]
pub struct Dictionary {
    language: Language,
    inner: Standard,
}

// skips thousands of patterns
impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Dictionary {
    /// Loads en-US dictionary bundled into binary
    #[cfg(feature = "embed_en-us")]
    pub fn embedded() -> Result<Self, LoadError> {
        let inner = Standard::from_embedded(Language::EnglishUS).map_err(LoadError)?;

        Ok(Self {
            language: Language::EnglishUS,
            inner,
        })
    }

    /// Loads serialized dictionary from file
    pub fn from_path<P: AsRef<Path>>(language: Language, path: P) -> Result<Self, LoadError> {
        let inner = Standard::from_path(language, path).map_err(LoadError)?;

        Ok(Self { language, inner })
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl Hyphenator for Dictionary {
    fn hyphenate(&self, word: &str) -> Vec<usize> {
        if word.is_empty() {
            return Vec::new();
        }

        self.inner.hyphenate(word).breaks
    }
}
