use std::ops::Range;

/// Part of a word that gets replaced as a whole
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable<'a> {
    range: Range<usize>,
    letters: &'a str,
}

impl<'a> Syllable<'a> {
    /// Byte range inside original word
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.letters
    }
}

/// Word split into syllables
///
/// Syllables are contiguous, non empty and together cover entire word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyphenatedWord<'a> {
    word: &'a str,
    syllables: Vec<Syllable<'a>>,
}

impl<'a> HyphenatedWord<'a> {
    pub fn new(word: &'a str, breakpoints: &[usize]) -> Self {
        Self {
            word,
            syllables: segment(word, breakpoints),
        }
    }

    pub fn word(&self) -> &'a str {
        self.word
    }

    pub fn syllables(&self) -> &[Syllable<'a>] {
        &self.syllables
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }
}

/// Turns hyphenator breakpoints into syllables covering entire word
///
/// Breakpoints are syllable end offsets. Missing final offset is implied. A single breakpoint
/// pointing at the last character is read as "one syllable". Offsets that are zero, out of
/// bounds, not ascending or not on a char boundary are skipped.
pub fn segment<'a>(word: &'a str, breakpoints: &[usize]) -> Vec<Syllable<'a>> {
    let len = word.len();

    if len == 0 {
        return Vec::new();
    }

    let breakpoints: &[usize] = match breakpoints {
        [only] if *only == len - 1 => &[],
        _ => breakpoints,
    };

    let mut syllables = Vec::with_capacity(breakpoints.len() + 1);
    let mut start = 0;

    for &end in breakpoints.iter().chain(Some(&len)) {
        if end <= start || end > len || !word.is_char_boundary(end) {
            continue;
        }

        syllables.push(Syllable {
            range: start..end,
            letters: &word[start..end],
        });
        start = end;
    }

    syllables
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters<'a>(word: &'a str, breakpoints: &[usize]) -> Vec<&'a str> {
        segment(word, breakpoints)
            .iter()
            .map(Syllable::as_str)
            .collect()
    }

    fn assert_covers(word: &str, breakpoints: &[usize]) {
        let syllables = segment(word, breakpoints);

        assert_eq!(
            syllables.iter().map(Syllable::as_str).collect::<String>(),
            word,
            "{breakpoints:?}"
        );

        let mut expected_start = 0;
        for syllable in &syllables {
            assert_eq!(syllable.range().start, expected_start);
            assert!(!syllable.as_str().is_empty());
            expected_start = syllable.range().end;
        }
        assert_eq!(expected_start, word.len());
    }

    #[test]
    fn empty_word() {
        assert!(segment("", &[]).is_empty());
        assert!(segment("", &[0, 1, 2]).is_empty());
    }

    #[test]
    fn no_breakpoints() {
        assert_eq!(letters("asd", &[]), ["asd"]);
    }

    #[test]
    fn final_boundary_added() {
        assert_eq!(letters("successful", &[3, 7]), ["suc", "cess", "ful"]);
    }

    #[test]
    fn final_boundary_present() {
        assert_eq!(letters("successful", &[3, 7, 10]), ["suc", "cess", "ful"]);
    }

    #[test]
    fn single_last_index() {
        assert_eq!(letters("partne", &[5]), ["partne"]);
        assert_eq!(letters("a", &[0]), ["a"]);
    }

    #[test]
    fn last_index_among_others_is_a_break() {
        assert_eq!(letters("someone", &[4, 6]), ["some", "on", "e"]);
    }

    #[test]
    fn junk_breakpoints_skipped() {
        assert_eq!(letters("someone", &[0, 4, 4, 2, 100]), ["some", "one"]);
    }

    #[test]
    fn char_boundaries_respected() {
        // offset 3 is inside "р"
        assert_eq!(letters("приём", &[3, 4]), ["пр", "иём"]);
    }

    #[test]
    fn ranges() {
        let syllables = segment("partner", &[4]);

        assert_eq!(syllables[0].range(), 0..4);
        assert_eq!(syllables[1].range(), 4..7);
    }

    #[test]
    fn coverage() {
        let word = "developers";

        let cases: [&[usize]; 9] = [
            &[],
            &[9],
            &[10],
            &[2, 5, 7, 9],
            &[2, 5, 7, 9, 10],
            &[2, 5, 7],
            &[5, 2],
            &[0],
            &[11, 12],
        ];

        for breakpoints in cases {
            assert_covers(word, breakpoints);
        }

        assert_covers("a", &[0]);
        assert_covers("a", &[1]);
        assert_covers("ab", &[1]);
        assert_covers("приём", &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn hyphenated_word() {
        let word = HyphenatedWord::new("computer", &[3, 5]);

        assert_eq!(word.word(), "computer");
        assert_eq!(word.len(), 3);
        assert!(!word.is_empty());
        assert_eq!(word.syllables()[2].as_str(), "ter");

        assert!(HyphenatedWord::new("", &[]).is_empty());
    }
}
