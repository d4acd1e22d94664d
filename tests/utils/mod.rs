#![allow(dead_code)]

use std::fs;

use buttify::ButtifierConfig;

/// Read sample text into string
pub fn read_sample_file() -> String {
    fs::read_to_string("tests/sample_text.txt").unwrap()
}

/// Read sample text lines and filter junk
pub fn read_sample_file_lines() -> Vec<String> {
    read_sample_file()
        .lines()
        .filter(|&l| !(l.is_empty() || l.eq(" :")))
        .map(|s| s.to_owned())
        .collect()
}

/// Runs config over every sample line and checks that word count is preserved
pub fn check_config(config: ButtifierConfig) {
    let mut buttifier = buttify::Buttifier::with_config(config).unwrap();

    for line in read_sample_file_lines() {
        let words = line.split(' ').count();

        assert_eq!(buttifier.buttify_sentence(&line).split(' ').count(), words);

        let (gated, _) = buttifier.buttify_sentence_gated(&line);
        assert_eq!(gated.split(' ').count(), words);
    }
}
