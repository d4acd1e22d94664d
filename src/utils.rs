use std::borrow::Cow;

fn count_chars_and_cases(string: &str) -> (usize, usize, usize) {
    string.chars().fold((0, 0, 0), |(total, lower, upper), c| {
        let is_lower = c.is_lowercase();
        let is_upper = c.is_uppercase();

        (
            total + 1,
            lower + usize::from(is_lower),
            upper + usize::from(is_upper),
        )
    })
}

/// Replacement token with precomputed info for fast case normalization
#[doc(hidden)] // pub for bench
#[derive(Debug, Clone)]
pub struct Token {
    body: String,
    body_upper: String,
    char_count: usize,
    has_uppercase: bool,
}

impl Token {
    #[doc(hidden)] // pub for bench
    pub fn new(body: String) -> Self {
        let (char_count, _, uppercase) = count_chars_and_cases(&body);

        Self {
            char_count,
            has_uppercase: uppercase != 0,
            body_upper: body.to_uppercase(),
            body,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.body
    }

    /// Copies case of `source` onto token
    ///
    /// Fully uppercase `source` shorter than token uppercases entire token. Otherwise each token
    /// character takes case of `source` character at the same position, the rest of token is left
    /// as is.
    #[must_use]
    pub fn normalize_case(&self, source: &str) -> Cow<'_, str> {
        let (char_count, lowercase, uppercase) = count_chars_and_cases(source);

        if char_count < self.char_count && uppercase == char_count {
            return Cow::Borrowed(&self.body_upper);
        }

        // nothing to uppercase and nothing to lowercase
        if uppercase == 0 && lowercase == char_count && !self.has_uppercase {
            return Cow::Borrowed(&self.body);
        }

        let mut result = String::with_capacity(self.body.len());
        let mut source_chars = source.chars();

        for c in self.body.chars() {
            match source_chars.next() {
                Some(s) if s.is_uppercase() => result.extend(c.to_uppercase()),
                Some(_) => result.extend(c.to_lowercase()),
                None => result.push(c),
            }
        }

        Cow::Owned(result)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body
    }
}

/// Returns copy of `token` with case taken from `source`, see [`Token::normalize_case`]
pub fn normalize_case(source: &str, token: &str) -> String {
    Token::new(token.to_owned())
        .normalize_case(source)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    impl From<&str> for Token {
        fn from(body: &str) -> Self {
            Self::new(body.to_string())
        }
    }

    fn same_case(a: &str, b: &str) -> bool {
        a.chars()
            .zip(b.chars())
            .all(|(a, b)| a.is_uppercase() == b.is_uppercase())
    }

    #[test]
    fn token_counts_chars() {
        assert_eq!(Token::from("butt").char_count, 4);
        assert_eq!(Token::from("жопа").char_count, 4);
    }

    #[test]
    fn lowercase_source() {
        assert_eq!(normalize_case("some", "butt"), "butt");
        assert_eq!(normalize_case("suc", "butt"), "butt");
        assert_eq!(normalize_case("someone", "butt"), "butt");
    }

    #[test]
    fn lowercase_source_lowers_token() {
        assert_eq!(normalize_case("some", "BUTT"), "butt");
        assert_eq!(normalize_case("so", "BUTT"), "buTT");
    }

    #[test]
    fn short_uppercase_source() {
        assert_eq!(normalize_case("SOM", "buttbutt"), "BUTTBUTT");
        assert_eq!(normalize_case("SUC", "butt"), "BUTT");
        assert_eq!(normalize_case("I", "butt"), "BUTT");
    }

    #[test]
    fn exact_length_copies_case() {
        assert_eq!(normalize_case("SOMe", "butt"), "BUTt");
        assert_eq!(normalize_case("SOme", "butt"), "BUtt");
        assert_eq!(normalize_case("Some", "butt"), "Butt");
        assert_eq!(normalize_case("CESS", "butt"), "BUTT");
        assert_eq!(normalize_case("sOmE", "butt"), "bUtT");

        for source in ["abcd", "ABCD", "aBcD", "AbCd", "abCD"] {
            assert!(same_case(source, &normalize_case(source, "butt")), "{source}");
        }
    }

    #[test]
    fn long_source_copies_prefix_case() {
        assert_eq!(normalize_case("SOMEONE", "butt"), "BUTT");
        assert_eq!(normalize_case("Someone", "butt"), "Butt");
    }

    #[test]
    fn short_mixed_source_keeps_tail() {
        assert_eq!(normalize_case("Fu", "butt"), "Butt");
        assert_eq!(normalize_case("Fu", "buTT"), "BuTT");
    }

    #[test]
    fn non_letters_lower() {
        assert_eq!(normalize_case("5Wad", "BUTT"), "bUtt");
        assert_eq!(normalize_case("a1", "butt"), "butt");
    }

    #[test]
    fn non_ascii() {
        assert_eq!(normalize_case("ПРИ", "жопа"), "ЖОПА");
        assert_eq!(normalize_case("При", "жопа"), "Жопа");
        assert_eq!(normalize_case("SOM", "жопа"), "ЖОПА");
    }

    #[test]
    fn result_has_token_length() {
        for source in ["a", "AB", "aBc", "ABCDEFG", "abcdefg"] {
            assert_eq!(normalize_case(source, "butt").chars().count(), 4);
        }
    }

    #[test]
    fn borrows_when_possible() {
        let token = Token::from("butt");

        assert!(matches!(token.normalize_case("some"), Cow::Borrowed("butt")));
        assert!(matches!(token.normalize_case("SOM"), Cow::Borrowed("BUTT")));
        assert!(matches!(token.normalize_case("Some"), Cow::Owned(_)));
    }
}
