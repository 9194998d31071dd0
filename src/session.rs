use std::fmt;

/// The currency pair the shell is currently converting between.
///
/// Owned by the shell and mutated only through [`set`](Self::set) and
/// [`swap`](Self::swap); codes are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyPair {
    from: String,
    to: String,
}

impl CurrencyPair {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_ascii_lowercase(),
            to: to.to_ascii_lowercase(),
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    /// Replace both codes, normalizing to lowercase.
    pub fn set(&mut self, from: &str, to: &str) {
        self.from = from.to_ascii_lowercase();
        self.to = to.to_ascii_lowercase();
    }

    /// Exchange `from` and `to` in place.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_normalizes_case() {
        let mut pair = CurrencyPair::new("eur", "huf");
        pair.set("USD", "Eur");
        assert_eq!(pair.from(), "usd");
        assert_eq!(pair.to(), "eur");
    }

    #[test]
    fn test_swap_is_its_own_inverse() {
        let mut pair = CurrencyPair::new("eur", "huf");
        pair.swap();
        assert_eq!(pair, CurrencyPair::new("huf", "eur"));
        pair.swap();
        assert_eq!(pair, CurrencyPair::new("eur", "huf"));
    }

    #[test]
    fn test_display_matches_prompt_format() {
        let pair = CurrencyPair::new("eur", "huf");
        assert_eq!(pair.to_string(), "eur --> huf");
    }
}
