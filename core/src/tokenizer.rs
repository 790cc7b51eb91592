use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // Word runs, or any single symbol that is neither a word character nor whitespace.
    static ref RE: Regex = Regex::new(r"(?u)\w+|[^\w\s]").expect("valid regex");
}

/// Splits document text into lowercase tokens.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Default tokenizer: NFKC normalization, lowercase, then word runs and
/// punctuation symbols as separate tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = text.nfkc().collect::<String>().to_lowercase();
        RE.find_iter(&normalized).map(|m| m.as_str().to_string()).collect()
    }
}

/// Tokenize text with the default [`WordTokenizer`].
pub fn tokenize(text: &str) -> Vec<String> {
    WordTokenizer.tokenize(text)
}
