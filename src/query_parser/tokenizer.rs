#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
}

/// Whitespace tokenizer shared by documents and queries.
///
/// Terms are kept exactly as written: no case folding, punctuation stripping,
/// stemming or stop word removal. `"Cat"`, `"cat"` and `"cat,"` are three
/// different terms.
#[derive(Debug, Clone, Default)]
pub struct SearchTokenizer;

impl SearchTokenizer {
    pub fn new() -> SearchTokenizer {
        SearchTokenizer
    }

    pub fn tokenize(&self, sentences: &str) -> Vec<Token> {
        sentences
            .split_whitespace()
            .map(|word| Token { word: word.to_string() })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_words() {
        let tokenizer = SearchTokenizer::new();
        let tokens = tokenizer.tokenize("the quick brown fox");

        let words: Vec<&str> = tokens.iter().map(|token| token.word.as_str()).collect();
        assert_eq!(words, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_extra_whitespace() {
        let tokenizer = SearchTokenizer::new();
        let tokens = tokenizer.tokenize("  word1    word2  \n\t  word3  ");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].word, "word1");
        assert_eq!(tokens[2].word, "word3");
    }

    #[test]
    fn test_no_normalization() {
        let tokenizer = SearchTokenizer::new();
        let words: Vec<String> = tokenizer
            .tokenize("Cat cat cat, running")
            .into_iter()
            .map(|token| token.word)
            .collect();

        assert_eq!(words, vec!["Cat", "cat", "cat,", "running"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = SearchTokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \n\t").is_empty());
    }

    #[test]
    fn test_unicode_support() {
        let tokenizer = SearchTokenizer::new();
        let tokens = tokenizer.tokenize("café naïve résumé");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].word, "café");
    }
}
