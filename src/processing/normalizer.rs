//! Text normalization: the leaf stage every pipeline input passes through

use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Reduces a token to its base lexical form.
///
/// Injected into the normalizer so the pipeline works with or without one;
/// a missing lemmatizer means tokens pass through unchanged.
pub trait Lemmatizer: Send + Sync {
    fn lemma(&self, token: &str) -> String;
}

/// Rule-based English noun lemmatizer covering regular plural forms.
pub struct NounLemmatizer;

impl Lemmatizer for NounLemmatizer {
    fn lemma(&self, token: &str) -> String {
        if let Some(stem) = token.strip_suffix("ies") {
            if token.len() > 4 {
                return format!("{}y", stem);
            }
        }
        if let Some(stem) = token.strip_suffix("sses") {
            return format!("{}ss", stem);
        }
        for suffix in ["xes", "ches", "shes", "zes"] {
            if let Some(stem) = token.strip_suffix(suffix) {
                return format!("{}{}", stem, &suffix[..suffix.len() - 2]);
            }
        }
        if token.len() > 3
            && token.ends_with('s')
            && !token.ends_with("ss")
            && !token.ends_with("us")
            && !token.ends_with("is")
        {
            return token[..token.len() - 1].to_string();
        }
        token.to_string()
    }
}

pub struct TextNormalizer {
    stop_words: HashSet<String>,
    lemmatizer: Option<Box<dyn Lemmatizer>>,
    non_alpha: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(Self::default_stop_words(), Some(Box::new(NounLemmatizer)))
    }
}

impl TextNormalizer {
    pub fn new(stop_words: HashSet<String>, lemmatizer: Option<Box<dyn Lemmatizer>>) -> Self {
        let non_alpha = Regex::new(r"[^a-z\s]").expect("Invalid normalizer regex");

        Self {
            stop_words,
            lemmatizer,
            non_alpha,
        }
    }

    /// Normalizer without lemmatization; tokens keep their surface form.
    pub fn without_lemmatizer() -> Self {
        Self::new(Self::default_stop_words(), None)
    }

    /// Normalize text for vectorization.
    ///
    /// Lowercases, replaces everything outside `[a-z]` and whitespace with a
    /// space (so adjacent tokens never merge), drops stopwords and tokens of
    /// length <= 2, lemmatizes the rest, and joins with single spaces.
    /// Infallible: degenerate input produces an empty string, never an error.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let cleaned = self.non_alpha.replace_all(&lowered, " ");

        cleaned
            .unicode_words()
            .filter(|token| token.len() > 2 && !self.stop_words.contains(*token))
            .map(|token| match &self.lemmatizer {
                Some(lemmatizer) => lemmatizer.lemma(token),
                None => token.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Common English stop words
    fn default_stop_words() -> HashSet<String> {
        let stop_words = [
            "the", "a", "an", "and", "or", "but", "if", "then", "else", "when",
            "at", "by", "for", "with", "about", "against", "between", "into",
            "through", "during", "before", "after", "above", "below", "from",
            "up", "down", "in", "out", "on", "off", "over", "under", "again",
            "further", "once", "here", "there", "all", "any", "both", "each",
            "few", "more", "most", "other", "some", "such", "only", "own",
            "same", "than", "too", "very", "can", "will", "just", "should",
            "now", "this", "that", "these", "those", "what", "which", "who",
            "whom", "why", "how", "where", "is", "are", "was", "were", "be",
            "been", "being", "have", "has", "had", "having", "do", "does",
            "did", "doing", "would", "could", "ought", "not", "they", "them",
            "their", "theirs", "she", "her", "hers", "him", "his", "its",
            "our", "ours", "your", "yours", "you", "itself", "himself",
            "herself", "themselves", "myself", "yourself", "while",
            "because", "until", "also", "may", "might", "must", "shall",
        ];

        stop_words.iter().map(|&s| s.to_string()).collect()
    }
}
