//! Skill keyword extraction against a fixed vocabulary

use crate::error::{Result, ResumeRankerError};
use aho_corasick::AhoCorasick;
use std::collections::{BTreeMap, BTreeSet};

/// Scans raw text for known skills, matching any surface variant as a
/// case-insensitive whole word. Built once at startup and shared read-only.
pub struct SkillExtractor {
    matcher: AhoCorasick,
    /// Canonical skill name per pattern, indexed by pattern id
    canonical: Vec<String>,
}

impl SkillExtractor {
    pub fn new(vocabulary: &BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut canonical = Vec::new();

        for (skill, variants) in vocabulary {
            for variant in variants {
                patterns.push(variant.to_lowercase());
                canonical.push(skill.clone());
            }
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| {
                ResumeRankerError::Configuration(format!("Failed to build skill matcher: {}", e))
            })?;

        Ok(Self { matcher, canonical })
    }

    /// Canonical names of every skill whose variant occurs in the text.
    ///
    /// Matches must be word-boundary-bounded: "pythonic" does not contain the
    /// skill "python". Each skill appears at most once however many of its
    /// variants match.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();

        for mat in self.matcher.find_overlapping_iter(text) {
            if is_word_bounded(text, mat.start(), mat.end()) {
                found.insert(self.canonical[mat.pattern().as_usize()].clone());
            }
        }

        found
    }

    pub fn pattern_count(&self) -> usize {
        self.canonical.len()
    }
}

/// True when neither match edge touches a word character, mirroring
/// regex `\b` semantics (alphanumerics plus underscore).
fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();

    !before.map_or(false, is_word_char) && !after.map_or(false, is_word_char)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
