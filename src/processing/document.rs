//! Batch document structures

use serde::{Deserialize, Serialize};

/// One resume in a batch: an identifier plus its extracted text.
/// Immutable once created; lives for a single analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub raw_text: String,
}

impl Document {
    pub fn new(name: String, raw_text: String) -> Self {
        Self { name, raw_text }
    }
}

/// A scored, summarized, ranked resume.
///
/// Scores are only comparable within the batch they were computed in; the
/// rank is relative to that batch's score ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub rank: usize,
    pub name: String,
    pub score: f32,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::new("resume.txt".to_string(), "Python developer".to_string());
        assert_eq!(doc.name, "resume.txt");
        assert_eq!(doc.raw_text, "Python developer");
    }

    #[test]
    fn test_scored_result_serializes() {
        let result = ScoredResult {
            rank: 1,
            name: "resume.txt".to_string(),
            score: 7.25,
            summary: "line one\nline two".to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"rank\":1"));
        assert!(json.contains("resume.txt"));
    }
}
