//! TF-IDF vector space and cosine similarity over one batch

use std::collections::{HashMap, HashSet};

/// Scores normalized resume texts against a normalized job description.
///
/// The vector space is rebuilt per batch over [job description] + [resumes],
/// using unigram and bigram terms capped at `max_features`. Construction
/// cannot fail: a degenerate corpus falls back to token-overlap similarity.
pub struct SimilarityScorer {
    max_features: usize,
}

impl SimilarityScorer {
    pub fn new(max_features: usize) -> Self {
        Self { max_features }
    }

    /// Cosine similarity of each document to the job description, in [0, 1],
    /// one value per input document in input order.
    pub fn score_batch(&self, jd_text: &str, doc_texts: &[String]) -> Vec<f32> {
        let mut corpus: Vec<Vec<String>> = Vec::with_capacity(doc_texts.len() + 1);
        corpus.push(Self::terms(jd_text));
        for text in doc_texts {
            corpus.push(Self::terms(text));
        }

        let vocabulary = self.build_vocabulary(&corpus);
        if vocabulary.is_empty() {
            // Degenerate corpus (nothing survived normalization): fall back
            // to plain token overlap against the job description.
            return doc_texts
                .iter()
                .map(|text| jaccard_overlap(jd_text, text))
                .collect();
        }

        let idf = Self::inverse_document_frequencies(&corpus, &vocabulary);
        let vectors: Vec<Vec<f32>> = corpus
            .iter()
            .map(|terms| Self::tfidf_vector(terms, &vocabulary, &idf))
            .collect();

        let jd_vector = &vectors[0];
        vectors[1..]
            .iter()
            .map(|doc_vector| cosine_similarity(jd_vector, doc_vector).clamp(0.0, 1.0))
            .collect()
    }

    /// Unigrams plus adjacent-pair bigrams of a normalized text.
    fn terms(text: &str) -> Vec<String> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();

        for pair in tokens.windows(2) {
            terms.push(format!("{} {}", pair[0], pair[1]));
        }

        terms
    }

    /// Top `max_features` terms by corpus-wide frequency, ties broken
    /// alphabetically; maps term -> vector index.
    fn build_vocabulary(&self, corpus: &[Vec<String>]) -> HashMap<String, usize> {
        let mut frequencies: HashMap<&str, usize> = HashMap::new();
        for terms in corpus {
            for term in terms {
                *frequencies.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(&str, usize)> = frequencies.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        ranked
            .into_iter()
            .enumerate()
            .map(|(index, (term, _))| (term.to_string(), index))
            .collect()
    }

    /// Smoothed IDF per vocabulary term: ln((1 + n) / (1 + df)) + 1
    fn inverse_document_frequencies(
        corpus: &[Vec<String>],
        vocabulary: &HashMap<String, usize>,
    ) -> Vec<f32> {
        let mut document_frequencies = vec![0usize; vocabulary.len()];
        for terms in corpus {
            let distinct: HashSet<&String> = terms.iter().collect();
            for term in distinct {
                if let Some(&index) = vocabulary.get(term) {
                    document_frequencies[index] += 1;
                }
            }
        }

        let n_docs = corpus.len() as f32;
        document_frequencies
            .into_iter()
            .map(|df| ((1.0 + n_docs) / (1.0 + df as f32)).ln() + 1.0)
            .collect()
    }

    /// L2-normalized TF-IDF vector for one document.
    fn tfidf_vector(
        terms: &[String],
        vocabulary: &HashMap<String, usize>,
        idf: &[f32],
    ) -> Vec<f32> {
        let mut vector = vec![0.0f32; vocabulary.len()];
        for term in terms {
            if let Some(&index) = vocabulary.get(term) {
                vector[index] += idf[index];
            }
        }

        let norm: f32 = vector.iter().map(|w| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for weight in &mut vector {
                *weight /= norm;
            }
        }

        vector
    }
}

/// Cosine similarity of two equal-length vectors; 0 when either is zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}

/// Token-overlap similarity: |shared| / |union| over whitespace tokens,
/// 0 when the union is empty. Deterministic, never fails.
pub fn jaccard_overlap(text1: &str, text2: &str) -> f32 {
    let set1: HashSet<&str> = text1.split_whitespace().collect();
    let set2: HashSet<&str> = text2.split_whitespace().collect();

    let union = set1.union(&set2).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = set1.intersection(&set2).count();
    intersection as f32 / union as f32
}
