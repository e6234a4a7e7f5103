//! Match engine coordinating the scoring pipeline

use crate::config::Config;
use crate::error::{Result, ResumeRankerError};
use crate::processing::document::{Document, ScoredResult};
use crate::processing::normalizer::TextNormalizer;
use crate::processing::ranker::{self, Unranked};
use crate::processing::similarity::SimilarityScorer;
use crate::processing::skills::SkillExtractor;
use crate::processing::summary::SummaryGenerator;
use log::{debug, info};

/// One-shot batch scorer: normalize, vectorize, score, summarize, rank.
///
/// Holds only read-only resources (stopwords, lemmatizer, compiled skill
/// matcher), so one engine can serve any number of sequential batches with
/// no state carried between them.
pub struct MatchEngine {
    normalizer: TextNormalizer,
    skill_extractor: SkillExtractor,
    similarity: SimilarityScorer,
    summary: SummaryGenerator,
    skill_weight: f32,
}

impl MatchEngine {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            normalizer: TextNormalizer::default(),
            skill_extractor: SkillExtractor::new(&config.vocabulary)?,
            similarity: SimilarityScorer::new(config.processing.max_features),
            summary: SummaryGenerator::new(
                config.scoring.pass_threshold,
                config.scoring.max_listed_skills,
            ),
            skill_weight: config.scoring.skill_weight,
        })
    }

    /// Score every document against the job description and return the
    /// ranked, summarized batch.
    ///
    /// Rejects a blank job description and an empty batch up front; all
    /// downstream degeneracy (empty vocabulary, zero-token documents) is
    /// absorbed by the similarity fallback and never surfaces as an error.
    pub fn score(&self, job_description: &str, documents: &[Document]) -> Result<Vec<ScoredResult>> {
        if job_description.trim().is_empty() {
            return Err(ResumeRankerError::InvalidInput(
                "Job description must not be empty".to_string(),
            ));
        }
        if documents.is_empty() {
            return Err(ResumeRankerError::EmptyBatch(
                "Batch contains no documents to score".to_string(),
            ));
        }

        info!("Scoring batch of {} resumes", documents.len());

        let jd_skills = self.skill_extractor.extract(job_description);
        debug!("Job description skills: {:?}", jd_skills);

        let normalized_jd = self.normalizer.normalize(job_description);
        let normalized_docs: Vec<String> = documents
            .iter()
            .map(|doc| self.normalizer.normalize(&doc.raw_text))
            .collect();

        let similarities = self.similarity.score_batch(&normalized_jd, &normalized_docs);

        let unranked: Vec<Unranked> = documents
            .iter()
            .zip(similarities.iter())
            .map(|(doc, &similarity)| {
                let resume_skills = self.skill_extractor.extract(&doc.raw_text);
                let matched = jd_skills.intersection(&resume_skills).count();

                let text_score = similarity * 10.0;
                let skill_score = if jd_skills.is_empty() {
                    0.0
                } else {
                    matched as f32 / jd_skills.len() as f32 * 10.0
                };
                let blended = self.skill_weight * skill_score
                    + (1.0 - self.skill_weight) * text_score;
                let score = round2(blended.clamp(0.0, 10.0));

                debug!("{}: similarity {:.4}, score {:.2}", doc.name, similarity, score);

                Unranked {
                    name: doc.name.clone(),
                    score,
                    summary: self.summary.summarize(&jd_skills, &resume_skills, score),
                }
            })
            .collect();

        Ok(ranker::rank(unranked))
    }
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> MatchEngine {
        MatchEngine::new(&Config::default()).unwrap()
    }

    fn doc(name: &str, text: &str) -> Document {
        Document::new(name.to_string(), text.to_string())
    }

    #[test]
    fn test_blank_job_description_rejected() {
        let result = engine().score("   \n ", &[doc("a.txt", "Python developer")]);
        assert!(matches!(result, Err(ResumeRankerError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_batch_rejected() {
        let result = engine().score("Python developer wanted", &[]);
        assert!(matches!(result, Err(ResumeRankerError::EmptyBatch(_))));
    }

    #[test]
    fn test_scores_stay_in_range() {
        let docs = vec![
            doc("a.txt", "Python developer with years of Python experience"),
            doc("b.txt", "!!!"),
            doc("c.txt", "Completely unrelated pastry chef"),
        ];
        let results = engine()
            .score("Looking for a Python developer", &docs)
            .unwrap();

        for result in results {
            assert!((0.0..=10.0).contains(&result.score));
        }
    }

    #[test]
    fn test_identical_text_scores_maximum() {
        let jd = "Senior Python engineer with AWS and SQL experience";
        let results = engine().score(jd, &[doc("clone.txt", jd)]).unwrap();

        assert_eq!(results[0].score, 10.0);
        assert_eq!(results[0].rank, 1);
        assert!(results[0].summary.starts_with("WHY YES:"));
    }

    #[test]
    fn test_end_to_end_ranking_scenario() {
        let jd = "Looking for a Python developer with AWS and SQL experience";
        let docs = vec![
            doc("resume_b.txt", "Graphic designer skilled in Photoshop"),
            doc("resume_a.txt", "Experienced Python and AWS engineer"),
        ];
        let results = engine().score(jd, &docs).unwrap();

        let a = results.iter().find(|r| r.name == "resume_a.txt").unwrap();
        let b = results.iter().find(|r| r.name == "resume_b.txt").unwrap();

        assert_eq!(a.rank, 1);
        assert!(a.score > b.score);
        assert!(a.summary.contains("python"));
        assert!(a.summary.contains("aws"));
        assert!(b.summary.contains("Missing critical skills:"));
        assert!(b.summary.contains("aws"));
        assert!(b.summary.contains("python"));
        assert!(b.summary.contains("sql"));
    }

    #[test]
    fn test_ranks_are_contiguous() {
        let docs = vec![
            doc("a.txt", "Python developer"),
            doc("b.txt", "Python developer"),
            doc("c.txt", "Java developer"),
        ];
        let results = engine().score("Python developer needed", &docs).unwrap();

        let ranks: Vec<usize> = results.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let docs = vec![
            doc("first.txt", "Rust systems programmer"),
            doc("second.txt", "Rust systems programmer"),
        ];
        let results = engine().score("Rust systems programmer", &docs).unwrap();

        assert_eq!(results[0].name, "first.txt");
        assert_eq!(results[1].name, "second.txt");
        assert_eq!(results[0].score, results[1].score);
    }

    #[test]
    fn test_symbol_only_resume_scores_zero() {
        let docs = vec![doc("noise.txt", "@@@ ### 12345")];
        let results = engine().score("Python developer", &docs).unwrap();

        assert_eq!(results[0].score, 0.0);
        assert!(results[0].summary.starts_with("WHY NO:"));
    }

    #[test]
    fn test_skill_weight_blending() {
        let mut config = Config::default();
        config.scoring.skill_weight = 1.0;
        let engine = MatchEngine::new(&config).unwrap();

        // pure skill coverage: 2 of 3 JD skills present
        let jd = "Looking for a Python developer with AWS and SQL experience";
        let results = engine
            .score(jd, &[doc("a.txt", "Experienced Python and AWS engineer")])
            .unwrap();

        assert!((results[0].score - 6.67).abs() < 0.01);
    }
}
