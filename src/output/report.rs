//! Ranking report envelope

use crate::processing::document::ScoredResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One batch's ranked results plus generation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    /// Identifier of the job description the batch was scored against
    pub job_name: String,

    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Number of resumes that survived extraction and were scored
    pub total_resumes: usize,

    /// Ranked results, best match first
    pub results: Vec<ScoredResult>,
}

impl RankingReport {
    pub fn new(job_name: String, results: Vec<ScoredResult>) -> Self {
        Self {
            job_name,
            generated_at: Utc::now(),
            total_resumes: results.len(),
            results,
        }
    }
}
