//! Fixed-template match summaries

use std::collections::BTreeSet;

/// Renders the five-line "why yes" / "why no" rationale for one scored
/// resume. Output is deterministic template text, never free-form.
pub struct SummaryGenerator {
    pass_threshold: f32,
    max_listed_skills: usize,
}

impl SummaryGenerator {
    pub fn new(pass_threshold: f32, max_listed_skills: usize) -> Self {
        Self {
            pass_threshold,
            max_listed_skills,
        }
    }

    /// Five lines in both branches; the branch flips at `pass_threshold`,
    /// inclusive (a score exactly at the threshold passes).
    pub fn summarize(
        &self,
        jd_skills: &BTreeSet<String>,
        resume_skills: &BTreeSet<String>,
        score: f32,
    ) -> String {
        let matched: Vec<&String> = jd_skills.intersection(resume_skills).collect();
        let missing: Vec<&String> = jd_skills.difference(resume_skills).collect();

        if score >= self.pass_threshold {
            [
                "WHY YES:".to_string(),
                format!(
                    "- Strong skill alignment with {} matching technical skills",
                    matched.len()
                ),
                format!("- Key matches: {}", self.skill_list(&matched)),
                format!("- High content similarity score of {:.1}/10", score),
                "- Recommended for further consideration".to_string(),
            ]
            .join("\n")
        } else {
            [
                "WHY NO:".to_string(),
                format!(
                    "- Low similarity score of {:.1}/10 indicates a weak match",
                    score
                ),
                format!("- Missing critical skills: {}", self.skill_list(&missing)),
                format!(
                    "- Only {} out of {} required skills found: {}",
                    matched.len(),
                    jd_skills.len(),
                    self.skill_list(&matched)
                ),
                "- Not recommended for this position".to_string(),
            ]
            .join("\n")
        }
    }

    fn skill_list(&self, skills: &[&String]) -> String {
        if skills.is_empty() {
            return "none".to_string();
        }

        skills
            .iter()
            .take(self.max_listed_skills)
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
