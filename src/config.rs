//! Configuration management for the resume ranker

use crate::error::{Result, ResumeRankerError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub processing: ProcessingConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
    /// Canonical skill name -> surface-form variants, matched case-insensitively
    pub vocabulary: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Cap on the TF-IDF vocabulary size (unigrams + bigrams)
    pub max_features: usize,
    /// Upper bound on resumes per batch
    pub max_resumes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Scores at or above this value take the positive summary branch
    pub pass_threshold: f32,
    /// Weight of skill coverage in the final score; 0.0 = pure textual similarity
    pub skill_weight: f32,
    /// Max skill names listed in a summary line
    pub max_listed_skills: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Csv,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            processing: ProcessingConfig {
                max_features: 1000,
                max_resumes: 25,
            },
            scoring: ScoringConfig {
                pass_threshold: 5.0,
                skill_weight: 0.0,
                max_listed_skills: 5,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
            },
            vocabulary: Self::default_vocabulary(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeRankerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeRankerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ranker")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.scoring.skill_weight) {
            return Err(ResumeRankerError::Configuration(format!(
                "scoring.skill_weight must be in [0, 1], got {}",
                self.scoring.skill_weight
            )));
        }
        if !(0.0..=10.0).contains(&self.scoring.pass_threshold) {
            return Err(ResumeRankerError::Configuration(format!(
                "scoring.pass_threshold must be in [0, 10], got {}",
                self.scoring.pass_threshold
            )));
        }
        if self.processing.max_features == 0 {
            return Err(ResumeRankerError::Configuration(
                "processing.max_features must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Built-in skill table: canonical name -> surface variants
    fn default_vocabulary() -> BTreeMap<String, Vec<String>> {
        let entries: [(&str, &[&str]); 22] = [
            ("python", &["python", "py"]),
            ("react", &["react", "react.js", "reactjs"]),
            ("node", &["node.js", "nodejs", "node"]),
            ("javascript", &["javascript", "js"]),
            ("sql", &["sql", "mysql", "postgresql"]),
            ("aws", &["aws", "amazon web services"]),
            ("azure", &["azure"]),
            ("django", &["django"]),
            ("flask", &["flask"]),
            ("spring", &["spring"]),
            ("java", &["java"]),
            ("html", &["html", "html5"]),
            ("css", &["css", "css3"]),
            ("angular", &["angular"]),
            ("mongodb", &["mongodb", "mongo"]),
            ("docker", &["docker"]),
            ("kubernetes", &["kubernetes", "k8s"]),
            ("git", &["git"]),
            ("agile", &["agile"]),
            ("scrum", &["scrum"]),
            ("machine learning", &["machine learning", "ml"]),
            ("data science", &["data science"]),
        ];

        entries
            .iter()
            .map(|(name, variants)| {
                (
                    name.to_string(),
                    variants.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect()
    }
}
