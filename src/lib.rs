//! Resume ranker library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeRankerError};
pub use processing::analyzer::MatchEngine;
pub use processing::document::{Document, ScoredResult};
