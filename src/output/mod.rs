//! Result presentation: report envelope and output formatters

pub mod formatter;
pub mod report;

pub use formatter::ReportGenerator;
pub use report::RankingReport;
