//! Output formatters: console table, JSON, CSV export

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::RankingReport;
use colored::Colorize;

/// Trait for rendering a ranking report into one output format
pub trait OutputFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colored scores
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured consumption
pub struct JsonFormatter {
    pretty: bool,
}

/// CSV formatter for tabular export
pub struct CsvFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colored_score(&self, score: f32) -> String {
        let rendered = format!("{:.2}/10", score);
        if !self.use_colors {
            return rendered;
        }

        if score >= 7.0 {
            rendered.green().bold().to_string()
        } else if score >= 4.0 {
            rendered.yellow().bold().to_string()
        } else {
            rendered.red().bold().to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!(
            "Ranked {} resumes against {}\n\n",
            report.total_resumes, report.job_name
        ));

        for result in &report.results {
            out.push_str(&format!(
                "#{:<3} {:<40} {}\n",
                result.rank,
                result.name,
                self.colored_score(result.score)
            ));

            if self.detailed {
                for line in result.summary.lines() {
                    out.push_str(&format!("     {}\n", line));
                }
                out.push('\n');
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for CsvFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut out = String::from("Rank,Name,Score,Summary\n");

        for result in &report.results {
            let row = [
                result.rank.to_string(),
                result.name.clone(),
                format!("{:.2}", result.score),
                flatten_summary(&result.summary),
            ];
            let quoted: Vec<String> = row.iter().map(|field| csv_field(field)).collect();
            out.push_str(&quoted.join(","));
            out.push('\n');
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Csv
    }
}

/// Collapse a multi-line summary into one CSV-safe line with a visible joiner.
pub fn flatten_summary(summary: &str) -> String {
    summary
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Quote a CSV field when it contains a delimiter, quote, or line break.
fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Dispatches a report to the formatter for the requested output format
pub struct ReportGenerator {
    console: ConsoleFormatter,
    json: JsonFormatter,
    csv: CsvFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console: ConsoleFormatter::new(use_colors, detailed),
            json: JsonFormatter::new(true),
            csv: CsvFormatter,
        }
    }

    pub fn format(&self, report: &RankingReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console.format_report(report),
            OutputFormat::Json => self.json.format_report(report),
            OutputFormat::Csv => self.csv.format_report(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::ScoredResult;

    fn sample_report() -> RankingReport {
        RankingReport::new(
            "job.txt".to_string(),
            vec![
                ScoredResult {
                    rank: 1,
                    name: "alice.pdf".to_string(),
                    score: 7.5,
                    summary: "WHY YES:\n- line two\n- line three".to_string(),
                },
                ScoredResult {
                    rank: 2,
                    name: "bob, jr.txt".to_string(),
                    score: 2.0,
                    summary: "WHY NO:\n- reason".to_string(),
                },
            ],
        )
    }

    #[test]
    fn test_flatten_summary_replaces_line_breaks() {
        let flat = flatten_summary("WHY YES:\n- first\n- second");
        assert_eq!(flat, "WHY YES: | - first | - second");
        assert!(!flat.contains('\n'));
    }

    #[test]
    fn test_csv_has_header_and_flattened_rows() {
        let csv = CsvFormatter.format_report(&sample_report()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Rank,Name,Score,Summary");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1,alice.pdf,7.50,"));
        assert!(lines[1].contains("WHY YES: | - line two | - line three"));
    }

    #[test]
    fn test_csv_quotes_fields_with_delimiters() {
        let csv = CsvFormatter.format_report(&sample_report()).unwrap();

        // a name containing a comma must be quoted
        assert!(csv.contains("\"bob, jr.txt\""));
    }

    #[test]
    fn test_csv_field_escapes_quotes() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_json_round_trips() {
        let json = JsonFormatter::new(false)
            .format_report(&sample_report())
            .unwrap();
        let parsed: RankingReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.total_resumes, 2);
        assert_eq!(parsed.results[0].name, "alice.pdf");
    }

    #[test]
    fn test_console_lists_every_rank() {
        let out = ConsoleFormatter::new(false, false)
            .format_report(&sample_report())
            .unwrap();

        assert!(out.contains("#1"));
        assert!(out.contains("#2"));
        assert!(out.contains("alice.pdf"));
        assert!(out.contains("7.50/10"));
    }

    #[test]
    fn test_console_detailed_includes_summary_lines() {
        let out = ConsoleFormatter::new(false, true)
            .format_report(&sample_report())
            .unwrap();

        assert!(out.contains("WHY YES:"));
        assert!(out.contains("- line two"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::new(false, false);
        let report = sample_report();

        assert!(generator
            .format(&report, &OutputFormat::Csv)
            .unwrap()
            .starts_with("Rank,"));
        assert!(generator
            .format(&report, &OutputFormat::Json)
            .unwrap()
            .starts_with('{'));
    }
}
