//! Resume ranker: score and rank resumes against a job description

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_ranker::cli::{self, Cli, Commands, ConfigAction};
use resume_ranker::config::OutputFormat;
use resume_ranker::input::InputManager;
use resume_ranker::output::{RankingReport, ReportGenerator};
use resume_ranker::{Config, Document, MatchEngine, Result, ResumeRankerError};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Rank {
            job,
            resumes,
            output,
            save,
            detailed,
        } => run_rank(job, resumes, output, save, detailed, config).await,

        Commands::Config { action } => run_config(action, config),
    }
}

async fn run_rank(
    job: PathBuf,
    resumes: Vec<PathBuf>,
    output: String,
    save: Option<PathBuf>,
    detailed: bool,
    config: Config,
) -> Result<()> {
    cli::validate_file_extension(&job, &["pdf", "txt", "md"])
        .map_err(|e| ResumeRankerError::InvalidInput(format!("Job description file: {}", e)))?;

    for resume in &resumes {
        cli::validate_file_extension(resume, &["pdf", "txt", "md"])
            .map_err(|e| ResumeRankerError::InvalidInput(format!("Resume file: {}", e)))?;
    }

    if resumes.len() > config.processing.max_resumes {
        return Err(ResumeRankerError::InvalidInput(format!(
            "Too many resumes: {} (limit {})",
            resumes.len(),
            config.processing.max_resumes
        )));
    }

    let output_format = cli::parse_output_format(&output).map_err(ResumeRankerError::InvalidInput)?;

    let mut input_manager = InputManager::new();

    info!("Extracting job description: {}", job.display());
    let job_text = input_manager.extract_text(&job).await?;

    let progress = ProgressBar::new(resumes.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("Invalid progress template"),
    );

    // Per-document extraction failures drop the document, not the batch.
    let mut documents: Vec<Document> = Vec::with_capacity(resumes.len());
    for resume in &resumes {
        progress.set_message(format!("{}", resume.display()));
        match input_manager.extract_document(resume).await {
            Ok(document) => documents.push(document),
            Err(e) => warn!("Skipping {}: {}", resume.display(), e),
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    if documents.is_empty() {
        return Err(ResumeRankerError::EmptyBatch(
            "No resume produced any usable text".to_string(),
        ));
    }

    let engine = MatchEngine::new(&config)?;
    let results = engine.score(&job_text, &documents)?;

    let job_name = job
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| job.to_string_lossy().to_string());
    let report = RankingReport::new(job_name, results);

    let use_colors = config.output.color_output && output_format == OutputFormat::Console;
    let generator = ReportGenerator::new(use_colors, detailed);
    let rendered = generator.format(&report, &output_format)?;

    match save {
        Some(path) => {
            std::fs::write(&path, &rendered)?;
            println!("Results written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn run_config(action: Option<ConfigAction>, config: Config) -> Result<()> {
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            let content = toml::to_string_pretty(&config).map_err(|e| {
                ResumeRankerError::Configuration(format!("Failed to render config: {}", e))
            })?;
            println!("{}", content);
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("Configuration reset to defaults");
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path().display());
        }
    }

    Ok(())
}
