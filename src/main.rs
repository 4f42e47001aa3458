use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use placement_ai::config::AppConfig;
use placement_ai::telemetry::{self, TelemetryError};
use placement_ai::{
    batch_calculate, calculate_eligibility, extract_skills, match_skills, suggest_skills,
    RecordError, RequiredSkills,
};

#[derive(Parser, Debug)]
#[command(
    name = "placement-ai",
    about = "Score student candidates against campus placement job postings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one candidate against one job posting
    Score(ScoreArgs),
    /// Evaluate many candidates against one job and rank them
    Batch(BatchArgs),
    /// Match a skill list against mandatory/preferred requirements
    MatchSkills(MatchSkillsArgs),
    /// Extract known skills from free-form resume text
    ExtractSkills(ExtractSkillsArgs),
    /// Suggest skills to learn next for a set of current skills
    SuggestSkills(SuggestSkillsArgs),
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Path to the candidate record (JSON object)
    candidate: PathBuf,
    /// Path to the job record (JSON object)
    job: PathBuf,
    /// Skill match percentage precomputed by an earlier stage
    #[arg(long)]
    skill_match: Option<f64>,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Path to the candidate records (JSON array of objects)
    candidates: PathBuf,
    /// Path to the job record (JSON object)
    job: PathBuf,
}

#[derive(Args, Debug)]
struct MatchSkillsArgs {
    /// Candidate skills, repeatable
    #[arg(long = "skill")]
    skills: Vec<String>,
    /// Mandatory requirement, repeatable
    #[arg(long = "mandatory")]
    mandatory: Vec<String>,
    /// Preferred requirement, repeatable
    #[arg(long = "preferred")]
    preferred: Vec<String>,
}

#[derive(Args, Debug)]
struct ExtractSkillsArgs {
    /// Path to a plain-text resume
    text: PathBuf,
}

#[derive(Args, Debug)]
struct SuggestSkillsArgs {
    /// Current skills, repeatable
    #[arg(long = "skill")]
    skills: Vec<String>,
    /// Target role the candidate is aiming for
    #[arg(long, default_value = "")]
    target_role: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to render output: {0}")]
    Render(#[source] serde_json::Error),
}

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let config = AppConfig::load();
    telemetry::init(&config.telemetry)?;

    let cli = Cli::parse();
    match cli.command {
        Command::Score(args) => {
            let candidate: Value = read_json(&args.candidate)?;
            let job: Value = read_json(&args.job)?;
            let report = calculate_eligibility(&candidate, &job, args.skill_match)?;
            print_json(&report)
        }
        Command::Batch(args) => {
            let candidates: Vec<Value> = read_json(&args.candidates)?;
            let job: Value = read_json(&args.job)?;
            let ranked = batch_calculate(&candidates, &job)?;
            print_json(&ranked)
        }
        Command::MatchSkills(args) => {
            let required = RequiredSkills {
                mandatory: args.mandatory,
                preferred: args.preferred,
            };
            print_json(&match_skills(&args.skills, &required))
        }
        Command::ExtractSkills(args) => {
            let text = fs::read_to_string(&args.text).map_err(|source| CliError::Io {
                path: args.text.clone(),
                source,
            })?;
            print_json(&extract_skills(&text))
        }
        Command::SuggestSkills(args) => {
            print_json(&suggest_skills(&args.skills, &args.target_role))
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value).map_err(CliError::Render)?;
    println!("{rendered}");
    Ok(())
}
