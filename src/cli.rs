//! CLI interface for the resume profiler

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-profiler")]
#[command(about = "Resume skill profiling and job-fit scoring tool")]
#[command(
    long_about = "Extract skills from resumes, match them against job descriptions or a built-in role database, and generate ranked fit reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a resume against one job description
    Analyze {
        /// Path to resume file (PDF, TXT, MD, JSON)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, TXT, MD, JSON)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json, text, markdown
        #[arg(short, long, default_value = "console")]
        format: String,

        /// Directory to write analysis_report.json and analysis_report.txt
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rank a resume against the built-in job role database
    Profile {
        /// Path to resume file (PDF, TXT, MD, JSON)
        #[arg(short, long)]
        resume: PathBuf,

        /// Number of top roles to explain in detail
        #[arg(short, long)]
        top: Option<usize>,

        /// Output format: console, json, text, markdown
        #[arg(short, long, default_value = "console")]
        format: String,

        /// Directory to write analysis_report.json and analysis_report.txt
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect the built-in job role database
    Roles {
        /// Only show roles in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "text" | "txt" => Ok(crate::config::OutputFormat::Text),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, text, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
