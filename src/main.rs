//! Resume profiler: skill extraction and job-fit scoring from the command line

use clap::Parser;
use log::{error, info};
use resume_profiler::cli::{self, Cli, Commands, ConfigAction};
use resume_profiler::config::Config;
use resume_profiler::error::{Result, ResumeProfilerError};
use resume_profiler::input::manager::InputManager;
use resume_profiler::output::formatter::{formatter_for, save_reports};
use resume_profiler::output::report::ProfilingReport;
use resume_profiler::processing::job_parser::JobParser;
use resume_profiler::processing::pipeline::{Pipeline, TargetProfile};
use resume_profiler::processing::scoring::ScoringEngine;
use resume_profiler::processing::skill_extractor::{SkillExtractor, SkillProfile};
use resume_profiler::processing::text_cleaner::TextCleaner;
use resume_profiler::roles::builtin_roles;
use std::path::Path;
use std::process;

const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown", "json"];

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            format,
            output,
        } => {
            info!("Starting resume-to-job analysis");

            cli::validate_file_extension(&resume, SUPPORTED_EXTENSIONS)
                .map_err(|e| ResumeProfilerError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, SUPPORTED_EXTENSIONS)
                .map_err(|e| ResumeProfilerError::InvalidInput(format!("Job file: {}", e)))?;

            let mut input_manager = InputManager::new();
            let cleaner = TextCleaner::new();

            let resume_profile = extract_profile(&mut input_manager, &cleaner, &resume)?;

            let job_text = input_manager.extract_text(&job)?;
            let job_parser = JobParser::new()?;
            let job_profile = job_parser.extract_required_skills(&cleaner.clean(&job_text));

            let target_name = job
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "Job Description".to_string());
            let targets = vec![TargetProfile::from_job_profile(&target_name, job_profile)];

            run_report(&config, &resume_profile, &targets, &format, output.as_deref())
        }

        Commands::Profile {
            resume,
            top,
            format,
            output,
        } => {
            info!("Starting multi-role profiling");

            cli::validate_file_extension(&resume, SUPPORTED_EXTENSIONS)
                .map_err(|e| ResumeProfilerError::InvalidInput(format!("Resume file: {}", e)))?;

            let mut input_manager = InputManager::new();
            let cleaner = TextCleaner::new();
            let resume_profile = extract_profile(&mut input_manager, &cleaner, &resume)?;

            let targets: Vec<TargetProfile> = builtin_roles()
                .iter()
                .map(TargetProfile::from_role)
                .collect();

            let top_n = top.unwrap_or(config.report.top_roles);
            run_report_with_top(
                &config,
                &resume_profile,
                &targets,
                &format,
                output.as_deref(),
                top_n,
            )
        }

        Commands::Roles { category } => {
            let roles = builtin_roles();
            for role in roles.iter().filter(|r| {
                category
                    .as_ref()
                    .map_or(true, |c| r.category.eq_ignore_ascii_case(c))
            }) {
                println!("{} [{}]", role.name, role.category);
                println!("  skills: {}", role.skills.join(", "));
            }
            Ok(())
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("Current Configuration\n");
                    println!("Scoring Weights:");
                    println!("  Coverage: {:.1}%", config.scoring.coverage_weight * 100.0);
                    println!("  Diversity: {:.1}%", config.scoring.diversity_weight * 100.0);
                    println!("  Keywords: {:.1}%", config.scoring.keyword_weight * 100.0);
                    println!("Output Format: {:?}", config.output.format);
                    println!("Top Roles Explained: {}", config.report.top_roles);
                }
                Some(ConfigAction::Reset) => {
                    let default_config = Config::default();
                    default_config.save()?;
                    println!("Configuration reset to defaults");
                }
            }
            Ok(())
        }
    }
}

fn extract_profile(
    input_manager: &mut InputManager,
    cleaner: &TextCleaner,
    path: &Path,
) -> Result<SkillProfile> {
    let raw_text = input_manager.extract_text(path)?;
    let cleaned = cleaner.clean(&raw_text);

    let extractor = SkillExtractor::new()?;
    Ok(extractor.extract(&cleaned))
}

fn run_report(
    config: &Config,
    candidate: &SkillProfile,
    targets: &[TargetProfile],
    format: &str,
    output_dir: Option<&Path>,
) -> Result<()> {
    run_report_with_top(
        config,
        candidate,
        targets,
        format,
        output_dir,
        config.report.top_roles,
    )
}

fn run_report_with_top(
    config: &Config,
    candidate: &SkillProfile,
    targets: &[TargetProfile],
    format: &str,
    output_dir: Option<&Path>,
    top_n: usize,
) -> Result<()> {
    let output_format =
        cli::parse_output_format(format).map_err(ResumeProfilerError::InvalidInput)?;

    let scorer = ScoringEngine::with_weights(
        config.scoring.coverage_weight,
        config.scoring.diversity_weight,
        config.scoring.keyword_weight,
    );
    let pipeline = Pipeline::with_scorer(scorer);

    let ranked = pipeline.rank(candidate, targets);
    let report = ProfilingReport::build(&candidate.skills, &ranked, top_n);

    let formatter = formatter_for(&output_format, config.output.color_output);
    println!("{}", formatter.format_report(&report)?);

    if let Some(dir) = output_dir {
        save_reports(&report, dir)?;
        println!("\nReports written to {}", dir.display());
    }

    Ok(())
}
