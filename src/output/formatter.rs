//! Report renderers for console, JSON, text and markdown output

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ProfilingReport;
use colored::Colorize;
use log::info;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Renders a profiling report into one output format.
pub trait OutputFormatter {
    fn format_report(&self, report: &ProfilingReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct ConsoleFormatter {
    use_colors: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct TextFormatter;

pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "red" => text.red().to_string(),
            "cyan" => text.cyan().to_string(),
            "bold" => text.bold().to_string(),
            _ => text.to_string(),
        }
    }

    fn score_color(score: f64) -> &'static str {
        if score >= 60.0 {
            "green"
        } else if score >= 40.0 {
            "yellow"
        } else {
            "red"
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ProfilingReport) -> Result<String> {
        let mut lines = Vec::new();

        lines.push(self.paint("Resume Profiling Report", "bold"));
        lines.push(format!(
            "Candidate skills found: {}",
            report.candidate_skills.len()
        ));
        lines.push(format!(
            "Best fit: {} ({}%)",
            self.paint(&report.best_fit_role, "cyan"),
            report.best_fit_score
        ));
        lines.push(String::new());

        for fit in &report.top_fits {
            let header = format!("#{} {} - {}%", fit.rank, fit.role, fit.score);
            lines.push(self.paint(&header, Self::score_color(fit.score)));
            for reason in &fit.why_it_fits {
                lines.push(format!("  + {}", reason));
            }
            if !fit.matched_skills.is_empty() {
                lines.push(format!("  matched: {}", fit.matched_skills.join(", ")));
            }
            for area in &fit.growth_areas {
                lines.push(format!("  ! {}", area));
            }
            for (idx, action) in fit.action_items.iter().enumerate() {
                lines.push(format!("  {}. {}", idx + 1, action));
            }
            lines.push(String::new());
        }

        lines.push(format!("Total roles analyzed: {}", report.roles.len()));
        Ok(lines.join("\n"))
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
    fn format_report(&self, report: &ProfilingReport) -> Result<String> {
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

impl OutputFormatter for TextFormatter {
    fn format_report(&self, report: &ProfilingReport) -> Result<String> {
        let mut lines = vec![
            "=".repeat(70),
            "                    RESUME PROFILING REPORT".to_string(),
            "=".repeat(70),
            String::new(),
            format!("Candidate Skills Found: {}", report.candidate_skills.len()),
            format!(
                "Skills: {}{}",
                report
                    .candidate_skills
                    .iter()
                    .take(20)
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                if report.candidate_skills.len() > 20 { "..." } else { "" }
            ),
            String::new(),
            "-".repeat(70),
            format!(
                "BEST FIT: {} ({}%)",
                report.best_fit_role, report.best_fit_score
            ),
            "-".repeat(70),
            String::new(),
            "=".repeat(70),
            format!("              TOP {} RECOMMENDED JOB ROLES", report.top_fits.len()),
            "=".repeat(70),
        ];

        for fit in &report.top_fits {
            lines.push(String::new());
            lines.push("-".repeat(70));
            lines.push(format!("#{} - {}", fit.rank, fit.role.to_uppercase()));
            lines.push("-".repeat(70));
            lines.push(format!("   Match Score: {}%", fit.score));
            lines.push(format!("   [{}]", score_bar(fit.score, 20)));
            lines.push(String::new());

            lines.push("   WHY THIS ROLE FITS YOU:".to_string());
            for reason in &fit.why_it_fits {
                lines.push(format!("      * {}", reason));
            }
            lines.push(String::new());

            lines.push(format!("   MATCHING SKILLS ({}):", fit.matched_skills.len()));
            if fit.matched_skills.is_empty() {
                lines.push("      None".to_string());
            } else {
                for row in fit.matched_skills.chunks(4) {
                    lines.push(format!("      - {}", row.join(", ")));
                }
            }
            lines.push(String::new());

            if !fit.growth_areas.is_empty() {
                lines.push("   AREAS FOR GROWTH:".to_string());
                for area in &fit.growth_areas {
                    lines.push(format!("      ! {}", area));
                }
                lines.push(String::new());
            }

            if !fit.action_items.is_empty() {
                lines.push("   RECOMMENDED ACTIONS:".to_string());
                for (idx, action) in fit.action_items.iter().enumerate() {
                    lines.push(format!("      {}. {}", idx + 1, action));
                }
            }
            lines.push(String::new());
        }

        lines.push(String::new());
        lines.push("=".repeat(70));
        lines.push("              ALL POSITIONS ANALYSIS (Top 15)".to_string());
        lines.push("=".repeat(70));

        // Group the top entries by category, keeping rank order inside each.
        let mut by_category: BTreeMap<&str, Vec<&crate::output::report::RoleEntry>> =
            BTreeMap::new();
        for role in report.roles.iter().take(15) {
            by_category.entry(role.category.as_str()).or_default().push(role);
        }

        for (category, roles) in &by_category {
            lines.push(String::new());
            lines.push("-".repeat(70));
            lines.push(category.to_uppercase());
            lines.push("-".repeat(70));

            for role in roles {
                lines.push(String::new());
                lines.push(format!("  {}", role.role));
                lines.push(format!("     [{}] {}%", score_bar(role.score, 10), role.score));
                lines.push(format!(
                    "     Matched: {}{}",
                    truncate_list(&role.matched_skills, 8),
                    if role.matched_skills.len() > 8 { "..." } else { "" }
                ));
                lines.push(format!(
                    "     Missing: {}{}",
                    truncate_list(&role.missing_skills, 5),
                    if role.missing_skills.len() > 5 { "..." } else { "" }
                ));
            }
        }

        lines.push(String::new());
        lines.push("=".repeat(70));
        lines.push("RECOMMENDATIONS FOR BEST FIT ROLE:".to_string());
        lines.push(String::new());
        if let Some(best) = report.roles.first() {
            for rec in &best.recommendations {
                lines.push(format!("  > {}", rec));
            }
        }

        lines.push(String::new());
        lines.push("=".repeat(70));
        lines.push(format!("Total Roles Analyzed: {}", report.roles.len()));
        lines.push("=".repeat(70));
        Ok(lines.join("\n"))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ProfilingReport) -> Result<String> {
        let mut lines = vec![
            "# Resume Profiling Report".to_string(),
            String::new(),
            format!(
                "**Best fit:** {} ({}%)",
                report.best_fit_role, report.best_fit_score
            ),
            format!(
                "**Candidate skills:** {}",
                report.candidate_skills.join(", ")
            ),
            String::new(),
            "## Top Recommended Roles".to_string(),
        ];

        for fit in &report.top_fits {
            lines.push(String::new());
            lines.push(format!("### {}. {} - {}%", fit.rank, fit.role, fit.score));
            lines.push(String::new());
            for reason in &fit.why_it_fits {
                lines.push(format!("- {}", reason));
            }
            if !fit.growth_areas.is_empty() {
                lines.push(String::new());
                lines.push("**Growth areas:**".to_string());
                for area in &fit.growth_areas {
                    lines.push(format!("- {}", area));
                }
            }
        }

        lines.push(String::new());
        lines.push("## All Positions".to_string());
        lines.push(String::new());
        lines.push("| Role | Category | Match % | Score |".to_string());
        lines.push("|------|----------|---------|-------|".to_string());
        for role in &report.roles {
            lines.push(format!(
                "| {} | {} | {} | {} |",
                role.role, role.category, role.match_percentage, role.score
            ));
        }

        Ok(lines.join("\n"))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Write `analysis_report.json` and `analysis_report.txt` into `output_dir`.
pub fn save_reports(report: &ProfilingReport, output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    let json = JsonFormatter::new(true).format_report(report)?;
    fs::write(output_dir.join("analysis_report.json"), json)?;

    let txt = TextFormatter.format_report(report)?;
    fs::write(output_dir.join("analysis_report.txt"), txt)?;

    info!("Reports generated at {}", output_dir.display());
    Ok(())
}

/// Pick the formatter for a requested output format.
pub fn formatter_for(format: &OutputFormat, use_colors: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    }
}

fn score_bar(score: f64, width: usize) -> String {
    let step = 100.0 / width as f64;
    let filled = ((score / step) as usize).min(width);
    format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

fn truncate_list(items: &[String], n: usize) -> String {
    if items.is_empty() {
        return "None".to_string();
    }
    items
        .iter()
        .take(n)
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::ProfilingReport;
    use crate::processing::pipeline::{Pipeline, TargetProfile};
    use crate::processing::skill_extractor::SkillProfile;
    use crate::roles::JobRole;

    fn sample_report() -> ProfilingReport {
        let candidate = SkillProfile {
            skills: vec!["python".into(), "sql".into()],
            counts: [("python".to_string(), 2), ("sql".to_string(), 1)]
                .into_iter()
                .collect(),
        };
        let targets = vec![TargetProfile::from_role(&JobRole {
            name: "Data Analyst".to_string(),
            category: "Data & Analytics".to_string(),
            skills: vec!["python".into(), "sql".into(), "tableau".into()],
        })];
        let ranked = Pipeline::new().rank(&candidate, &targets);
        ProfilingReport::build(&candidate.skills, &ranked, 3)
    }

    #[test]
    fn test_console_format_without_colors() {
        let report = sample_report();
        let output = ConsoleFormatter::new(false).format_report(&report).unwrap();
        assert!(output.contains("Best fit: Data Analyst"));
        assert!(output.contains("Total roles analyzed: 1"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let report = sample_report();
        let output = JsonFormatter::new(true).format_report(&report).unwrap();
        let parsed: ProfilingReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.best_fit_role, "Data Analyst");
    }

    #[test]
    fn test_text_format_includes_sections() {
        let report = sample_report();
        let output = TextFormatter.format_report(&report).unwrap();
        assert!(output.contains("RESUME PROFILING REPORT"));
        assert!(output.contains("BEST FIT: Data Analyst"));
        assert!(output.contains("MATCHING SKILLS"));
        assert!(output.contains("Total Roles Analyzed: 1"));
    }

    #[test]
    fn test_markdown_format_has_table() {
        let report = sample_report();
        let output = MarkdownFormatter.format_report(&report).unwrap();
        assert!(output.contains("# Resume Profiling Report"));
        assert!(output.contains("| Data Analyst |"));
    }

    #[test]
    fn test_score_bar_bounds() {
        assert_eq!(score_bar(0.0, 10), "..........");
        assert_eq!(score_bar(100.0, 10), "##########");
        assert_eq!(score_bar(50.0, 10), "#####.....");
    }

    #[test]
    fn test_save_reports_writes_both_files() {
        let report = sample_report();
        let dir = tempfile::tempdir().unwrap();
        save_reports(&report, dir.path()).unwrap();

        assert!(dir.path().join("analysis_report.json").exists());
        assert!(dir.path().join("analysis_report.txt").exists());
    }
}
