//! Report data structures built from ranked match results

use crate::processing::pipeline::{Pipeline, TargetAnalysis};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

/// Full profiling report: candidate skills, best fit, detailed top fits
/// and the complete ranked list. Everything the renderers need without
/// re-deriving any matching logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilingReport {
    pub candidate_skills: Vec<String>,
    pub best_fit_role: String,
    pub best_fit_score: f64,
    pub top_fits: Vec<FitExplanation>,
    pub roles: Vec<RoleEntry>,
    pub metadata: ReportMetadata,
}

/// One ranked target with its rounded metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleEntry {
    pub role: String,
    pub category: String,
    pub match_percentage: f64,
    pub cosine_similarity: f64,
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Rich explanation for a top-ranked target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitExplanation {
    pub rank: usize,
    pub role: String,
    pub score: f64,
    pub fit_summary: String,
    pub why_it_fits: Vec<String>,
    pub matched_skills: Vec<String>,
    pub growth_areas: Vec<String>,
    pub action_items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub profiler_version: String,
    pub targets_analyzed: usize,
}

const TOOL_KEYWORDS: &[&str] = &[
    "tableau", "power bi", "excel", "jira", "git", "figma",
    "photoshop", "jenkins", "terraform", "jupyter",
];

const TECH_KEYWORDS: &[&str] = &[
    "python", "java", "sql", "machine learning", "deep learning",
    "data analysis", "statistics", "nlp", "computer vision", "aws",
    "docker", "kubernetes", "tensorflow", "pytorch", "pandas", "numpy",
];

impl ProfilingReport {
    /// Assemble a report from an already-ranked analysis list.
    pub fn build(candidate_skills: &[String], ranked: &[TargetAnalysis], top_n: usize) -> Self {
        let roles: Vec<RoleEntry> = ranked.iter().map(RoleEntry::from_analysis).collect();

        let (best_fit_role, best_fit_score) = match ranked.first() {
            Some(best) => (best.name.clone(), round2(best.score_result.score)),
            None => ("N/A".to_string(), 0.0),
        };

        let top_fits = Pipeline::top(ranked, top_n)
            .iter()
            .enumerate()
            .map(|(idx, analysis)| FitExplanation::build(analysis, idx + 1))
            .collect();

        info!("Report built for {} targets", ranked.len());
        Self {
            candidate_skills: candidate_skills.to_vec(),
            best_fit_role,
            best_fit_score,
            top_fits,
            roles,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                profiler_version: env!("CARGO_PKG_VERSION").to_string(),
                targets_analyzed: ranked.len(),
            },
        }
    }
}

impl RoleEntry {
    fn from_analysis(analysis: &TargetAnalysis) -> Self {
        Self {
            role: analysis.name.clone(),
            category: analysis.category.clone(),
            match_percentage: round2(analysis.match_result.match_percentage),
            cosine_similarity: round3(analysis.match_result.cosine_similarity),
            score: round2(analysis.score_result.score),
            matched_skills: analysis.match_result.matched_skills.clone(),
            missing_skills: analysis.match_result.missing_skills.clone(),
            recommendations: build_recommendations(
                &analysis.name,
                &analysis.match_result.missing_skills,
            ),
        }
    }
}

impl FitExplanation {
    fn build(analysis: &TargetAnalysis, rank: usize) -> Self {
        let matched = &analysis.match_result.matched_skills;
        let missing = &analysis.match_result.missing_skills;
        let score = round2(analysis.score_result.score);

        let mut tech_skills = Vec::new();
        let mut soft_skills = Vec::new();
        let mut tools = Vec::new();
        for skill in matched {
            if TOOL_KEYWORDS.iter().any(|t| skill.contains(t)) {
                tools.push(skill.clone());
            } else if TECH_KEYWORDS.iter().any(|t| skill.contains(t)) {
                tech_skills.push(skill.clone());
            } else {
                soft_skills.push(skill.clone());
            }
        }

        let mut why_it_fits = Vec::new();
        if !tech_skills.is_empty() {
            why_it_fits.push(format!(
                "Strong technical foundation with {}",
                join_first(&tech_skills, 4)
            ));
        }
        if !tools.is_empty() {
            why_it_fits.push(format!(
                "Proficiency in key tools: {}",
                join_first(&tools, 3)
            ));
        }
        if matched.len() >= 5 {
            why_it_fits.push(format!(
                "Broad skill coverage with {} matching skills",
                matched.len()
            ));
        }
        if score >= 50.0 {
            why_it_fits.push("Above-average compatibility score indicates good fit".to_string());
        } else if score >= 40.0 {
            why_it_fits.push("Moderate compatibility with potential for growth".to_string());
        }
        if why_it_fits.is_empty() {
            why_it_fits.push(format!(
                "Shows foundational skills relevant to {}",
                analysis.name
            ));
        }

        let mut growth_areas = Vec::new();
        if !missing.is_empty() {
            growth_areas.push(format!(
                "Key skills to develop: {}",
                join_first(missing, 3)
            ));
            if missing.len() > 5 {
                growth_areas.push(format!(
                    "{} additional skills would strengthen your profile",
                    missing.len() - 3
                ));
            }
        }

        Self {
            rank,
            role: analysis.name.clone(),
            score,
            fit_summary: format!(
                "#{} Best Fit - {}% match with {} skills aligned",
                rank,
                score,
                matched.len()
            ),
            why_it_fits,
            matched_skills: matched.clone(),
            growth_areas,
            action_items: build_action_items(missing),
        }
    }
}

fn build_recommendations(role_name: &str, missing_skills: &[String]) -> Vec<String> {
    if missing_skills.is_empty() {
        return vec![format!(
            "Strong alignment with {} role. Focus on showcasing achievements.",
            role_name
        )];
    }
    vec![
        format!("To improve fit for {}:", role_name),
        "- Address missing skills through targeted learning or certifications.".to_string(),
        format!("- Prioritize learning: {}.", join_first(missing_skills, 5)),
    ]
}

fn build_action_items(missing: &[String]) -> Vec<String> {
    let has = |skill: &str| missing.iter().any(|s| s == skill);

    let mut items = Vec::new();
    if has("docker") {
        items.push("Learn containerization with Docker for modern deployment workflows".to_string());
    }
    if has("kubernetes") {
        items.push("Explore Kubernetes for container orchestration".to_string());
    }
    if has("aws") || has("azure") || has("gcp") {
        items.push("Get certified in cloud platforms (AWS/Azure/GCP)".to_string());
    }
    if has("git") {
        items.push("Master Git for version control best practices".to_string());
    }
    if has("tensorflow") || has("pytorch") || has("deep learning") {
        items.push("Deepen ML/DL expertise with TensorFlow or PyTorch projects".to_string());
    }

    if items.is_empty() {
        items.push(if missing.is_empty() {
            "Continue building expertise in current skills".to_string()
        } else {
            format!("Focus on mastering: {}", join_first(missing, 2))
        });
    }

    items.truncate(3);
    items
}

fn join_first(items: &[String], n: usize) -> String {
    items
        .iter()
        .take(n)
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::pipeline::{Pipeline, TargetProfile};
    use crate::processing::skill_extractor::SkillProfile;
    use crate::roles::JobRole;

    fn ranked_fixture() -> (Vec<String>, Vec<TargetAnalysis>) {
        let candidate = SkillProfile {
            skills: vec!["docker".into(), "python".into(), "sql".into()],
            counts: [("docker", 1), ("python", 3), ("sql", 2)]
                .iter()
                .map(|(s, n)| (s.to_string(), *n))
                .collect(),
        };
        let targets: Vec<TargetProfile> = [
            ("Backend Developer", vec!["python", "sql", "docker", "kubernetes"]),
            ("Java Developer", vec!["java", "spring", "sql"]),
        ]
        .iter()
        .map(|(name, skills)| {
            TargetProfile::from_role(&JobRole {
                name: name.to_string(),
                category: "Software Development".to_string(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
            })
        })
        .collect();

        let ranked = Pipeline::new().rank(&candidate, &targets);
        (candidate.skills, ranked)
    }

    #[test]
    fn test_report_orders_roles_and_picks_best_fit() {
        let (skills, ranked) = ranked_fixture();
        let report = ProfilingReport::build(&skills, &ranked, 3);

        assert_eq!(report.best_fit_role, "Backend Developer");
        assert_eq!(report.roles[0].role, "Backend Developer");
        assert!(report.roles[0].score >= report.roles[1].score);
        assert_eq!(report.metadata.targets_analyzed, 2);
    }

    #[test]
    fn test_top_fits_ranked_and_limited() {
        let (skills, ranked) = ranked_fixture();
        let report = ProfilingReport::build(&skills, &ranked, 1);

        assert_eq!(report.top_fits.len(), 1);
        assert_eq!(report.top_fits[0].rank, 1);
        assert_eq!(report.top_fits[0].role, "Backend Developer");
        assert!(!report.top_fits[0].why_it_fits.is_empty());
        assert!(!report.top_fits[0].action_items.is_empty());
    }

    #[test]
    fn test_recommendations_for_complete_match() {
        let recs = build_recommendations("Data Analyst", &[]);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("Strong alignment"));
    }

    #[test]
    fn test_recommendations_list_missing_skills() {
        let missing = vec!["kubernetes".to_string(), "aws".to_string()];
        let recs = build_recommendations("DevOps Engineer", &missing);
        assert_eq!(recs.len(), 3);
        assert!(recs[2].contains("kubernetes"));
    }

    #[test]
    fn test_action_items_cap_at_three() {
        let missing: Vec<String> = ["docker", "kubernetes", "aws", "git", "pytorch"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let items = build_action_items(&missing);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_empty_ranking_produces_placeholder() {
        let report = ProfilingReport::build(&[], &[], 3);
        assert_eq!(report.best_fit_role, "N/A");
        assert_eq!(report.best_fit_score, 0.0);
        assert!(report.roles.is_empty());
        assert!(report.top_fits.is_empty());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let (skills, ranked) = ranked_fixture();
        let report = ProfilingReport::build(&skills, &ranked, 3);
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("best_fit_role"));
        assert!(json.contains("Backend Developer"));
    }
}
