//! Match-and-score orchestration over one candidate and many targets

use crate::processing::matcher::{MatchResult, SkillMatcher};
use crate::processing::scoring::{ScoreResult, ScoringEngine};
use crate::processing::skill_extractor::SkillProfile;
use crate::roles::JobRole;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named target skill set the candidate is matched against.
///
/// Read-only reference data for the lifetime of a run. Every key of
/// `counts` appears in `skills`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetProfile {
    pub name: String,
    pub category: String,
    pub skills: Vec<String>,
    pub counts: HashMap<String, usize>,
}

impl TargetProfile {
    /// Build a target from a reference job role; each required skill
    /// counts once.
    pub fn from_role(role: &JobRole) -> Self {
        let counts = role.skills.iter().map(|s| (s.clone(), 1)).collect();
        Self {
            name: role.name.clone(),
            category: role.category.clone(),
            skills: role.skills.clone(),
            counts,
        }
    }

    /// Build a target from a parsed job description, keeping the real
    /// occurrence counts so cosine similarity reflects emphasis.
    pub fn from_job_profile(name: &str, profile: SkillProfile) -> Self {
        Self {
            name: name.to_string(),
            category: "Job Description".to_string(),
            skills: profile.skills,
            counts: profile.counts,
        }
    }
}

/// Match and score metrics for one (candidate, target) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetAnalysis {
    pub name: String,
    pub category: String,
    pub match_result: MatchResult,
    pub score_result: ScoreResult,
}

/// Runs the matcher and scorer once per target and ranks the results.
///
/// Pure orchestration: no text processing happens here.
pub struct Pipeline {
    scorer: ScoringEngine,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            scorer: ScoringEngine::new(),
        }
    }

    pub fn with_scorer(scorer: ScoringEngine) -> Self {
        Self { scorer }
    }

    /// Analyze the candidate against every target and return the results
    /// sorted descending by composite score. The sort is stable: score
    /// ties keep the original target order.
    pub fn rank(&self, candidate: &SkillProfile, targets: &[TargetProfile]) -> Vec<TargetAnalysis> {
        let mut results: Vec<TargetAnalysis> = targets
            .iter()
            .map(|target| self.analyze_one(candidate, target))
            .collect();

        results.sort_by(|a, b| {
            b.score_result
                .score
                .partial_cmp(&a.score_result.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        info!("Ranked {} targets", results.len());
        results
    }

    /// The top slice of an already-ranked list, for the detailed report
    /// section.
    pub fn top(ranked: &[TargetAnalysis], n: usize) -> &[TargetAnalysis] {
        &ranked[..n.min(ranked.len())]
    }

    fn analyze_one(&self, candidate: &SkillProfile, target: &TargetProfile) -> TargetAnalysis {
        let match_result = SkillMatcher::compare(
            &candidate.skills,
            &target.skills,
            &candidate.counts,
            &target.counts,
        );
        let score_result = self.scorer.score(
            match_result.match_percentage,
            &candidate.skills,
            &target.skills,
            &candidate.counts,
            &target.counts,
        );

        TargetAnalysis {
            name: target.name.clone(),
            category: target.category.clone(),
            match_result,
            score_result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(skills: &[&str]) -> SkillProfile {
        SkillProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            counts: skills.iter().map(|s| (s.to_string(), 1)).collect(),
        }
    }

    fn target(name: &str, skills: &[&str]) -> TargetProfile {
        TargetProfile::from_role(&JobRole {
            name: name.to_string(),
            category: "Test".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn test_ranks_descending_by_score() {
        let pipeline = Pipeline::new();
        let candidate = profile(&["python", "sql", "docker"]);
        let targets = vec![
            target("Weak", &["java", "kotlin", "swift"]),
            target("Strong", &["python", "sql", "docker"]),
            target("Partial", &["python", "rust", "go"]),
        ];

        let ranked = pipeline.rank(&candidate, &targets);
        assert_eq!(ranked[0].name, "Strong");
        assert_eq!(ranked[2].name, "Weak");
        assert!(ranked[0].score_result.score >= ranked[1].score_result.score);
        assert!(ranked[1].score_result.score >= ranked[2].score_result.score);
    }

    #[test]
    fn test_ties_preserve_input_order() {
        let pipeline = Pipeline::new();
        let candidate = profile(&["python", "sql"]);
        // Identical skill sets produce identical scores.
        let targets = vec![
            target("First", &["python", "sql"]),
            target("Second", &["python", "sql"]),
            target("Third", &["python", "sql"]),
        ];

        let ranked = pipeline.rank(&candidate, &targets);
        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_ranking_is_reproducible() {
        let pipeline = Pipeline::new();
        let candidate = profile(&["python", "sql", "aws", "docker"]);
        let targets = vec![
            target("A", &["python", "java"]),
            target("B", &["aws", "docker", "kubernetes"]),
            target("C", &["sql", "python", "docker"]),
        ];

        let first = pipeline.rank(&candidate, &targets);
        let second = pipeline.rank(&candidate, &targets);

        let order_first: Vec<&str> = first.iter().map(|r| r.name.as_str()).collect();
        let order_second: Vec<&str> = second.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order_first, order_second);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.match_result, b.match_result);
            assert_eq!(a.score_result, b.score_result);
        }
    }

    #[test]
    fn test_empty_candidate_ranks_without_error() {
        let pipeline = Pipeline::new();
        let candidate = SkillProfile::empty();
        let targets = vec![target("Role", &["python", "sql"])];

        let ranked = pipeline.rank(&candidate, &targets);
        assert_eq!(ranked[0].match_result.match_percentage, 0.0);
        assert_eq!(ranked[0].score_result.score, 0.0);
        assert_eq!(
            ranked[0].match_result.missing_skills,
            vec!["python", "sql"]
        );
    }

    #[test]
    fn test_top_slice() {
        let pipeline = Pipeline::new();
        let candidate = profile(&["python"]);
        let targets = vec![
            target("A", &["python"]),
            target("B", &["python", "sql"]),
            target("C", &["java"]),
            target("D", &["go"]),
        ];

        let ranked = pipeline.rank(&candidate, &targets);
        assert_eq!(Pipeline::top(&ranked, 3).len(), 3);
        assert_eq!(Pipeline::top(&ranked, 10).len(), 4);
    }

    #[test]
    fn test_target_from_role_counts_each_skill_once() {
        let t = target("Role", &["python", "sql"]);
        assert_eq!(t.counts["python"], 1);
        assert_eq!(t.counts["sql"], 1);
        assert_eq!(t.counts.len(), t.skills.len());
    }
}
