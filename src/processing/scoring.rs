//! Composite candidate scoring

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default blend weights. These are a fixed policy of the engine; the
/// config layer may override them but must keep these as defaults.
pub const DEFAULT_COVERAGE_WEIGHT: f64 = 0.6;
pub const DEFAULT_DIVERSITY_WEIGHT: f64 = 0.2;
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.2;

/// Normalized sub-scores and the composite 0-100 score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: f64,
    pub coverage: f64,
    pub diversity: f64,
    pub keyword_strength: f64,
}

/// Computes a composite candidate score between 0 and 100.
pub struct ScoringEngine {
    coverage_weight: f64,
    diversity_weight: f64,
    keyword_weight: f64,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {
            coverage_weight: DEFAULT_COVERAGE_WEIGHT,
            diversity_weight: DEFAULT_DIVERSITY_WEIGHT,
            keyword_weight: DEFAULT_KEYWORD_WEIGHT,
        }
    }

    pub fn with_weights(coverage: f64, diversity: f64, keyword: f64) -> Self {
        Self {
            coverage_weight: coverage,
            diversity_weight: diversity,
            keyword_weight: keyword,
        }
    }

    /// Blend the raw match percentage with breadth and repetition signals.
    ///
    /// - coverage: match percentage rescaled to [0, 1]
    /// - diversity: distinct candidate skills relative to target size;
    ///   counts every candidate skill, not only the matched ones
    /// - keyword_strength: candidate mentions of required skills relative
    ///   to the target's total counts, rewarding repeated mentions
    ///
    /// Pure function; all sub-scores are clamped to [0, 1] and the
    /// composite to [0, 100].
    pub fn score(
        &self,
        match_percentage: f64,
        candidate_skills: &[String],
        target_skills: &[String],
        candidate_counts: &HashMap<String, usize>,
        target_counts: &HashMap<String, usize>,
    ) -> ScoreResult {
        let coverage = (match_percentage / 100.0).clamp(0.0, 1.0);

        let target_skill_count = target_skills.len().max(1);
        let diversity =
            (candidate_skills.len() as f64 / target_skill_count as f64).clamp(0.0, 1.0);

        let matched_strength: usize = target_skills
            .iter()
            .map(|skill| candidate_counts.get(skill).copied().unwrap_or(0))
            .sum();
        let total_target_strength = target_counts.values().sum::<usize>().max(1);
        let keyword_strength =
            (matched_strength as f64 / total_target_strength as f64).clamp(0.0, 1.0);

        let score = ((coverage * self.coverage_weight
            + diversity * self.diversity_weight
            + keyword_strength * self.keyword_weight)
            * 100.0)
            .clamp(0.0, 100.0);

        info!(
            "Score computed: {:.2} (coverage={:.2}, diversity={:.2}, strength={:.2})",
            score, coverage, diversity, keyword_strength
        );

        ScoreResult {
            score,
            coverage,
            diversity,
            keyword_strength,
        }
    }
}
