//! Candidate-to-target skill matching

use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Metrics comparing one candidate skill profile against one target.
///
/// Derived data, never mutated after creation. `matched_skills` and
/// `missing_skills` partition the target skill set and are alphabetically
/// sorted for reproducible output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_percentage: f64,
    pub cosine_similarity: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Compares candidate skills with target skills.
pub struct SkillMatcher;

impl SkillMatcher {
    /// Compare a candidate (skills, counts) pair against a target pair.
    ///
    /// Overlap ratio is |candidate ∩ target| / |target|, reported as a
    /// percentage, and 0.0 when the target set is empty.
    pub fn compare(
        candidate_skills: &[String],
        target_skills: &[String],
        candidate_counts: &HashMap<String, usize>,
        target_counts: &HashMap<String, usize>,
    ) -> MatchResult {
        let candidate_set: HashSet<&str> =
            candidate_skills.iter().map(|s| s.as_str()).collect();
        let target_set: HashSet<&str> =
            target_skills.iter().map(|s| s.as_str()).collect();

        let mut matched: Vec<String> = target_set
            .intersection(&candidate_set)
            .map(|s| s.to_string())
            .collect();
        matched.sort();

        let mut missing: Vec<String> = target_set
            .difference(&candidate_set)
            .map(|s| s.to_string())
            .collect();
        missing.sort();

        let overlap_ratio = if target_set.is_empty() {
            0.0
        } else {
            matched.len() as f64 / target_set.len() as f64
        };
        let match_percentage = overlap_ratio * 100.0;

        let cosine_similarity = Self::cosine_similarity(candidate_counts, target_counts);

        info!(
            "Match percentage: {:.2}, cosine similarity: {:.3}",
            match_percentage, cosine_similarity
        );

        MatchResult {
            match_percentage,
            cosine_similarity,
            matched_skills: matched,
            missing_skills: missing,
        }
    }

    // Term-frequency cosine over the union of both occurrence maps.
    // Returns 0.0 when either vector has zero norm.
    fn cosine_similarity(
        candidate_counts: &HashMap<String, usize>,
        target_counts: &HashMap<String, usize>,
    ) -> f64 {
        let universe: HashSet<&str> = candidate_counts
            .keys()
            .chain(target_counts.keys())
            .map(|s| s.as_str())
            .collect();
        if universe.is_empty() {
            return 0.0;
        }

        let mut dot_product = 0.0;
        let mut candidate_norm = 0.0;
        let mut target_norm = 0.0;
        for skill in universe {
            let candidate_val = *candidate_counts.get(skill).unwrap_or(&0) as f64;
            let target_val = *target_counts.get(skill).unwrap_or(&0) as f64;
            dot_product += candidate_val * target_val;
            candidate_norm += candidate_val * candidate_val;
            target_norm += target_val * target_val;
        }

        if candidate_norm == 0.0 || target_norm == 0.0 {
            return 0.0;
        }
        dot_product / (candidate_norm.sqrt() * target_norm.sqrt())
    }
}
