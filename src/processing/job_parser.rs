//! Required-skill extraction from job description text

use crate::error::Result;
use crate::processing::skill_extractor::{SkillExtractor, SkillProfile};
use log::info;

/// Extracts the required skill set from cleaned job description text.
pub struct JobParser {
    extractor: SkillExtractor,
}

impl JobParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            extractor: SkillExtractor::new()?,
        })
    }

    pub fn with_extractor(extractor: SkillExtractor) -> Self {
        Self { extractor }
    }

    pub fn extract_required_skills(&self, text: &str) -> SkillProfile {
        let profile = self.extractor.extract(text);
        info!("Extracted {} job skills", profile.skills.len());
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_required_skills_from_posting() {
        let parser = JobParser::new().unwrap();
        let text = "we need python and sql experience plus docker and kubernetes";
        let profile = parser.extract_required_skills(text);

        assert_eq!(
            profile.skills,
            vec!["docker", "kubernetes", "python", "sql"]
        );
    }

    #[test]
    fn test_counts_repeated_requirements() {
        let parser = JobParser::new().unwrap();
        let profile =
            parser.extract_required_skills("python required. python preferred. sql a plus.");
        assert_eq!(profile.counts["python"], 2);
        assert_eq!(profile.counts["sql"], 1);
    }
}
