//! Dictionary-driven skill extraction

use crate::error::{Result, ResumeProfilerError};
use aho_corasick::AhoCorasick;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Default skill dictionary covering common technologies and competencies.
pub const SKILL_DICTIONARY: &[&str] = &[
    // Programming Languages
    "python", "java", "javascript", "typescript", "c++", "c#", "c",
    "go", "golang", "rust", "ruby", "php", "swift", "kotlin", "scala",
    "r", "matlab", "perl", "bash", "powershell", "objective-c",
    "solidity", "abap", "apex", "vba",
    // Web Development
    "html", "css", "sass", "react", "angular", "vue", "node.js",
    "django", "flask", "fastapi", "spring", "spring boot", ".net",
    "asp.net", "laravel", "symfony", "ruby on rails", "express",
    "next.js", "nuxt", "gatsby", "webpack", "npm", "yarn",
    // Mobile Development
    "ios", "android", "react native", "flutter",
    "xcode", "android studio", "mobile development", "app store",
    "google play", "cocoapods", "gradle",
    // Databases
    "sql", "mysql", "postgresql", "sqlite", "mongodb", "redis",
    "elasticsearch", "cassandra", "dynamodb", "oracle", "sql server",
    "bigquery", "redshift", "snowflake", "neo4j", "couchbase",
    "firebase", "mariadb", "nosql",
    // Cloud & DevOps
    "aws", "azure", "gcp", "google cloud", "docker", "kubernetes",
    "terraform", "ansible", "jenkins", "gitlab", "github actions",
    "ci/cd", "linux", "windows server", "vmware", "cloudformation",
    "arm templates", "helm", "argocd", "gitops", "prometheus",
    "grafana", "datadog", "splunk", "elk", "nginx", "apache",
    // Data & Analytics
    "pandas", "numpy", "matplotlib", "seaborn", "tableau", "power bi",
    "looker", "qlik", "data analysis", "data visualization",
    "data cleaning", "data wrangling", "etl", "data pipeline",
    "data modeling", "data engineering", "data governance",
    "statistics", "excel", "reporting", "jupyter", "databricks",
    // AI & Machine Learning
    "machine learning", "deep learning", "tensorflow", "pytorch",
    "keras", "scikit-learn", "nlp", "computer vision", "opencv",
    "transformers", "bert", "gpt", "llm", "huggingface", "spacy",
    "nltk", "mlops", "mlflow", "kubeflow", "feature engineering",
    "model deployment", "a/b testing", "reinforcement learning",
    // Big Data
    "spark", "hadoop", "kafka", "airflow", "hive", "presto",
    "flink", "beam", "dbt", "fivetran", "stitch",
    // Security
    "security", "cybersecurity", "penetration testing", "ethical hacking",
    "vulnerability assessment", "siem", "firewalls", "encryption",
    "iam", "zero trust", "compliance", "incident response", "forensics",
    "owasp", "burp suite", "metasploit", "kali linux", "ids/ips",
    "cloud security", "application security", "devsecops",
    // Testing & QA
    "testing", "test automation", "selenium", "cypress", "playwright",
    "jest", "junit", "pytest", "rspec", "postman", "api testing",
    "performance testing", "jmeter", "loadrunner", "gatling",
    "manual testing", "regression testing", "unit testing",
    // Design
    "ui design", "ux design", "figma", "sketch", "adobe xd",
    "photoshop", "illustrator", "indesign", "after effects",
    "premiere pro", "wireframes", "prototyping", "design systems",
    "typography", "color theory", "responsive design", "ui/ux",
    "user research", "usability testing", "interaction design",
    // Project Management & Agile
    "agile", "scrum", "kanban", "jira", "confluence", "trello",
    "asana", "monday", "ms project", "waterfall", "pmp", "prince2",
    "safe", "lean", "six sigma", "sprint planning", "retrospectives",
    // Business & Soft Skills
    "leadership", "team management", "stakeholder management",
    "communication", "presentation", "negotiation", "problem solving",
    "strategic planning", "budgeting", "vendor management",
    "requirements gathering", "documentation", "mentoring", "coaching",
    "change management", "risk management", "governance",
    // CRM & ERP
    "salesforce", "sap", "dynamics", "hubspot", "zoho",
    "netsuite", "workday", "servicenow", "zendesk", "freshdesk",
    "crm", "erp", "quickbooks",
    // Marketing & SEO
    "seo", "sem", "google ads", "google analytics", "facebook ads",
    "digital marketing", "content marketing", "email marketing",
    "social media", "marketing automation", "mailchimp", "marketo",
    // APIs & Integration
    "rest api", "graphql", "grpc", "soap", "webhooks", "oauth",
    "jwt", "api gateway", "microservices", "event-driven",
    // Version Control
    "git", "github", "bitbucket", "svn",
    // Game Development
    "unity", "unreal engine", "game design", "3d modeling",
    "graphics programming", "physics",
    // Blockchain
    "blockchain", "ethereum", "smart contracts", "web3", "defi", "nft",
    "cryptography",
    // Healthcare
    "hipaa", "ehr", "hl7", "fhir", "clinical data", "healthcare it",
    "epic", "cerner", "medical devices", "fda",
    // Finance
    "financial modeling", "financial analysis", "valuation",
    "fp&a", "gaap", "ifrs", "sox", "audit",
    "forecasting", "investment analysis", "risk analysis",
    "portfolio management", "m&a", "due diligence",
    // HR
    "recruiting", "talent acquisition", "onboarding", "hris",
    "performance management", "compensation", "employee relations",
    "training", "learning & development", "ats",
    // Legal & Compliance
    "gdpr", "ccpa", "iso 27001", "pci dss", "regulatory",
    "contracts", "intellectual property", "corporate law",
    // Operations
    "operations management", "process improvement", "supply chain",
    "inventory management", "logistics", "procurement", "warehousing",
    "quality assurance", "lean manufacturing",
    // Robotics & IoT
    "robotics", "ros", "iot", "embedded systems", "rtos",
    "microcontrollers", "arm", "firmware", "sensors", "arduino",
    "raspberry pi",
    // Other Technical
    "algorithms", "data structures", "system design", "architecture",
    "design patterns", "scalability", "high availability",
    "distributed systems", "caching", "load balancing",
    "message queues", "rabbitmq", "sqs",
];

/// Skills detected in one text source, with non-overlapping occurrence counts.
///
/// `skills` is sorted alphabetically; every entry also keys `counts`, and
/// every stored count is positive (absence means zero, not a zero entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProfile {
    pub skills: Vec<String>,
    pub counts: HashMap<String, usize>,
}

impl SkillProfile {
    pub fn empty() -> Self {
        Self {
            skills: Vec::new(),
            counts: HashMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Extracts dictionary skills from normalized text.
///
/// The pattern cache is compiled once per instance from the dictionary, so
/// extractors with different dictionaries can coexist. Dictionary entries
/// are lowercased and deduplicated before compilation; special characters
/// ("c++", "c#", ".net") are matched literally.
pub struct SkillExtractor {
    matcher: AhoCorasick,
    dictionary: Vec<String>,
}

impl SkillExtractor {
    /// Create an extractor over the default skill dictionary.
    pub fn new() -> Result<Self> {
        Self::with_dictionary(SKILL_DICTIONARY.iter().map(|s| s.to_string()))
    }

    /// Create an extractor over a custom dictionary.
    pub fn with_dictionary<I>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        // Canonical form: lowercase, trimmed, unique, alphabetical.
        let dictionary: Vec<String> = terms
            .into_iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&dictionary)
            .map_err(|e| {
                ResumeProfilerError::TextProcessing(format!(
                    "Failed to build skill matcher: {}",
                    e
                ))
            })?;

        debug!("Compiled skill matcher with {} terms", dictionary.len());
        Ok(Self { matcher, dictionary })
    }

    /// Extract dictionary skills occurring in `text` as whole words or
    /// whole phrases, with their occurrence counts.
    ///
    /// A hit only counts when it is bounded by non-word characters on both
    /// sides, so "java" does not match inside "javascript". Matching is
    /// case-insensitive. Pure function of (text, dictionary).
    pub fn extract(&self, text: &str) -> SkillProfile {
        let mut counts: HashMap<String, usize> = HashMap::new();

        for mat in self.matcher.find_overlapping_iter(text) {
            if !self.is_whole_term(text, mat.start(), mat.end()) {
                continue;
            }
            let term = &self.dictionary[mat.pattern().as_usize()];
            *counts.entry(term.clone()).or_insert(0) += 1;
        }

        let mut skills: Vec<String> = counts.keys().cloned().collect();
        skills.sort();

        info!("Extracted {} skills", skills.len());
        SkillProfile { skills, counts }
    }

    /// Number of terms in the compiled dictionary.
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }

    // Word boundary check: the match must not be flanked by word
    // characters. Match offsets fall on char boundaries because every
    // dictionary term is ASCII.
    fn is_whole_term(&self, text: &str, start: usize, end: usize) -> bool {
        let before_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let after_ok = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        before_ok && after_ok
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor(terms: &[&str]) -> SkillExtractor {
        SkillExtractor::with_dictionary(terms.iter().map(|s| s.to_string())).unwrap()
    }

    #[test]
    fn test_default_dictionary_compiles() {
        let extractor = SkillExtractor::new().unwrap();
        assert!(extractor.dictionary_size() > 200);
    }

    #[test]
    fn test_whole_word_matching() {
        let extractor = extractor(&["java"]);

        let profile = extractor.extract("javascript developer");
        assert!(profile.is_empty());

        let profile = extractor.extract("I used Java for this project");
        assert_eq!(profile.skills, vec!["java"]);
        assert_eq!(profile.counts["java"], 1);
    }

    #[test]
    fn test_multi_word_phrase_matching() {
        let extractor = extractor(&["machine learning", "learning"]);
        let profile = extractor.extract("machine learning engineer");

        assert_eq!(profile.skills, vec!["learning", "machine learning"]);
        assert_eq!(profile.counts["machine learning"], 1);
        assert_eq!(profile.counts["learning"], 1);
    }

    #[test]
    fn test_special_characters_matched_literally() {
        let extractor = extractor(&["c++", "c#", ".net", "ci/cd"]);
        let profile = extractor.extract("c++ and c# with .net plus ci/cd pipelines");

        assert_eq!(profile.skills, vec![".net", "c#", "c++", "ci/cd"]);
        // "c++" must not be treated as a regex-style pattern matching "c".
        assert_eq!(profile.counts["c++"], 1);
    }

    #[test]
    fn test_dot_net_does_not_match_inside_asp_net() {
        let extractor = extractor(&[".net"]);
        let profile = extractor.extract("asp.net developer");
        assert!(profile.is_empty());
    }

    #[test]
    fn test_occurrence_counts() {
        let extractor = extractor(&["python", "sql"]);
        let profile = extractor.extract("python python sql python");

        assert_eq!(profile.counts["python"], 3);
        assert_eq!(profile.counts["sql"], 1);
    }

    #[test]
    fn test_case_insensitive() {
        let extractor = extractor(&["python"]);
        let profile = extractor.extract("Python PYTHON python");
        assert_eq!(profile.counts["python"], 3);
    }

    #[test]
    fn test_empty_text_yields_empty_profile() {
        let extractor = extractor(&["python"]);
        let profile = extractor.extract("");
        assert!(profile.is_empty());
        assert!(profile.counts.is_empty());
    }

    #[test]
    fn test_duplicate_case_variants_collapse() {
        let extractor = extractor(&["Python", "python", " PYTHON "]);
        assert_eq!(extractor.dictionary_size(), 1);

        let profile = extractor.extract("python everywhere");
        assert_eq!(profile.skills, vec!["python"]);
        assert_eq!(profile.counts["python"], 1);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = extractor(&["python", "sql", "docker"]);
        let text = "python and sql and docker and sql";

        let first = extractor.extract(text);
        let second = extractor.extract(text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_skills_sorted_alphabetically() {
        let extractor = extractor(&["sql", "aws", "python", "docker"]);
        let profile = extractor.extract("sql python aws docker");
        assert_eq!(profile.skills, vec!["aws", "docker", "python", "sql"]);
    }

    #[test]
    fn test_counts_keyed_by_skill_set() {
        let extractor = extractor(&["python", "sql"]);
        let profile = extractor.extract("python sql");

        for skill in &profile.skills {
            assert!(profile.counts[skill] > 0);
        }
        assert_eq!(profile.skills.len(), profile.counts.len());
    }
}
