//! Built-in job role reference data
//!
//! Immutable for the lifetime of a run. Every skill is stored in canonical
//! lowercase form and lives in the default skill dictionary.

use serde::{Deserialize, Serialize};

/// A job role with its required skill set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRole {
    pub name: String,
    pub category: String,
    pub skills: Vec<String>,
}

fn role(name: &str, category: &str, skills: &[&str]) -> JobRole {
    JobRole {
        name: name.to_string(),
        category: category.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

/// The built-in role table, ordered; ranking ties preserve this order.
pub fn builtin_roles() -> Vec<JobRole> {
    vec![
        // Data & Analytics
        role(
            "Data Analyst",
            "Data & Analytics",
            &[
                "python", "r", "sql", "excel", "tableau", "power bi",
                "pandas", "numpy", "matplotlib", "seaborn", "statistics",
                "data analysis", "data cleaning", "etl", "reporting",
                "mysql", "postgresql", "bigquery", "looker", "git",
            ],
        ),
        role(
            "Data Scientist",
            "Data & Analytics",
            &[
                "python", "r", "sql", "pandas", "numpy", "scikit-learn",
                "tensorflow", "pytorch", "keras", "machine learning",
                "deep learning", "nlp", "computer vision", "statistics",
                "matplotlib", "seaborn", "jupyter", "git", "aws", "docker",
            ],
        ),
        role(
            "Business Analyst",
            "Data & Analytics",
            &[
                "sql", "excel", "tableau", "power bi", "python",
                "data analysis", "reporting", "statistics", "jira",
                "agile", "scrum", "mysql", "postgresql", "looker", "git",
                "requirements gathering", "stakeholder management",
            ],
        ),
        role(
            "Data Engineer",
            "Data & Analytics",
            &[
                "python", "sql", "spark", "hadoop", "airflow", "kafka",
                "aws", "azure", "gcp", "docker", "kubernetes", "etl",
                "data pipeline", "postgresql", "mongodb", "redshift",
                "snowflake", "databricks", "git", "linux",
            ],
        ),
        role(
            "Business Intelligence Analyst",
            "Data & Analytics",
            &[
                "sql", "tableau", "power bi", "looker", "excel",
                "data visualization", "reporting", "etl", "python",
                "statistics", "mysql", "postgresql", "bigquery",
            ],
        ),
        // Software Development
        role(
            "Software Engineer",
            "Software Development",
            &[
                "python", "java", "javascript", "c++", "sql", "git",
                "algorithms", "data structures", "system design",
                "design patterns", "testing", "agile", "docker", "linux",
                "rest api", "microservices",
            ],
        ),
        role(
            "Frontend Developer",
            "Software Development",
            &[
                "javascript", "typescript", "html", "css", "react",
                "angular", "vue", "sass", "webpack", "npm", "git",
                "responsive design", "jest", "testing", "agile",
            ],
        ),
        role(
            "Backend Developer",
            "Software Development",
            &[
                "python", "java", "go", "sql", "postgresql", "mongodb",
                "redis", "rest api", "graphql", "microservices", "docker",
                "kubernetes", "git", "linux", "testing", "system design",
            ],
        ),
        role(
            "Full Stack Developer",
            "Software Development",
            &[
                "javascript", "typescript", "react", "node.js", "html",
                "css", "python", "sql", "mongodb", "postgresql", "rest api",
                "git", "docker", "agile", "testing",
            ],
        ),
        role(
            "Python Developer",
            "Software Development",
            &[
                "python", "django", "flask", "fastapi", "sql", "postgresql",
                "redis", "rest api", "docker", "git", "pytest",
                "unit testing", "linux", "agile",
            ],
        ),
        role(
            "Rust Developer",
            "Software Development",
            &[
                "rust", "c++", "linux", "git", "algorithms",
                "data structures", "system design", "distributed systems",
                "docker", "testing", "grpc", "rest api",
            ],
        ),
        role(
            "Mobile Developer",
            "Software Development",
            &[
                "swift", "kotlin", "ios", "android", "react native",
                "flutter", "xcode", "android studio", "mobile development",
                "git", "rest api", "testing", "app store", "google play",
            ],
        ),
        // AI & Machine Learning
        role(
            "ML Engineer",
            "AI & Machine Learning",
            &[
                "python", "machine learning", "deep learning", "tensorflow",
                "pytorch", "scikit-learn", "pandas", "numpy", "mlops",
                "mlflow", "docker", "kubernetes", "aws", "sql", "git",
                "feature engineering", "model deployment",
            ],
        ),
        role(
            "NLP Engineer",
            "AI & Machine Learning",
            &[
                "python", "nlp", "machine learning", "deep learning",
                "transformers", "bert", "gpt", "huggingface", "spacy",
                "nltk", "pytorch", "tensorflow", "git", "docker",
            ],
        ),
        role(
            "MLOps Engineer",
            "AI & Machine Learning",
            &[
                "python", "mlops", "mlflow", "kubeflow", "docker",
                "kubernetes", "ci/cd", "aws", "gcp", "terraform",
                "model deployment", "airflow", "git", "linux", "prometheus",
            ],
        ),
        // Cloud & DevOps
        role(
            "DevOps Engineer",
            "Cloud & DevOps",
            &[
                "aws", "azure", "docker", "kubernetes", "terraform",
                "ansible", "jenkins", "ci/cd", "linux", "bash", "python",
                "git", "prometheus", "grafana", "helm", "gitops",
            ],
        ),
        role(
            "Cloud Engineer",
            "Cloud & DevOps",
            &[
                "aws", "azure", "gcp", "terraform", "cloudformation",
                "docker", "kubernetes", "linux", "python", "bash",
                "ci/cd", "git", "ansible", "security",
            ],
        ),
        role(
            "Site Reliability Engineer",
            "Cloud & DevOps",
            &[
                "linux", "kubernetes", "docker", "prometheus", "grafana",
                "python", "go", "bash", "terraform", "aws", "ci/cd",
                "incident response", "load balancing", "caching",
                "distributed systems",
            ],
        ),
        // Cybersecurity
        role(
            "Security Engineer",
            "Cybersecurity",
            &[
                "security", "cybersecurity", "penetration testing", "siem",
                "firewalls", "encryption", "iam", "incident response",
                "owasp", "python", "linux", "cloud security",
                "application security", "compliance",
            ],
        ),
        role(
            "Penetration Tester",
            "Cybersecurity",
            &[
                "penetration testing", "ethical hacking", "burp suite",
                "metasploit", "kali linux", "owasp",
                "vulnerability assessment", "python", "bash", "linux",
                "security",
            ],
        ),
        // QA & Testing
        role(
            "QA Engineer",
            "QA & Testing",
            &[
                "testing", "test automation", "selenium", "cypress",
                "playwright", "api testing", "postman", "jira", "agile",
                "python", "javascript", "regression testing",
                "manual testing", "git",
            ],
        ),
        role(
            "Automation Engineer",
            "QA & Testing",
            &[
                "test automation", "selenium", "cypress", "playwright",
                "python", "javascript", "jest", "pytest", "ci/cd",
                "jenkins", "api testing", "git", "performance testing",
            ],
        ),
        // Database
        role(
            "Database Administrator",
            "Database",
            &[
                "sql", "mysql", "postgresql", "oracle", "sql server",
                "mongodb", "redis", "data modeling", "etl", "linux",
                "bash", "nosql", "high availability",
            ],
        ),
        // UI/UX Design
        role(
            "UX Designer",
            "UI/UX Design",
            &[
                "ux design", "ui design", "figma", "sketch", "adobe xd",
                "wireframes", "prototyping", "user research",
                "usability testing", "design systems", "interaction design",
                "typography",
            ],
        ),
        // Product Management
        role(
            "Product Manager",
            "Product Management",
            &[
                "agile", "scrum", "jira",
                "stakeholder management", "requirements gathering",
                "data analysis", "sql", "a/b testing", "communication",
                "leadership", "strategic planning", "presentation",
            ],
        ),
        // Project Management
        role(
            "Project Manager",
            "Project Management",
            &[
                "agile", "scrum", "kanban", "jira", "confluence",
                "pmp", "stakeholder management", "budgeting",
                "risk management", "communication", "leadership",
                "ms project", "waterfall",
            ],
        ),
        // Sales & Marketing
        role(
            "Digital Marketing Specialist",
            "Sales & Marketing",
            &[
                "digital marketing", "seo", "sem", "google ads",
                "google analytics", "facebook ads", "content marketing",
                "email marketing", "social media", "marketing automation",
                "mailchimp", "reporting",
            ],
        ),
        // Finance & Accounting
        role(
            "Financial Analyst",
            "Finance & Accounting",
            &[
                "financial modeling", "financial analysis", "valuation",
                "excel", "forecasting", "budgeting", "gaap", "sql",
                "reporting", "investment analysis", "risk analysis",
                "power bi",
            ],
        ),
        // HR & Recruitment
        role(
            "Technical Recruiter",
            "HR & Recruitment",
            &[
                "recruiting", "talent acquisition", "onboarding", "ats",
                "hris", "communication", "negotiation",
                "stakeholder management", "compensation",
            ],
        ),
        // Blockchain
        role(
            "Blockchain Developer",
            "Software Development",
            &[
                "blockchain", "ethereum", "solidity", "smart contracts",
                "web3", "defi", "cryptography", "javascript", "typescript",
                "rust", "git", "testing",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_roles_are_nonempty() {
        let roles = builtin_roles();
        assert!(roles.len() >= 20);
        for role in &roles {
            assert!(!role.name.is_empty());
            assert!(!role.category.is_empty());
            assert!(!role.skills.is_empty());
        }
    }

    #[test]
    fn test_role_skills_are_canonical() {
        for role in builtin_roles() {
            let mut seen = HashSet::new();
            for skill in &role.skills {
                assert_eq!(skill, &skill.to_lowercase(), "skill not lowercase in {}", role.name);
                assert_eq!(skill, skill.trim());
                assert!(seen.insert(skill.clone()), "duplicate skill {} in {}", skill, role.name);
            }
        }
    }

    #[test]
    fn test_role_skills_exist_in_default_dictionary() {
        let dictionary: HashSet<&str> =
            crate::processing::skill_extractor::SKILL_DICTIONARY
                .iter()
                .copied()
                .collect();
        for role in builtin_roles() {
            for skill in &role.skills {
                assert!(
                    dictionary.contains(skill.as_str()),
                    "skill {} of {} is not in the dictionary",
                    skill,
                    role.name
                );
            }
        }
    }

    #[test]
    fn test_role_names_unique() {
        let roles = builtin_roles();
        let names: HashSet<_> = roles.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), roles.len());
    }
}
