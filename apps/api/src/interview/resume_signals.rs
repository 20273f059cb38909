//! Resume signal extraction: skills, tools, projects, ownership, years of
//! experience, claim classes and role mismatches.
//!
//! Pure and deterministic. No matches means empty output, never an error.

use std::sync::OnceLock;

use regex::Regex;

use crate::interview::models::ResumeAnalysis;
use crate::interview::patterns::{MatchScope, PatternClass, PatternSet};

// ────────────────────────────────────────────────────────────────────────────
// Pattern tables
// ────────────────────────────────────────────────────────────────────────────

const SKILL_CLASSES: &[PatternClass] = &[
    PatternClass {
        category: "frameworks",
        terms: &["React", "Vue", "Angular", "Node.js", "Express", "MongoDB", "PostgreSQL", "MySQL"],
    },
    PatternClass {
        category: "languages",
        terms: &["JavaScript", "TypeScript", "Python", "Java", "C++", "Go", "Rust"],
    },
    PatternClass {
        category: "cloud_infra",
        terms: &["AWS", "Azure", "GCP", "Docker", "Kubernetes", "CI/CD", "Git"],
    },
    PatternClass {
        category: "architecture",
        terms: &["REST API", "GraphQL", "Microservices", "Serverless"],
    },
];

const TOOL_CLASSES: &[PatternClass] = &[
    PatternClass {
        category: "editors",
        terms: &["VS Code", "IntelliJ", "Eclipse", "Xcode"],
    },
    PatternClass {
        category: "collaboration",
        terms: &["Jira", "Trello", "Asana", "Slack", "Teams"],
    },
    PatternClass {
        category: "build",
        terms: &["Webpack", "Vite", "Babel", "ESLint", "Prettier"],
    },
    PatternClass {
        category: "testing",
        terms: &["Jest", "Mocha", "Cypress", "Selenium"],
    },
];

const PROJECT_CLASSES: &[PatternClass] = &[PatternClass {
    category: "project",
    terms: &["project", "built", "developed", "created", "designed", "implemented"],
}];

const OWNERSHIP_CLASSES: &[PatternClass] = &[PatternClass {
    category: "ownership",
    terms: &["I", "my", "we", "our", "led", "owned", "responsible for", "managed"],
}];

const STRONG_CLAIM_CLASSES: &[PatternClass] = &[
    PatternClass {
        category: "seniority",
        terms: &["expert", "master", "senior", "lead", "architect"],
    },
    PatternClass {
        category: "impact",
        terms: &["scaled", "optimized", "improved", "increased", "reduced"],
    },
    PatternClass {
        category: "delivery",
        terms: &["built", "created", "designed", "implemented", "developed"],
    },
];

const VAGUE_CLASSES: &[PatternClass] = &[
    PatternClass {
        category: "quantity",
        terms: &["various", "multiple", "several", "many", "some"],
    },
    PatternClass {
        category: "familiarity",
        terms: &["familiar with", "knowledge of", "experience with"],
    },
    PatternClass {
        category: "open_ended",
        terms: &["etc.", "and more", "including but not limited to"],
    },
];

const EXAGGERATION_CLASSES: &[PatternClass] = &[
    PatternClass {
        category: "superlative",
        terms: &["world-class", "best", "top", "number one", "revolutionary"],
    },
    PatternClass {
        category: "absolute",
        terms: &["perfect", "flawless", "guaranteed", "100%"],
    },
    PatternClass {
        category: "hype",
        terms: &["mastered", "guru", "ninja", "rockstar"],
    },
];

/// Required skills per role key (matched case-insensitively).
const ROLE_REQUIREMENTS: &[(&str, &[&str])] = &[
    (
        "frontend",
        &["React", "Vue", "Angular", "JavaScript", "TypeScript", "CSS", "HTML"],
    ),
    (
        "backend",
        &["Node.js", "Express", "Python", "Java", "Databases", "APIs"],
    ),
    (
        "fullstack",
        &["React", "Node.js", "Databases", "APIs", "JavaScript"],
    ),
    (
        "devops",
        &["Docker", "Kubernetes", "CI/CD", "AWS", "Azure", "GCP"],
    ),
    (
        "mobile",
        &["React Native", "Flutter", "Swift", "Kotlin", "Mobile"],
    ),
    (
        "data",
        &["Python", "SQL", "Machine Learning", "Analytics", "Statistics"],
    ),
];

// ────────────────────────────────────────────────────────────────────────────
// Compiled sets
// ────────────────────────────────────────────────────────────────────────────

struct ResumePatterns {
    skills: PatternSet,
    tools: PatternSet,
    projects: PatternSet,
    ownership: PatternSet,
    strong_claims: PatternSet,
    vague: PatternSet,
    exaggerations: PatternSet,
    years: Regex,
}

fn patterns() -> &'static ResumePatterns {
    static PATTERNS: OnceLock<ResumePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| ResumePatterns {
        skills: PatternSet::compile(SKILL_CLASSES, MatchScope::Term),
        tools: PatternSet::compile(TOOL_CLASSES, MatchScope::Term),
        projects: PatternSet::compile(PROJECT_CLASSES, MatchScope::Clause),
        ownership: PatternSet::compile(OWNERSHIP_CLASSES, MatchScope::Clause),
        strong_claims: PatternSet::compile(STRONG_CLAIM_CLASSES, MatchScope::Sentence),
        vague: PatternSet::compile(VAGUE_CLASSES, MatchScope::Sentence),
        exaggerations: PatternSet::compile(EXAGGERATION_CLASSES, MatchScope::Sentence),
        years: Regex::new(r"(?i)([0-9]+)\+?\s*(?:years?|yrs?)").expect("years regex must compile"),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Extraction
// ────────────────────────────────────────────────────────────────────────────

/// Runs every resume scan and assembles the analysis for `job_role`.
pub fn analyze_resume(resume: &str, job_role: &str) -> ResumeAnalysis {
    let p = patterns();
    let skills = p.skills.find_distinct(resume);
    let mismatches = find_mismatches(&skills, job_role);

    ResumeAnalysis {
        tools: p.tools.find_distinct(resume),
        projects: p.projects.find_all(resume),
        claimed_ownership: p.ownership.find_all(resume),
        years_experience: extract_years_experience(resume),
        strong_claims: p.strong_claims.find_all(resume),
        vague_statements: p.vague.find_all(resume),
        exaggerations: p.exaggerations.find_all(resume),
        skills,
        mismatches,
    }
}

/// Largest `<n> years` / `<n>+ yrs` figure in the resume, or 0.
pub fn extract_years_experience(resume: &str) -> u64 {
    patterns()
        .years
        .captures_iter(resume)
        .map(|caps| parse_year_count(&caps[1]))
        .max()
        .unwrap_or(0)
}

/// Parses an ASCII digit run, saturating at `u64::MAX` instead of failing.
pub fn parse_year_count(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

/// Required skills for `job_role`. Unknown roles require nothing.
pub fn role_requirements(job_role: &str) -> &'static [&'static str] {
    let role = job_role.to_lowercase();
    ROLE_REQUIREMENTS
        .iter()
        .find(|(key, _)| *key == role)
        .map(|(_, required)| *required)
        .unwrap_or(&[])
}

/// Role-required skills that no extracted skill contains (case-insensitive substring).
pub fn find_mismatches(skills: &[String], job_role: &str) -> Vec<String> {
    let skills_lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
    role_requirements(job_role)
        .iter()
        .filter(|req| {
            let req_lower = req.to_lowercase();
            !skills_lower.iter().any(|s| s.contains(&req_lower))
        })
        .map(|req| req.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_takes_maximum() {
        let resume = "2 years at Acme. Then 7+ yrs at Initech. 4 year stint.";
        assert_eq!(extract_years_experience(resume), 7);
    }

    #[test]
    fn test_years_maximum_includes_values_past_u32() {
        let resume = "3 years here, 5000000000 years there";
        assert_eq!(extract_years_experience(resume), 5_000_000_000);
    }

    #[test]
    fn test_years_saturates_on_overflow() {
        assert_eq!(
            extract_years_experience("99999999999999999999999 years, 2 years"),
            u64::MAX
        );
    }

    #[test]
    fn test_years_ignore_non_ascii_digits() {
        assert_eq!(extract_years_experience("\u{0665} years, really 4 years"), 4);
        assert_eq!(extract_years_experience("\u{0669} years"), 0);
    }

    #[test]
    fn test_padded_role_is_unknown() {
        assert!(role_requirements(" backend").is_empty());
        assert_eq!(role_requirements("BACKEND").len(), 6);
    }

    #[test]
    fn test_years_zero_without_mentions() {
        assert_eq!(extract_years_experience("Seasoned engineer."), 0);
    }

    #[test]
    fn test_years_accepts_plus_and_no_space() {
        assert_eq!(extract_years_experience("10+years of Rust"), 10);
        assert_eq!(extract_years_experience("3yrs"), 3);
    }

    #[test]
    fn test_skills_first_seen_order_and_deduplicated() {
        let a = analyze_resume("Docker and React. More React with Python.", "backend");
        assert_eq!(a.skills, vec!["React", "Python", "Docker"]);
    }

    #[test]
    fn test_skills_keep_resume_casing() {
        let a = analyze_resume("Deployed with kubernetes.", "devops");
        assert_eq!(a.skills, vec!["kubernetes"]);
    }

    #[test]
    fn test_tools_extracted_across_classes() {
        let a = analyze_resume("Tested with Jest, tracked in Jira, edited in VS Code.", "frontend");
        assert_eq!(a.tools, vec!["VS Code", "Jira", "Jest"]);
    }

    #[test]
    fn test_backend_without_skills_mismatches_everything() {
        let a = analyze_resume("Cooked meals for a busy restaurant.", "backend");
        assert!(a.skills.is_empty());
        assert_eq!(
            a.mismatches,
            vec!["Node.js", "Express", "Python", "Java", "Databases", "APIs"]
        );
    }

    #[test]
    fn test_mismatch_uses_substring_of_extracted_skill() {
        // "JavaScript" contains "Java", so Java is covered.
        let skills = vec!["JavaScript".to_string(), "node.js".to_string()];
        let mismatches = find_mismatches(&skills, "Backend");
        assert_eq!(mismatches, vec!["Express", "Python", "Databases", "APIs"]);
    }

    #[test]
    fn test_unknown_role_has_no_mismatches() {
        assert!(role_requirements("astronaut").is_empty());
        assert!(find_mismatches(&[], "astronaut").is_empty());
    }

    #[test]
    fn test_projects_are_verb_led_clauses() {
        let a = analyze_resume("At Acme I built a payments ledger. Later designed the API!", "backend");
        assert_eq!(
            a.projects,
            vec!["built a payments ledger.", "designed the API!"]
        );
    }

    #[test]
    fn test_ownership_statements() {
        let a = analyze_resume("Led the platform team. Shipped it.", "backend");
        // Keywords match inside words, so the "i" of "Shipped" starts a clause too.
        assert_eq!(
            a.claimed_ownership,
            vec!["Led the platform team.", "ipped it."]
        );
    }

    #[test]
    fn test_sentence_can_land_in_several_claim_classes() {
        let resume = "Senior engineer who built the best pipeline.";
        let a = analyze_resume(resume, "data");
        // seniority + delivery classes both match the same sentence
        assert_eq!(a.strong_claims.len(), 2);
        assert_eq!(a.exaggerations, vec![resume]);
    }

    #[test]
    fn test_vague_statements() {
        let a = analyze_resume("Familiar with various databases. Wrote docs.", "data");
        assert_eq!(a.vague_statements.len(), 2);
        assert!(a.vague_statements.iter().all(|s| s.contains("various")));
    }

    #[test]
    fn test_empty_matches_do_not_fail() {
        let a = analyze_resume("x", "mobile");
        assert!(a.projects.is_empty());
        assert!(a.strong_claims.is_empty());
        assert_eq!(a.years_experience, 0);
        assert_eq!(a.mismatches.len(), 5);
    }
}
