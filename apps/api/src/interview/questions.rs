//! Question generation. Five technical questions shaped by the resume and role,
//! five fixed behavioral questions. Every branch has a fallback.

use crate::interview::models::ResumeAnalysis;

const TOP_SKILLS: usize = 3;
const TOP_TOOLS: usize = 2;

/// Below this many years the candidate gets the "staying current" question.
const JUNIOR_YEARS: u64 = 2;
/// From this many years on the candidate gets the mentoring question.
const SENIOR_YEARS: u64 = 5;

const ROLE_PROBLEMS: &[(&str, &str)] = &[
    (
        "frontend",
        "How would you optimize the performance of a React application that's loading slowly?",
    ),
    (
        "backend",
        "How would you design a scalable API that handles millions of requests?",
    ),
    (
        "fullstack",
        "How would you architect a full-stack application from scratch?",
    ),
    (
        "devops",
        "How would you set up CI/CD pipeline for a microservices application?",
    ),
    (
        "mobile",
        "How would you handle offline data synchronization in a mobile app?",
    ),
    (
        "data",
        "How would you design a data pipeline for real-time analytics?",
    ),
];

const GENERIC_PROBLEM: &str = "Describe your approach to solving complex technical problems.";

const BEHAVIORAL_QUESTIONS: [&str; 5] = [
    "Tell me about a time when you faced a significant challenge or conflict in a project. How did you handle it?",
    "Describe a situation where you had to work with a difficult team member. How did you manage the relationship?",
    "Give an example of a time when you had to learn a new technology quickly. What was your approach?",
    "Describe a project where you took leadership. What was your role and what was the outcome?",
    "Tell me about a time when you made a mistake. How did you handle it and what did you learn?",
];

/// Technical questions in fixed order: skills, project, tools, experience tier, role problem.
pub fn technical_questions(analysis: &ResumeAnalysis, job_role: &str) -> Vec<String> {
    vec![
        skill_question(&analysis.skills, job_role),
        project_question(&analysis.projects),
        tool_question(&analysis.tools),
        experience_question(analysis.years_experience),
        problem_solving_question(job_role),
    ]
}

/// The canned behavioral questions. Independent of resume and role.
pub fn behavioral_questions() -> Vec<String> {
    BEHAVIORAL_QUESTIONS.iter().map(|q| q.to_string()).collect()
}

fn skill_question(skills: &[String], job_role: &str) -> String {
    if skills.is_empty() {
        return format!(
            "What technical skills do you consider most important for a {job_role} role?"
        );
    }
    let primary: Vec<&str> = skills.iter().take(TOP_SKILLS).map(String::as_str).collect();
    format!(
        "Can you explain how you've used {} in your previous projects?",
        primary.join(", ")
    )
}

fn project_question(projects: &[String]) -> String {
    if projects.is_empty() {
        "Tell me about a challenging project you've worked on recently.".to_string()
    } else {
        "Choose one project from your resume and walk me through the technical challenges you faced and how you solved them.".to_string()
    }
}

fn tool_question(tools: &[String]) -> String {
    if tools.is_empty() {
        return "What development tools and environments do you prefer and why?".to_string();
    }
    let primary: Vec<&str> = tools.iter().take(TOP_TOOLS).map(String::as_str).collect();
    format!(
        "How do you use {} in your development workflow?",
        primary.join(" and ")
    )
}

fn experience_question(years: u64) -> String {
    let question = if years < JUNIOR_YEARS {
        "How do you stay updated with the latest technologies and best practices?"
    } else if years < SENIOR_YEARS {
        "What's the most complex technical problem you've solved in your career so far?"
    } else {
        "How have you mentored junior developers or contributed to technical decision-making in your team?"
    };
    question.to_string()
}

fn problem_solving_question(job_role: &str) -> String {
    let role = job_role.to_lowercase();
    ROLE_PROBLEMS
        .iter()
        .find(|(key, _)| *key == role)
        .map(|(_, q)| *q)
        .unwrap_or(GENERIC_PROBLEM)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(skills: &[&str], tools: &[&str], projects: usize, years: u64) -> ResumeAnalysis {
        ResumeAnalysis {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            tools: tools.iter().map(|s| s.to_string()).collect(),
            projects: (0..projects).map(|i| format!("built thing {i}.")).collect(),
            years_experience: years,
            ..ResumeAnalysis::default()
        }
    }

    #[test]
    fn test_always_five_of_each() {
        let qs = technical_questions(&ResumeAnalysis::default(), "unknown");
        assert_eq!(qs.len(), 5);
        assert_eq!(behavioral_questions().len(), 5);
    }

    #[test]
    fn test_skill_question_names_top_three() {
        let a = analysis(&["React", "Python", "Docker", "Go"], &[], 0, 0);
        let qs = technical_questions(&a, "backend");
        assert_eq!(
            qs[0],
            "Can you explain how you've used React, Python, Docker in your previous projects?"
        );
    }

    #[test]
    fn test_skill_question_fallback_names_role() {
        let qs = technical_questions(&ResumeAnalysis::default(), "backend");
        assert_eq!(
            qs[0],
            "What technical skills do you consider most important for a backend role?"
        );
    }

    #[test]
    fn test_project_question_branches() {
        let with = technical_questions(&analysis(&[], &[], 1, 0), "data");
        assert!(with[1].contains("one project from your resume"));
        let without = technical_questions(&analysis(&[], &[], 0, 0), "data");
        assert!(without[1].contains("challenging project"));
    }

    #[test]
    fn test_tool_question_names_top_two() {
        let a = analysis(&[], &["Jest", "Jira", "Vite"], 0, 0);
        let qs = technical_questions(&a, "frontend");
        assert_eq!(qs[2], "How do you use Jest and Jira in your development workflow?");
        let none = technical_questions(&ResumeAnalysis::default(), "frontend");
        assert!(none[2].contains("prefer and why"));
    }

    #[test]
    fn test_experience_tier_boundaries() {
        let q = |years| technical_questions(&analysis(&[], &[], 0, years), "data")[3].clone();
        assert!(q(0).contains("stay updated"));
        assert!(q(1).contains("stay updated"));
        assert!(q(2).contains("most complex technical problem"));
        assert!(q(4).contains("most complex technical problem"));
        assert!(q(5).contains("mentored junior developers"));
        assert!(q(20).contains("mentored junior developers"));
    }

    #[test]
    fn test_role_problem_lookup_is_case_insensitive() {
        let qs = technical_questions(&ResumeAnalysis::default(), "DevOps");
        assert_eq!(
            qs[4],
            "How would you set up CI/CD pipeline for a microservices application?"
        );
    }

    #[test]
    fn test_padded_role_gets_generic_problem() {
        let qs = technical_questions(&ResumeAnalysis::default(), " backend ");
        assert_eq!(qs[4], GENERIC_PROBLEM);
    }

    #[test]
    fn test_unknown_role_gets_generic_problem() {
        let qs = technical_questions(&ResumeAnalysis::default(), "astronaut");
        assert_eq!(qs[4], GENERIC_PROBLEM);
    }

    #[test]
    fn test_behavioral_questions_fixed_order() {
        let qs = behavioral_questions();
        assert!(qs[0].starts_with("Tell me about a time when you faced a significant challenge"));
        assert!(qs[4].contains("made a mistake"));
    }
}
