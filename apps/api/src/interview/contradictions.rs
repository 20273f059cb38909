//! Contradiction detection between resume claims and interview answers.
//!
//! No severity and no deduplication: the same kind of contradiction is
//! reported once per offending answer.

use std::sync::OnceLock;

use regex::Regex;

use crate::interview::models::{AnswerRecord, Contradiction};
use crate::interview::resume_signals::parse_year_count;

/// Skills cross-checked between resume, question and answer.
const REFERENCE_SKILLS: &[&str] = &[
    "React",
    "Node.js",
    "Python",
    "JavaScript",
    "TypeScript",
    "AWS",
    "Docker",
];

/// Questions mentioning any of these trigger the experience check.
const EXPERIENCE_CUES: &[&str] = &["experience", "years"];

/// Year counts further apart than this are a mismatch.
const MAX_YEARS_DRIFT: u64 = 2;

fn first_years_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)([0-9]+)\s*(?:years?|yrs?)").expect("years mention regex must compile")
    })
}

/// Scans every recorded answer for experience and skill contradictions.
pub fn detect_contradictions(resume: &str, answers: &[AnswerRecord]) -> Vec<Contradiction> {
    let resume_skills = mentioned_skills(resume);
    let resume_years = first_years_mention(resume);
    let mut contradictions = Vec::new();

    for record in answers {
        let question_lower = record.question.to_lowercase();

        if EXPERIENCE_CUES.iter().any(|cue| question_lower.contains(cue)) {
            let answer_years = first_years_mention(&record.answer);
            if resume_years.abs_diff(answer_years) > MAX_YEARS_DRIFT {
                contradictions.push(Contradiction::new(format!(
                    "Experience mismatch: Resume claims {resume_years} years, answer suggests {answer_years} years"
                )));
            }
        }

        let answer_skills = mentioned_skills(&record.answer);
        let missing: Vec<&str> = resume_skills
            .iter()
            .copied()
            .filter(|skill| {
                let skill_lower = skill.to_lowercase();
                question_lower.contains(&skill_lower)
                    && !answer_skills
                        .iter()
                        .any(|s| s.to_lowercase().contains(&skill_lower))
            })
            .collect();

        if !missing.is_empty() {
            contradictions.push(Contradiction::new(format!(
                "Skill contradiction: Resume mentions {} but answer lacks detail",
                missing.join(", ")
            )));
        }
    }

    contradictions
}

/// First `<n> years` figure in `text`, or 0.
fn first_years_mention(text: &str) -> u64 {
    first_years_re()
        .captures(text)
        .map(|caps| parse_year_count(&caps[1]))
        .unwrap_or(0)
}

fn mentioned_skills(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    REFERENCE_SKILLS
        .iter()
        .copied()
        .filter(|skill| lower.contains(&skill.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::models::QuestionType;

    fn record(question: &str, answer: &str) -> AnswerRecord {
        AnswerRecord {
            question: question.to_string(),
            answer: answer.to_string(),
            question_type: QuestionType::Technical,
        }
    }

    #[test]
    fn test_experience_mismatch_reported() {
        let resume = "I have 3 years of experience with React.";
        let answers = vec![record(
            "How many years of experience do you have?",
            "I've worked for 10 years",
        )];
        let found = detect_contradictions(resume, &answers);
        assert_eq!(
            found,
            vec![Contradiction::new(
                "Experience mismatch: Resume claims 3 years, answer suggests 10 years"
            )]
        );
    }

    #[test]
    fn test_experience_drift_of_two_is_tolerated() {
        let resume = "5 years building services.";
        let answers = vec![record("Tell me about your experience.", "About 3 years.")];
        assert!(detect_contradictions(resume, &answers).is_empty());

        let answers = vec![record("Tell me about your experience.", "About 2 years.")];
        assert_eq!(detect_contradictions(resume, &answers).len(), 1);
    }

    #[test]
    fn test_missing_year_counts_as_zero() {
        let resume = "8 yrs in fintech.";
        let answers = vec![record("How many years?", "A long time.")];
        let found = detect_contradictions(resume, &answers);
        assert_eq!(
            found[0].description,
            "Experience mismatch: Resume claims 8 years, answer suggests 0 years"
        );
    }

    #[test]
    fn test_non_ascii_digits_are_skipped() {
        let resume = "3 years of React.";
        let answers = vec![record(
            "How many years of experience do you have?",
            "\u{0665} years, really 4 years",
        )];
        assert!(detect_contradictions(resume, &answers).is_empty());
    }

    #[test]
    fn test_oversized_year_count_still_compared() {
        let resume = "3 years of React.";
        let answers = vec![record(
            "How many years of experience do you have?",
            "5000000000 years",
        )];
        assert_eq!(
            detect_contradictions(resume, &answers),
            vec![Contradiction::new(
                "Experience mismatch: Resume claims 3 years, answer suggests 5000000000 years"
            )]
        );
    }

    #[test]
    fn test_experience_check_skipped_for_other_questions() {
        let resume = "1 year of Go.";
        let answers = vec![record("Describe a hard bug.", "Spent 9 years on it.")];
        assert!(detect_contradictions(resume, &answers).is_empty());
    }

    #[test]
    fn test_skill_contradiction_names_missing_skills() {
        let resume = "Shipped React and Docker apps on AWS.";
        let answers = vec![record(
            "Can you explain how you've used React, Docker, AWS in your previous projects?",
            "I used AWS Lambda mostly.",
        )];
        let found = detect_contradictions(resume, &answers);
        assert_eq!(
            found,
            vec![Contradiction::new(
                "Skill contradiction: Resume mentions React, Docker but answer lacks detail"
            )]
        );
    }

    #[test]
    fn test_skill_in_question_but_not_resume_is_ignored() {
        let resume = "Wrote Python scripts.";
        let answers = vec![record("How do you use Docker?", "I don't.")];
        assert!(detect_contradictions(resume, &answers).is_empty());
    }

    #[test]
    fn test_repeats_once_per_offending_answer() {
        let resume = "React developer.";
        let answers = vec![
            record("Tell me about React.", "It is a library."),
            record("More about React?", "Hooks."),
        ];
        assert_eq!(detect_contradictions(resume, &answers).len(), 2);
    }

    #[test]
    fn test_no_answers_no_contradictions() {
        assert!(detect_contradictions("10 years of React.", &[]).is_empty());
    }
}
