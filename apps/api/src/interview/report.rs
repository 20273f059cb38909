//! Report aggregation ("moderation"): folds scores, resume signals and
//! contradictions into one verdict plus a human-readable narrative.
//!
//! The narrative layout is parsed by downstream consumers. Keep it byte-stable.

use crate::interview::answer_scoring::word_count;
use crate::interview::models::{
    AnswerRecord, Authenticity, ConfidenceLevel, Contradiction, Recommendation, Report,
    ResumeAnalysis, StructuredReport,
};

// ────────────────────────────────────────────────────────────────────────────
// Thresholds
// ────────────────────────────────────────────────────────────────────────────

const QUESTIONABLE_CONTRADICTIONS: usize = 2;
const QUESTIONABLE_EXAGGERATIONS: usize = 3;
const MODERATE_EXAGGERATIONS: usize = 1;

const STRENGTH_SCORE: f64 = 7.0;
const WEAKNESS_SCORE: f64 = 5.0;
/// Any answer shorter than this many words is flagged as lacking detail.
const DETAILED_ANSWER_WORDS: usize = 30;

const RED_FLAG_EXAGGERATIONS: usize = 2;
const RED_FLAG_VAGUE_STATEMENTS: usize = 3;
const NO_HIRE_RED_FLAGS: usize = 2;

const STRONG_HIRE_OVERALL: f64 = 8.0;
const HIRE_OVERALL: f64 = 6.0;

const FULL_CONSISTENCY: f64 = 10.0;
const CONSISTENCY_COST_PER_CONTRADICTION: f64 = 2.0;
const HIGH_CONFIDENCE: f64 = 8.0;
const MEDIUM_CONFIDENCE: f64 = 6.0;

// ────────────────────────────────────────────────────────────────────────────
// Fixed wording
// ────────────────────────────────────────────────────────────────────────────

const STRENGTH_TECHNICAL: &str = "Strong technical knowledge and problem-solving skills";
const STRENGTH_COMMUNICATION: &str = "Excellent communication and behavioral responses";
const STRENGTH_LEADERSHIP: &str = "Leadership experience and ownership";
const STRENGTH_GROWTH: &str = "Growth mindset and continuous learning";

const WEAKNESS_TECHNICAL: &str = "Technical depth needs improvement";
const WEAKNESS_COMMUNICATION: &str = "Communication clarity could be enhanced";
const WEAKNESS_DETAIL: &str = "Answers lack sufficient detail and examples";
const WEAKNESS_REASONING: &str = "Need to provide more reasoning for decisions";

const RED_FLAG_EXAGGERATED: &str = "Multiple exaggerated claims in resume";
const RED_FLAG_VAGUE: &str = "Excessive vague statements in resume";

/// Weakness keyword → remediation, checked in order; the last entry is the fallback.
const REMEDIATIONS: &[(&str, &str)] = &[
    (
        "technical",
        "Focus on deepening technical knowledge through hands-on projects and courses",
    ),
    (
        "communication",
        "Practice explaining technical concepts clearly and with specific examples",
    ),
    (
        "detail",
        "Provide more specific examples and metrics in responses",
    ),
];
const REMEDIATION_REASONING: &str = "Work on providing structured reasoning for technical decisions";

// ────────────────────────────────────────────────────────────────────────────
// Aggregation
// ────────────────────────────────────────────────────────────────────────────

/// Builds the final report. `technical_score` and `behavioral_score` are
/// per-answer means and must come from at least one answer each.
pub fn aggregate_report(
    technical_score: f64,
    behavioral_score: f64,
    analysis: &ResumeAnalysis,
    contradictions: &[Contradiction],
    answers: &[AnswerRecord],
) -> Report {
    let authenticity = assess_authenticity(analysis, contradictions);
    let strengths = identify_strengths(technical_score, behavioral_score, answers);
    let weaknesses = identify_weaknesses(technical_score, behavioral_score, answers);
    let red_flags = identify_red_flags(contradictions, analysis);
    let improvement_plan = improvement_plan(&weaknesses);
    let recommendation =
        recommend(technical_score, behavioral_score, authenticity, red_flags.len());
    let confidence = confidence_level(technical_score, behavioral_score, contradictions.len());

    let structured = StructuredReport {
        technical_score,
        behavioral_score,
        resume_authenticity: authenticity,
        strengths,
        weaknesses,
        red_flags,
        improvement_plan,
        hiring_recommendation: recommendation,
        confidence_level: confidence,
    };

    Report {
        human_readable: render_narrative(&structured),
        structured,
    }
}

pub fn assess_authenticity(
    analysis: &ResumeAnalysis,
    contradictions: &[Contradiction],
) -> Authenticity {
    let exaggerations = analysis.exaggerations.len();
    if contradictions.len() > QUESTIONABLE_CONTRADICTIONS
        || exaggerations > QUESTIONABLE_EXAGGERATIONS
    {
        Authenticity::Questionable
    } else if !contradictions.is_empty() || exaggerations > MODERATE_EXAGGERATIONS {
        Authenticity::Moderate
    } else {
        Authenticity::Strong
    }
}

fn any_answer(answers: &[AnswerRecord], pred: impl Fn(&str) -> bool) -> bool {
    answers.iter().any(|a| pred(&a.answer.to_lowercase()))
}

fn identify_strengths(technical: f64, behavioral: f64, answers: &[AnswerRecord]) -> Vec<String> {
    let mut strengths = Vec::new();

    if technical >= STRENGTH_SCORE {
        strengths.push(STRENGTH_TECHNICAL.to_string());
    }
    if behavioral >= STRENGTH_SCORE {
        strengths.push(STRENGTH_COMMUNICATION.to_string());
    }
    if any_answer(answers, |a| a.contains("lead") || a.contains("managed")) {
        strengths.push(STRENGTH_LEADERSHIP.to_string());
    }
    if any_answer(answers, |a| a.contains("learn") || a.contains("improved")) {
        strengths.push(STRENGTH_GROWTH.to_string());
    }

    strengths
}

fn identify_weaknesses(technical: f64, behavioral: f64, answers: &[AnswerRecord]) -> Vec<String> {
    let mut weaknesses = Vec::new();

    if technical < WEAKNESS_SCORE {
        weaknesses.push(WEAKNESS_TECHNICAL.to_string());
    }
    if behavioral < WEAKNESS_SCORE {
        weaknesses.push(WEAKNESS_COMMUNICATION.to_string());
    }
    if answers
        .iter()
        .any(|a| word_count(&a.answer) < DETAILED_ANSWER_WORDS)
    {
        weaknesses.push(WEAKNESS_DETAIL.to_string());
    }
    if any_answer(answers, |a| !a.contains("because") && !a.contains("therefore")) {
        weaknesses.push(WEAKNESS_REASONING.to_string());
    }

    weaknesses
}

fn identify_red_flags(contradictions: &[Contradiction], analysis: &ResumeAnalysis) -> Vec<String> {
    let mut red_flags: Vec<String> = contradictions
        .iter()
        .map(|c| c.description.clone())
        .collect();

    if analysis.exaggerations.len() > RED_FLAG_EXAGGERATIONS {
        red_flags.push(RED_FLAG_EXAGGERATED.to_string());
    }
    if analysis.vague_statements.len() > RED_FLAG_VAGUE_STATEMENTS {
        red_flags.push(RED_FLAG_VAGUE.to_string());
    }

    red_flags
}

fn improvement_plan(weaknesses: &[String]) -> Vec<String> {
    weaknesses
        .iter()
        .map(|weakness| {
            let lower = weakness.to_lowercase();
            REMEDIATIONS
                .iter()
                .find(|(cue, _)| lower.contains(cue))
                .map(|(_, remedy)| *remedy)
                .unwrap_or(REMEDIATION_REASONING)
                .to_string()
        })
        .collect()
}

pub fn recommend(
    technical: f64,
    behavioral: f64,
    authenticity: Authenticity,
    red_flag_count: usize,
) -> Recommendation {
    let overall = (technical + behavioral) / 2.0;

    if authenticity == Authenticity::Questionable || red_flag_count > NO_HIRE_RED_FLAGS {
        Recommendation::NoHire
    } else if overall >= STRONG_HIRE_OVERALL && authenticity == Authenticity::Strong {
        Recommendation::StrongHire
    } else if overall >= HIRE_OVERALL {
        Recommendation::Hire
    } else {
        Recommendation::Borderline
    }
}

pub fn confidence_level(technical: f64, behavioral: f64, contradictions: usize) -> ConfidenceLevel {
    let consistency =
        FULL_CONSISTENCY - CONSISTENCY_COST_PER_CONTRADICTION * contradictions as f64;
    let average = (technical + behavioral + consistency) / 3.0;

    if average >= HIGH_CONFIDENCE {
        ConfidenceLevel::High
    } else if average >= MEDIUM_CONFIDENCE {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Narrative
// ────────────────────────────────────────────────────────────────────────────

fn technical_note(score: f64) -> &'static str {
    if score >= STRENGTH_SCORE {
        "Strong technical foundation with good problem-solving abilities."
    } else if score >= WEAKNESS_SCORE {
        "Decent technical knowledge but room for improvement."
    } else {
        "Technical skills need significant development."
    }
}

fn behavioral_note(score: f64) -> &'static str {
    if score >= STRENGTH_SCORE {
        "Excellent communication skills and professional demeanor."
    } else if score >= WEAKNESS_SCORE {
        "Good communication but could be more articulate."
    } else {
        "Communication skills need substantial improvement."
    }
}

fn authenticity_note(authenticity: Authenticity) -> &'static str {
    match authenticity {
        Authenticity::Strong => "Resume claims appear consistent and believable.",
        Authenticity::Moderate => "Some claims may be exaggerated or need verification.",
        Authenticity::Questionable => "Multiple inconsistencies found in resume claims.",
    }
}

fn recommendation_note(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::StrongHire => {
            "Candidate exceeds requirements and would be a valuable addition."
        }
        Recommendation::Hire => "Candidate meets requirements and would perform well in the role.",
        Recommendation::Borderline => "Candidate has potential but needs development in key areas.",
        Recommendation::NoHire => "Candidate does not meet current requirements.",
    }
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the fixed narrative template. Scores print in shortest decimal form (`8`, `8.5`).
pub fn render_narrative(report: &StructuredReport) -> String {
    let red_flag_section = if report.red_flags.is_empty() {
        String::new()
    } else {
        format!("Red Flags:\n{}\n", bullets(&report.red_flags))
    };

    let sections = [
        "📊 FINAL CANDIDATE REPORT".to_string(),
        format!(
            "Technical Performance: {}/10\n{}",
            report.technical_score,
            technical_note(report.technical_score)
        ),
        format!(
            "Behavioral & Communication: {}/10\n{}",
            report.behavioral_score,
            behavioral_note(report.behavioral_score)
        ),
        format!(
            "Resume Authenticity Assessment: {}\n{}",
            report.resume_authenticity.as_str(),
            authenticity_note(report.resume_authenticity)
        ),
        format!("Strengths:\n{}", bullets(&report.strengths)),
        format!("Areas for Improvement:\n{}", bullets(&report.weaknesses)),
        red_flag_section,
        format!("Improvement Plan:\n{}", bullets(&report.improvement_plan)),
        format!(
            "Final Hiring Recommendation: {}\n{}",
            report.hiring_recommendation.as_str(),
            recommendation_note(report.hiring_recommendation)
        ),
        format!("Confidence Level: {}", report.confidence_level.as_str()),
    ];

    sections.join("\n\n")
}
