use chrono::{DateTime, Utc};
use serde::Serialize;

/// Stage of an interview. Only ever moves forward: technical → behavioral → complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Technical,
    Behavioral,
    Complete,
}

/// Which question list an answer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Technical,
    Behavioral,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Technical => "technical",
            QuestionType::Behavioral => "behavioral",
        }
    }
}

/// One recorded question/answer pair.
#[derive(Debug, Clone)]
pub struct AnswerRecord {
    pub question: String,
    pub answer: String,
    pub question_type: QuestionType,
}

/// Signals pattern-matched out of a resume. Computed once per session.
#[derive(Debug, Clone, Default)]
pub struct ResumeAnalysis {
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    pub projects: Vec<String>,
    pub claimed_ownership: Vec<String>,
    pub years_experience: u64,
    pub strong_claims: Vec<String>,
    pub vague_statements: Vec<String>,
    pub exaggerations: Vec<String>,
    /// Role-required skills with no counterpart among `skills`.
    pub mismatches: Vec<String>,
}

/// A mismatch between something the resume asserts and a later answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contradiction {
    pub description: String,
}

impl Contradiction {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Per-session interview state, owned by the session store and mutated only
/// by the orchestrator.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    pub resume: String,
    pub job_role: String,
    pub phase: Phase,
    /// Index into the question list of the *current* phase.
    pub current_question_index: usize,
    pub answers: Vec<AnswerRecord>,
    pub resume_analysis: ResumeAnalysis,
    pub technical_questions: Vec<String>,
    pub behavioral_questions: Vec<String>,
    pub started_at: DateTime<Utc>,
}

impl InterviewSession {
    pub fn new(
        resume: String,
        job_role: String,
        resume_analysis: ResumeAnalysis,
        technical_questions: Vec<String>,
        behavioral_questions: Vec<String>,
    ) -> Self {
        Self {
            resume,
            job_role,
            phase: Phase::Technical,
            current_question_index: 0,
            answers: Vec::new(),
            resume_analysis,
            technical_questions,
            behavioral_questions,
            started_at: Utc::now(),
        }
    }

    /// Question list for `phase`. The complete phase has none.
    pub fn questions_for(&self, phase: Phase) -> &[String] {
        match phase {
            Phase::Technical => &self.technical_questions,
            Phase::Behavioral => &self.behavioral_questions,
            Phase::Complete => &[],
        }
    }

    pub fn current_question(&self) -> Option<&str> {
        self.questions_for(self.phase)
            .get(self.current_question_index)
            .map(String::as_str)
    }

    pub fn answers_of(&self, question_type: QuestionType) -> impl Iterator<Item = &AnswerRecord> {
        self.answers
            .iter()
            .filter(move |a| a.question_type == question_type)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Report
// ────────────────────────────────────────────────────────────────────────────

/// Coarse trust level of the resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Authenticity {
    Strong,
    Moderate,
    Questionable,
}

impl Authenticity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Authenticity::Strong => "Strong",
            Authenticity::Moderate => "Moderate",
            Authenticity::Questionable => "Questionable",
        }
    }
}

/// Final hiring verdict bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    #[serde(rename = "Strong Hire")]
    StrongHire,
    Hire,
    Borderline,
    #[serde(rename = "No Hire")]
    NoHire,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::StrongHire => "Strong Hire",
            Recommendation::Hire => "Hire",
            Recommendation::Borderline => "Borderline",
            Recommendation::NoHire => "No Hire",
        }
    }
}

/// Reliability label for the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

/// Machine-readable half of the final report. Field names are part of the wire contract.
#[derive(Debug, Clone, Serialize)]
pub struct StructuredReport {
    pub technical_score: f64,
    pub behavioral_score: f64,
    pub resume_authenticity: Authenticity,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub red_flags: Vec<String>,
    pub improvement_plan: Vec<String>,
    pub hiring_recommendation: Recommendation,
    pub confidence_level: ConfidenceLevel,
}

/// Terminal interview output. Produced once and never stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub human_readable: String,
    pub structured: StructuredReport,
}
