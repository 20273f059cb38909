//! Interview orchestration: the technical → behavioral → complete state machine.
//!
//! The only component that touches the session store. Extraction, question
//! generation, scoring and aggregation are pure calls made from here.

use std::sync::Arc;

use anyhow::anyhow;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::interview::answer_scoring::{score_communication, score_technical};
use crate::interview::contradictions::detect_contradictions;
use crate::interview::models::{AnswerRecord, InterviewSession, Phase, QuestionType, Report};
use crate::interview::questions::{behavioral_questions, technical_questions};
use crate::interview::registry::{SessionHandle, SessionStore};
use crate::interview::report::aggregate_report;
use crate::interview::resume_signals::analyze_resume;

/// Result of starting an interview.
#[derive(Debug, Clone)]
pub struct StartOutcome {
    pub message: String,
    pub first_question: String,
}

/// Result of recording an answer.
#[derive(Debug, Clone)]
pub enum AnswerOutcome {
    Next {
        question: String,
        question_type: QuestionType,
    },
    Complete(Box<Report>),
}

pub struct InterviewOrchestrator {
    store: Arc<dyn SessionStore>,
}

impl InterviewOrchestrator {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Analyses the resume, builds both question lists and stores a fresh
    /// session under `session_id`, replacing any previous one.
    pub async fn start(
        &self,
        session_id: &str,
        resume: &str,
        job_role: &str,
    ) -> Result<StartOutcome, AppError> {
        let analysis = analyze_resume(resume, job_role);
        let technical = technical_questions(&analysis, job_role);
        let behavioral = behavioral_questions();

        let first_question = technical
            .first()
            .cloned()
            .ok_or_else(|| anyhow!("no technical questions generated for role '{job_role}'"))?;

        debug!(
            session_id,
            skills = analysis.skills.len(),
            tools = analysis.tools.len(),
            years = analysis.years_experience,
            mismatches = analysis.mismatches.len(),
            "Resume analysed"
        );

        let session = InterviewSession::new(
            resume.to_string(),
            job_role.to_string(),
            analysis,
            technical,
            behavioral,
        );

        if self.store.create(session_id, session).await {
            warn!(session_id, "Interview restarted; previous session state discarded");
        }
        info!(session_id, job_role, "Interview started");

        Ok(StartOutcome {
            message: format!(
                "Hello, thank you for joining. I'll be conducting your interview today for the role of {job_role}. Let's begin."
            ),
            first_question,
        })
    }

    /// Records `answer` against the current question and advances the session.
    ///
    /// Holds the session lock for the whole step. After the last behavioral
    /// answer the report is built and the session deleted.
    pub async fn answer(&self, session_id: &str, answer: &str) -> Result<AnswerOutcome, AppError> {
        let handle = self
            .store
            .get(session_id)
            .await
            .ok_or_else(|| AppError::SessionNotFound(session_id.to_string()))?;
        let mut session = handle.lock().await;

        let question_type = match session.phase {
            Phase::Technical => QuestionType::Technical,
            Phase::Behavioral => QuestionType::Behavioral,
            // Finalised by a concurrent request while this one waited for the lock.
            Phase::Complete => return Err(AppError::SessionNotFound(session_id.to_string())),
        };

        let question = session
            .current_question()
            .map(str::to_string)
            .ok_or_else(|| {
                anyhow!(
                    "question index {} out of range in {:?} phase",
                    session.current_question_index,
                    session.phase
                )
            })?;

        session.answers.push(AnswerRecord {
            question,
            answer: answer.to_string(),
            question_type,
        });
        session.current_question_index += 1;
        debug!(
            session_id,
            question_type = question_type.as_str(),
            index = session.current_question_index,
            "Answer recorded"
        );

        let phase_len = session.questions_for(session.phase).len();
        if session.current_question_index >= phase_len {
            match session.phase {
                Phase::Technical => {
                    session.phase = Phase::Behavioral;
                    session.current_question_index = 0;
                    info!(session_id, "Technical phase complete; moving to behavioral");

                    if session.behavioral_questions.is_empty() {
                        return self.complete(session_id, &handle, &mut session).await;
                    }
                }
                Phase::Behavioral => {
                    return self.complete(session_id, &handle, &mut session).await;
                }
                Phase::Complete => {}
            }
        }

        let next = session.current_question().map(str::to_string).ok_or_else(|| {
            anyhow!(
                "no question at index {} in {:?} phase",
                session.current_question_index,
                session.phase
            )
        })?;
        let question_type = match session.phase {
            Phase::Behavioral => QuestionType::Behavioral,
            _ => QuestionType::Technical,
        };

        Ok(AnswerOutcome::Next {
            question: next,
            question_type,
        })
    }

    pub async fn active_sessions(&self) -> usize {
        self.store.active_count().await
    }

    async fn complete(
        &self,
        session_id: &str,
        handle: &SessionHandle,
        session: &mut InterviewSession,
    ) -> Result<AnswerOutcome, AppError> {
        let report = finalize(session)?;
        session.phase = Phase::Complete;

        if !self.store.delete(session_id, handle).await {
            debug!(session_id, "Session was replaced before completion; leaving new session in place");
        }

        let elapsed = Utc::now() - session.started_at;
        info!(
            session_id,
            technical_score = report.structured.technical_score,
            behavioral_score = report.structured.behavioral_score,
            recommendation = report.structured.hiring_recommendation.as_str(),
            elapsed_secs = elapsed.num_seconds(),
            "Interview complete"
        );

        Ok(AnswerOutcome::Complete(Box::new(report)))
    }
}

/// Scores every answer, detects contradictions and aggregates the report.
fn finalize(session: &InterviewSession) -> Result<Report, AppError> {
    let technical: Vec<f64> = session
        .answers_of(QuestionType::Technical)
        .map(|a| f64::from(score_technical(&a.answer)))
        .collect();
    let behavioral: Vec<f64> = session
        .answers_of(QuestionType::Behavioral)
        .map(|a| score_communication(&a.answer).mean())
        .collect();

    let technical_score =
        mean(&technical).ok_or_else(|| anyhow!("no technical answers to score"))?;
    let behavioral_score =
        mean(&behavioral).ok_or_else(|| anyhow!("no behavioral answers to score"))?;

    let contradictions = detect_contradictions(&session.resume, &session.answers);

    Ok(aggregate_report(
        technical_score,
        behavioral_score,
        &session.resume_analysis,
        &contradictions,
        &session.answers,
    ))
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
