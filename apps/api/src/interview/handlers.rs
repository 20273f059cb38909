//! Axum route handler for the interview endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::interview::models::{QuestionType, Report};
use crate::interview::orchestrator::AnswerOutcome;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRequest {
    pub session_id: String,
    pub resume: String,
    pub job_role: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub session_id: String,
    pub answer: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub message: String,
    pub first_question: String,
    pub question_type: QuestionType,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextQuestionResponse {
    pub next_question: String,
    pub question_type: QuestionType,
}

#[derive(Debug, Serialize)]
pub struct CompleteResponse {
    pub complete: bool,
    pub report: Report,
}

/// Every successful body the endpoint can return.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum InterviewResponse {
    Started(StartResponse),
    Next(NextQuestionResponse),
    Complete(CompleteResponse),
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ai-interview
///
/// Dispatches on `action`: `start` opens (or restarts) a session and returns
/// the first technical question; `answer` records an answer and returns the
/// next question or, after the last one, the final report.
pub async fn handle_interview(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<InterviewResponse>, AppError> {
    let Json(body) =
        body.map_err(|e| AppError::Validation(format!("Malformed request body: {e}")))?;

    let action = body
        .get("action")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation("Invalid action".to_string()))?;

    match action.as_str() {
        "start" => {
            let request: StartRequest = parse_request(body)?;
            require_non_blank("sessionId", &request.session_id)?;
            require_non_blank("resume", &request.resume)?;
            require_non_blank("jobRole", &request.job_role)?;

            let outcome = state
                .orchestrator
                .start(&request.session_id, &request.resume, &request.job_role)
                .await?;

            Ok(Json(InterviewResponse::Started(StartResponse {
                message: outcome.message,
                first_question: outcome.first_question,
                question_type: QuestionType::Technical,
            })))
        }
        "answer" => {
            let request: AnswerRequest = parse_request(body)?;
            require_non_blank("sessionId", &request.session_id)?;

            let outcome = state
                .orchestrator
                .answer(&request.session_id, &request.answer)
                .await?;

            let response = match outcome {
                AnswerOutcome::Next {
                    question,
                    question_type,
                } => InterviewResponse::Next(NextQuestionResponse {
                    next_question: question,
                    question_type,
                }),
                AnswerOutcome::Complete(report) => InterviewResponse::Complete(CompleteResponse {
                    complete: true,
                    report: *report,
                }),
            };
            Ok(Json(response))
        }
        _ => Err(AppError::Validation("Invalid action".to_string())),
    }
}

fn parse_request<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    serde_json::from_value(body).map_err(|e| AppError::Validation(format!("Invalid request: {e}")))
}

fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}
