// Interview engine: resume analysis, question generation, answer scoring,
// contradiction detection and report aggregation behind one session state machine.
// Only the orchestrator touches the session store; every other module is pure.

pub mod answer_scoring;
pub mod contradictions;
pub mod handlers;
pub mod models;
pub mod orchestrator;
pub mod patterns;
pub mod questions;
pub mod registry;
pub mod report;
pub mod resume_signals;
