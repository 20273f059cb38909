//! Answer scoring: a technical-depth score and three communication dimensions,
//! each an integer in `[0, 10]` built from a base of 5 and keyword rules.

const SCORE_MIN: i32 = 0;
const SCORE_MAX: i32 = 10;
const BASE_SCORE: i32 = 5;

/// Answers with fewer words than this lose `SHORT_ANSWER_PENALTY`.
const SHORT_ANSWER_WORDS: usize = 20;
/// Answers with more words than this gain `LONG_ANSWER_BONUS`.
const LONG_ANSWER_WORDS: usize = 100;
const SHORT_ANSWER_PENALTY: i32 = 2;
const LONG_ANSWER_BONUS: i32 = 2;

const TECHNICAL_TERMS: &[&str] = &[
    "algorithm",
    "architecture",
    "optimization",
    "scalability",
    "performance",
    "security",
];
const MAX_TECHNICAL_TERM_BONUS: usize = 2;

const PROBLEM_SOLVING_TERMS: &[&str] = &[
    "challenge",
    "problem",
    "solution",
    "fixed",
    "improved",
    "optimized",
];
const MAX_PROBLEM_SOLVING_BONUS: usize = 1;

const EXAMPLE_TERMS: &[&str] = &["example", "project"];

/// Clarity: more than this many `.`-separated pieces earns a point.
const MULTI_SENTENCE_PIECES: usize = 3;

/// A phrase rule fires once if any of its phrases occurs in the answer.
struct PhraseRule {
    phrases: &'static [&'static str],
    delta: i32,
    case_sensitive: bool,
}

const fn rule(phrases: &'static [&'static str], delta: i32) -> PhraseRule {
    PhraseRule {
        phrases,
        delta,
        case_sensitive: false,
    }
}

const CLARITY_RULES: &[PhraseRule] = &[
    PhraseRule {
        phrases: &["First", "Then", "Finally"],
        delta: 1,
        case_sensitive: true,
    },
    rule(&["specifically", "for example"], 1),
    rule(&["because", "therefore"], 1),
    rule(&["something", "anything"], -1),
    rule(&["stuff", "things"], -1),
];

const CONFIDENCE_RULES: &[PhraseRule] = &[
    rule(&["i believe", "i think"], 1),
    rule(&["i know", "i'm confident"], 2),
    rule(&["i did", "i created"], 1),
    rule(&["my responsibility", "i led"], 1),
    rule(&["maybe", "perhaps"], -1),
    rule(&["not sure", "i guess"], -2),
];

const HONESTY_RULES: &[PhraseRule] = &[
    rule(&["mistake", "error"], 2),
    rule(&["learned", "improved"], 1),
    rule(&["admit", "realize"], 1),
    rule(&["perfect", "always"], -1),
    rule(&["never", "best"], -1),
];

/// Communication sub-scores for one behavioral answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunicationScores {
    pub clarity: u32,
    pub confidence: u32,
    pub honesty: u32,
}

impl CommunicationScores {
    /// Behavioral score of a single answer: mean of the three dimensions.
    pub fn mean(&self) -> f64 {
        f64::from(self.clarity + self.confidence + self.honesty) / 3.0
    }
}

/// Word count as pieces between single spaces. An empty answer counts as one word.
pub fn word_count(answer: &str) -> usize {
    answer.split(' ').count()
}

/// Scores technical depth of an answer.
pub fn score_technical(answer: &str) -> u32 {
    let lower = answer.to_lowercase();
    let words = word_count(answer);
    let mut score = BASE_SCORE;

    if words < SHORT_ANSWER_WORDS {
        score -= SHORT_ANSWER_PENALTY;
    } else if words > LONG_ANSWER_WORDS {
        score += LONG_ANSWER_BONUS;
    }

    score += count_terms(&lower, TECHNICAL_TERMS).min(MAX_TECHNICAL_TERM_BONUS) as i32;

    // Concrete numbers read as specific metrics.
    if answer.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if EXAMPLE_TERMS.iter().any(|t| lower.contains(t)) {
        score += 1;
    }

    score += count_terms(&lower, PROBLEM_SOLVING_TERMS).min(MAX_PROBLEM_SOLVING_BONUS) as i32;

    clamp_score(score)
}

/// Scores clarity, confidence and honesty of an answer.
pub fn score_communication(answer: &str) -> CommunicationScores {
    let lower = answer.to_lowercase();

    let mut clarity = BASE_SCORE + apply_rules(answer, &lower, CLARITY_RULES);
    if answer.split('.').count() > MULTI_SENTENCE_PIECES {
        clarity += 1;
    }

    CommunicationScores {
        clarity: clamp_score(clarity),
        confidence: clamp_score(BASE_SCORE + apply_rules(answer, &lower, CONFIDENCE_RULES)),
        honesty: clamp_score(BASE_SCORE + apply_rules(answer, &lower, HONESTY_RULES)),
    }
}

fn count_terms(lower: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|t| lower.contains(*t)).count()
}

fn apply_rules(answer: &str, lower: &str, rules: &[PhraseRule]) -> i32 {
    rules
        .iter()
        .filter(|r| {
            let haystack = if r.case_sensitive { answer } else { lower };
            r.phrases.iter().any(|p| haystack.contains(p))
        })
        .map(|r| r.delta)
        .sum()
}

fn clamp_score(score: i32) -> u32 {
    score.clamp(SCORE_MIN, SCORE_MAX) as u32
}
