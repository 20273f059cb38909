//! Declarative keyword tables and the one routine that matches them.
//!
//! Every resume scan is a list of `PatternClass` rows compiled into a `PatternSet`.
//! Terms are literal text (escaped before compilation) and always matched case-insensitively.

use regex::Regex;

/// A named group of literal terms, tried in listed order.
#[derive(Debug, Clone, Copy)]
pub struct PatternClass {
    pub category: &'static str,
    pub terms: &'static [&'static str],
}

/// How much text around a term a match covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScope {
    /// Just the term itself, anywhere in the text (no word boundaries).
    Term,
    /// From the term up to the next `.`, `!` or `?`. The term may sit inside a word.
    Clause,
    /// The whole sentence holding the term: `[^.]*term[^.]*[.!?]`.
    Sentence,
}

/// A compiled set of pattern classes, one regex per class.
#[derive(Debug)]
pub struct PatternSet {
    regexes: Vec<Regex>,
}

impl PatternSet {
    /// Compiles `classes` for the given scope.
    ///
    /// Terms are escaped, so compilation can only fail on a bug in this module.
    pub fn compile(classes: &[PatternClass], scope: MatchScope) -> Self {
        let regexes = classes
            .iter()
            .map(|class| {
                let alternation = class
                    .terms
                    .iter()
                    .map(|t| regex::escape(t))
                    .collect::<Vec<_>>()
                    .join("|");
                let pattern = match scope {
                    MatchScope::Term => format!("(?i)(?:{alternation})"),
                    MatchScope::Clause => format!("(?i)(?:{alternation})[^.!?]*[.!?]"),
                    MatchScope::Sentence => format!("(?i)[^.]*(?:{alternation})[^.]*[.!?]"),
                };
                Regex::new(&pattern).unwrap_or_else(|e| {
                    panic!("keyword pattern for '{}' must compile: {e}", class.category)
                })
            })
            .collect();

        Self { regexes }
    }

    /// Every match of every class, class by class, duplicates kept.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.regexes
            .iter()
            .flat_map(|re| re.find_iter(text).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Matches in first-seen order with exact duplicates collapsed.
    pub fn find_distinct(&self, text: &str) -> Vec<String> {
        let mut seen = Vec::new();
        for found in self.find_all(text) {
            if !seen.contains(&found) {
                seen.push(found);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANGS: &[PatternClass] = &[
        PatternClass {
            category: "languages",
            terms: &["JavaScript", "Java", "C++"],
        },
        PatternClass {
            category: "infra",
            terms: &["Docker", "Git"],
        },
    ];

    #[test]
    fn test_term_scope_prefers_earlier_alternative() {
        let set = PatternSet::compile(LANGS, MatchScope::Term);
        assert_eq!(set.find_all("JavaScript and Java"), vec!["JavaScript", "Java"]);
    }

    #[test]
    fn test_term_scope_keeps_resume_spelling_and_escapes() {
        let set = PatternSet::compile(LANGS, MatchScope::Term);
        assert_eq!(set.find_all("wrote c++ daily"), vec!["c++"]);
    }

    #[test]
    fn test_term_scope_is_unanchored() {
        let set = PatternSet::compile(LANGS, MatchScope::Term);
        assert_eq!(set.find_all("Hosted on GitHub"), vec!["Git"]);
    }

    #[test]
    fn test_find_distinct_collapses_exact_duplicates_only() {
        let set = PatternSet::compile(LANGS, MatchScope::Term);
        let found = set.find_distinct("Docker, Java, Docker, docker");
        assert_eq!(found, vec!["Java", "Docker", "docker"]);
    }

    #[test]
    fn test_sentence_scope_returns_whole_sentence() {
        let classes = &[PatternClass {
            category: "hedge",
            terms: &["various"],
        }];
        let set = PatternSet::compile(classes, MatchScope::Sentence);
        let found = set.find_all("Shipped code. Used various tools. Done.");
        assert_eq!(found, vec![" Used various tools."]);
    }

    #[test]
    fn test_sentence_scope_only_splits_on_periods() {
        let classes = &[PatternClass {
            category: "hedge",
            terms: &["various"],
        }];
        let set = PatternSet::compile(classes, MatchScope::Sentence);
        let found = set.find_all("Used various tools! Done.");
        assert_eq!(found, vec!["Used various tools! Done."]);
    }

    #[test]
    fn test_clause_scope_starts_at_term() {
        let classes = &[PatternClass {
            category: "verbs",
            terms: &["built"],
        }];
        let set = PatternSet::compile(classes, MatchScope::Clause);
        assert_eq!(set.find_all("We built a cache."), vec!["built a cache."]);
    }

    #[test]
    fn test_clause_scope_matches_inside_words() {
        let classes = &[PatternClass {
            category: "ownership",
            terms: &["I"],
        }];
        let set = PatternSet::compile(classes, MatchScope::Clause);
        assert_eq!(set.find_all("Built it in time."), vec!["ilt it in time."]);
    }
}
