//! Keyword matching: how much of a job description's vocabulary a resume covers.
//!
//! Pure-Rust and deterministic. Keywords are weighted by how often the job
//! description repeats them, so a resume missing the one term mentioned five
//! times scores lower than one missing a term mentioned once.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Keeps `+`, `#` and `.` inside tokens so `c++`, `c#` and `node.js` survive.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9][a-z0-9+#.]*").expect("token pattern is valid"));

const MAX_KEYWORDS: usize = 30;

const STOP_WORDS: &[&str] = &[
    "a", "about", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been", "but", "by",
    "can", "do", "etc", "for", "from", "has", "have", "in", "into", "is", "it", "its", "job",
    "more", "must", "not", "of", "on", "or", "our", "other", "role", "such", "that", "the",
    "their", "this", "to", "us", "we", "well", "what", "who", "will", "with", "work", "you",
    "your", "years", "year", "experience", "team", "ability", "strong", "plus", "preferred",
    "required", "including", "new", "across", "within", "using",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub frequency: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatchReport {
    pub score: u32, // 0 – 100
    pub matched: Vec<KeywordEntry>,
    pub missing: Vec<KeywordEntry>,
    pub recommendation: String,
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    TOKEN_RE.find_iter(text).filter_map(|m| {
        let token = m.as_str().trim_end_matches('.');
        let keep = token.chars().count() >= 2
            && !token.chars().all(|c| c.is_ascii_digit())
            && !STOP_WORDS.contains(&token);
        keep.then(|| token.to_string())
    })
}

/// Extracts the most frequent meaningful terms from a job description.
///
/// Ordered by frequency (descending), ties broken by first appearance.
pub fn extract_keywords(job_description: &str) -> Vec<KeywordEntry> {
    let lower = job_description.to_lowercase();
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u32> = HashMap::new();

    for token in tokenize(&lower) {
        let count = counts.entry(token.clone()).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    let mut keywords: Vec<KeywordEntry> = order
        .into_iter()
        .map(|keyword| {
            let frequency = counts.get(&keyword).copied().unwrap_or(0);
            KeywordEntry { keyword, frequency }
        })
        .collect();
    // Stable sort keeps first-appearance order among equal frequencies.
    keywords.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    keywords.truncate(MAX_KEYWORDS);
    keywords
}

/// Scores `resume_text` against the keywords of `job_description`.
pub fn match_keywords(resume_text: &str, job_description: &str) -> KeywordMatchReport {
    let keywords = extract_keywords(job_description);

    if keywords.is_empty() {
        return KeywordMatchReport {
            score: 0,
            matched: vec![],
            missing: vec![],
            recommendation: "No keywords found in the job description, so there is nothing to match."
                .to_string(),
        };
    }

    let resume_lower = resume_text.to_lowercase();
    let resume_tokens: HashSet<String> = tokenize(&resume_lower).collect();

    let total_weight: u32 = keywords.iter().map(|k| k.frequency).sum();
    let (matched, missing): (Vec<_>, Vec<_>) = keywords
        .into_iter()
        .partition(|k| resume_tokens.contains(&k.keyword));
    let matched_weight: u32 = matched.iter().map(|k| k.frequency).sum();

    let score = ((matched_weight as f32 / total_weight as f32) * 100.0).round() as u32;
    let recommendation = build_recommendation(score, &missing);

    KeywordMatchReport {
        score,
        matched,
        missing,
        recommendation,
    }
}

fn build_recommendation(score: u32, missing: &[KeywordEntry]) -> String {
    let top_missing: Vec<&str> = missing.iter().take(5).map(|k| k.keyword.as_str()).collect();

    if score >= 80 {
        "Strong match. Your resume already speaks the job description's language.".to_string()
    } else if score >= 50 {
        format!(
            "Partial match ({score}/100). Work these terms in where they are true: {}.",
            top_missing.join(", ")
        )
    } else {
        format!(
            "Weak match ({score}/100). The posting keeps mentioning {}, and your resume does not.",
            top_missing.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = "Senior Rust Engineer. You will build distributed systems in Rust. \
        Required: Rust, Kubernetes, PostgreSQL. Experience with C++ or Node.js is a plus. \
        Rust expertise and distributed tracing matter.";

    #[test]
    fn test_extract_keywords_orders_by_frequency() {
        let keywords = extract_keywords(JD);
        assert_eq!(keywords[0].keyword, "rust");
        assert_eq!(keywords[0].frequency, 4);
        assert_eq!(keywords[1].keyword, "distributed");
        assert_eq!(keywords[1].frequency, 2);
    }

    #[test]
    fn test_extract_keywords_keeps_symbols_and_drops_stop_words() {
        let keywords: Vec<String> = extract_keywords(JD).into_iter().map(|k| k.keyword).collect();
        assert!(keywords.contains(&"c++".to_string()));
        assert!(keywords.contains(&"node.js".to_string()));
        assert!(!keywords.contains(&"the".to_string()));
        assert!(!keywords.contains(&"experience".to_string()));
        // Sentence-final periods are not part of the token.
        assert!(keywords.contains(&"postgresql".to_string()));
    }

    #[test]
    fn test_extract_keywords_caps_count() {
        let jd: String = (0..100).map(|i| format!("skill{i} ")).collect();
        assert_eq!(extract_keywords(&jd).len(), MAX_KEYWORDS);
    }

    #[test]
    fn test_match_full_coverage_scores_100() {
        let report = match_keywords(JD, JD);
        assert_eq!(report.score, 100);
        assert!(report.missing.is_empty());
        assert!(report.recommendation.starts_with("Strong match"));
    }

    #[test]
    fn test_match_weights_by_frequency() {
        let jd = "rust rust rust go";
        let with_rust = match_keywords("I write Rust daily", jd);
        let with_go = match_keywords("I write Go daily", jd);
        assert_eq!(with_rust.score, 75);
        assert_eq!(with_go.score, 25);
        assert_eq!(with_go.missing[0].keyword, "rust");
    }

    #[test]
    fn test_match_empty_job_description() {
        let report = match_keywords("anything", "   ");
        assert_eq!(report.score, 0);
        assert!(report.matched.is_empty());
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_weak_match_lists_missing_terms() {
        let report = match_keywords("Barista with latte art skills", JD);
        assert!(report.score < 50);
        assert!(report.recommendation.contains("rust"));
    }
}
