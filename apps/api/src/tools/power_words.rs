//! Curated action verbs, and detection of the weak phrasing they replace.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct PowerWordCategory {
    pub name: &'static str,
    pub words: &'static [&'static str],
}

pub const POWER_WORDS: &[PowerWordCategory] = &[
    PowerWordCategory {
        name: "Leadership",
        words: &[
            "Spearheaded", "Directed", "Orchestrated", "Championed", "Mentored", "Mobilized",
            "Led", "Headed",
        ],
    },
    PowerWordCategory {
        name: "Achievement",
        words: &[
            "Achieved", "Exceeded", "Delivered", "Surpassed", "Accelerated", "Boosted", "Reduced",
            "Increased",
        ],
    },
    PowerWordCategory {
        name: "Communication",
        words: &[
            "Negotiated", "Persuaded", "Presented", "Authored", "Articulated", "Facilitated",
            "Briefed",
        ],
    },
    PowerWordCategory {
        name: "Technical",
        words: &[
            "Engineered", "Architected", "Automated", "Deployed", "Optimized", "Migrated",
            "Debugged", "Built",
        ],
    },
    PowerWordCategory {
        name: "Analytical",
        words: &[
            "Analyzed", "Diagnosed", "Forecasted", "Quantified", "Evaluated", "Audited",
            "Modeled",
        ],
    },
    PowerWordCategory {
        name: "Creative",
        words: &[
            "Designed", "Conceptualized", "Pioneered", "Revamped", "Reimagined", "Launched",
            "Invented",
        ],
    },
];

/// Weak phrase → stronger replacements.
const WEAK_PHRASES: &[(&str, &[&str])] = &[
    ("responsible for", &["Led", "Owned", "Directed"]),
    ("worked on", &["Built", "Engineered", "Delivered"]),
    ("helped", &["Facilitated", "Enabled", "Accelerated"]),
    ("assisted", &["Supported", "Partnered on", "Co-led"]),
    ("participated in", &["Contributed to", "Drove", "Collaborated on"]),
    ("was involved in", &["Contributed to", "Executed", "Delivered"]),
    ("duties included", &["Delivered", "Managed", "Executed"]),
    ("handled", &["Managed", "Resolved", "Administered"]),
    ("tried to", &["Pursued", "Initiated", "Piloted"]),
    ("team player", &["Collaborated across teams on", "Partnered with"]),
    ("hard worker", &["Exceeded targets by", "Delivered ahead of schedule"]),
];

static WEAK_PHRASE_PATTERNS: Lazy<Vec<(Regex, &'static str, &'static [&'static str])>> =
    Lazy::new(|| {
        WEAK_PHRASES
            .iter()
            .map(|(phrase, suggestions)| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(phrase));
                let regex = Regex::new(&pattern).expect("weak phrase pattern is valid");
                (regex, *phrase, *suggestions)
            })
            .collect()
    });

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeakPhraseHit {
    pub phrase: String,
    /// 1-based line number in the submitted text.
    pub line: usize,
    pub line_text: String,
    pub suggestions: Vec<String>,
}

/// Finds weak phrases line by line, in text order.
pub fn find_weak_phrases(text: &str) -> Vec<WeakPhraseHit> {
    let mut hits = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let mut line_hits: Vec<(usize, WeakPhraseHit)> = WEAK_PHRASE_PATTERNS
            .iter()
            .filter_map(|(regex, phrase, suggestions)| {
                regex.find(line).map(|m| {
                    (
                        m.start(),
                        WeakPhraseHit {
                            phrase: phrase.to_string(),
                            line: index + 1,
                            line_text: line.trim().to_string(),
                            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
                        },
                    )
                })
            })
            .collect();
        line_hits.sort_by_key(|(start, _)| *start);
        hits.extend(line_hits.into_iter().map(|(_, hit)| hit));
    }

    hits
}

/// Whether `word` is in the power-word catalog, ignoring case.
pub fn is_power_word(word: &str) -> bool {
    POWER_WORDS
        .iter()
        .flat_map(|category| category.words.iter())
        .any(|w| w.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_no_empty_categories() {
        assert!(POWER_WORDS.iter().all(|c| !c.words.is_empty()));
    }

    #[test]
    fn test_finds_weak_phrases_with_line_numbers() {
        let text = "Software Engineer\n- Responsible for the billing service\n- Helped the team ship v2";
        let hits = find_weak_phrases(text);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].phrase, "responsible for");
        assert_eq!(hits[0].line, 2);
        assert_eq!(hits[1].phrase, "helped");
        assert_eq!(hits[1].line, 3);
        assert!(hits[1].suggestions.contains(&"Facilitated".to_string()));
    }

    #[test]
    fn test_hits_within_line_follow_text_order() {
        let hits = find_weak_phrases("Worked on tooling and helped onboarding");
        let phrases: Vec<_> = hits.iter().map(|h| h.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["worked on", "helped"]);
    }

    #[test]
    fn test_matches_whole_words_only() {
        assert!(find_weak_phrases("Unhelpedness is not a word").is_empty());
        assert!(find_weak_phrases("Mishandled nothing").is_empty());
    }

    #[test]
    fn test_strong_text_has_no_hits() {
        assert!(find_weak_phrases("Architected a billing platform serving 2M users").is_empty());
    }

    #[test]
    fn test_is_power_word_ignores_case() {
        assert!(is_power_word("spearheaded"));
        assert!(is_power_word("BUILT"));
        assert!(!is_power_word("helped"));
    }
}
