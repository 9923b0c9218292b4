//! Structural statistics over resume text.

use serde::{Deserialize, Serialize};

use crate::roast::renderer::strip_list_marker;
use crate::tools::power_words::{find_weak_phrases, is_power_word};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalytics {
    pub word_count: usize,
    /// Non-blank lines.
    pub line_count: usize,
    pub bullet_count: usize,
    pub quantified_bullets: usize,
    /// quantified_bullets / bullet_count, 0.0 when there are no bullets.
    pub quantified_ratio: f64,
    pub action_verb_bullets: usize,
    pub weak_phrase_count: usize,
}

/// A bullet counts as quantified when it carries a digit, a percentage or a currency amount.
fn is_quantified(text: &str) -> bool {
    text.chars()
        .any(|c| c.is_ascii_digit() || matches!(c, '%' | '$' | '€' | '£'))
}

fn starts_with_power_word(text: &str) -> bool {
    text.split_whitespace()
        .next()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .is_some_and(is_power_word)
}

pub fn analyze_resume(text: &str) -> ResumeAnalytics {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let bullets: Vec<&str> = lines
        .iter()
        .filter_map(|line| strip_list_marker(line))
        .filter(|item| !item.is_empty())
        .collect();

    let quantified_bullets = bullets.iter().filter(|b| is_quantified(b)).count();
    let quantified_ratio = if bullets.is_empty() {
        0.0
    } else {
        quantified_bullets as f64 / bullets.len() as f64
    };

    ResumeAnalytics {
        word_count: text.split_whitespace().count(),
        line_count: lines.len(),
        bullet_count: bullets.len(),
        quantified_bullets,
        quantified_ratio,
        action_verb_bullets: bullets.iter().filter(|b| starts_with_power_word(b)).count(),
        weak_phrase_count: find_weak_phrases(text).len(),
    }
}
