//! The ordered keyword table that maps roast headings to canonical section titles.
//!
//! The table is a slice, not a map: entries are checked top to bottom and the
//! first keyword hit wins, so reordering entries changes classification.

use serde::{Deserialize, Serialize};

/// Display hint for a section card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionIcon {
    Impression,
    Weakness,
    Cliche,
    Rating,
    Suggestion,
    Tone,
    Achievement,
    /// Free-form headings and the implicit introduction.
    Document,
    /// Paragraphs produced by fallback segmentation that match no category.
    Analysis,
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub title: &'static str,
    /// Lowercase substrings; any hit selects this category.
    pub keywords: &'static [&'static str],
    pub icon: SectionIcon,
}

pub const INTRODUCTION_TITLE: &str = "Introduction";
pub const ANALYSIS_TITLE: &str = "Analysis";

pub const CATEGORY_TABLE: &[Category] = &[
    Category {
        title: "Overall Impression",
        keywords: &["overall", "impression", "first glance", "summary", "verdict"],
        icon: SectionIcon::Impression,
    },
    Category {
        title: "Top Weaknesses",
        keywords: &["weakness", "weak point", "red flag", "problem", "flaw"],
        icon: SectionIcon::Weakness,
    },
    Category {
        title: "Clichés & Overused Phrases",
        keywords: &["cliché", "cliche", "overused", "buzzword", "phrase"],
        icon: SectionIcon::Cliche,
    },
    Category {
        title: "Rating",
        keywords: &["rating", "score", "/10", "out of 10"],
        icon: SectionIcon::Rating,
    },
    Category {
        title: "Improvement Suggestions",
        keywords: &["improve", "suggestion", "recommend", "how to fix", "next step", "tips"],
        icon: SectionIcon::Suggestion,
    },
    Category {
        title: "Profile Tone",
        keywords: &["tone", "voice"],
        icon: SectionIcon::Tone,
    },
    Category {
        title: "Achievement Clarity",
        keywords: &["achievement", "accomplishment", "impact", "clarity"],
        icon: SectionIcon::Achievement,
    },
];

/// Returns the first category whose keywords occur in `text`, ignoring case.
pub fn classify(text: &str) -> Option<&'static Category> {
    let lower = text.to_lowercase();
    CATEGORY_TABLE
        .iter()
        .find(|category| category.keywords.iter().any(|kw| lower.contains(kw)))
}
