//! Section segmenter — splits cleaned roast text into titled, categorized cards.
//!
//! Two passes:
//! 1. A line-oriented state machine that opens a new section on every heading.
//! 2. If that finds one section or none, a paragraph split over blank lines.
//!
//! Headings are short lines that follow a blank line or end in a colon. Short
//! body lines after a blank therefore also open sections; card layout expects that.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::roast::categories::{classify, SectionIcon, ANALYSIS_TITLE, INTRODUCTION_TITLE};

/// Headings are strictly shorter than this many characters.
const MAX_HEADING_CHARS: usize = 50;

static NUMBERED_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.").expect("numbered marker pattern is valid"));
static PARAGRAPH_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t\r]*\n").expect("paragraph break pattern is valid"));

/// A titled chunk of roast text rendered as one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub icon: SectionIcon,
    /// Source heading line(s) that opened this section, verbatim. Consecutive
    /// headings with no body between them are joined with `\n`. `None` for
    /// the implicit introduction and for fallback paragraphs.
    pub heading: Option<String>,
    pub content: String,
}

/// Section being accumulated by the state machine.
struct OpenSection {
    title: String,
    icon: SectionIcon,
    heading: Option<String>,
    content: String,
}

impl OpenSection {
    fn from_heading(line: &str) -> Self {
        let trimmed = line.trim();
        let (title, icon) = match classify(trimmed) {
            Some(category) => (category.title.to_string(), category.icon),
            None => {
                let free_form = trimmed.strip_suffix(':').unwrap_or(trimmed).trim_end();
                (free_form.to_string(), SectionIcon::Document)
            }
        };
        Self {
            title,
            icon,
            heading: Some(line.to_string()),
            content: String::new(),
        }
    }

    fn introduction() -> Self {
        Self {
            title: INTRODUCTION_TITLE.to_string(),
            icon: SectionIcon::Document,
            heading: None,
            content: String::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.content.push_str(line);
        self.content.push('\n');
    }

    fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    fn finish(self) -> Section {
        Section {
            title: self.title,
            icon: self.icon,
            heading: self.heading,
            content: self.content.trim().to_string(),
        }
    }
}

/// Splits cleaned feedback into ordered sections.
///
/// Returns an empty vector for blank input and at least one section otherwise.
pub fn segment_into_sections(cleaned: &str) -> Vec<Section> {
    if cleaned.trim().is_empty() {
        return Vec::new();
    }

    let sections = segment_by_headings(cleaned);
    if sections.len() > 1 {
        debug!(count = sections.len(), "segmented roast by headings");
        return sections;
    }

    let sections = segment_by_paragraphs(cleaned);
    debug!(
        count = sections.len(),
        "heading pass found no structure, fell back to paragraphs"
    );
    sections
}

/// Whether `line` opens a new section given the line before it.
/// The first line of the text behaves as if preceded by a blank line.
pub fn is_heading(line: &str, previous: Option<&str>) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }

    let short = trimmed.chars().count() < MAX_HEADING_CHARS;
    if !short {
        return false;
    }

    if trimmed.ends_with(':') {
        return true;
    }

    let after_blank = previous.map_or(true, |prev| prev.trim().is_empty());
    after_blank && !starts_with_list_marker(trimmed)
}

fn starts_with_list_marker(trimmed: &str) -> bool {
    trimmed.starts_with('•') || trimmed.starts_with('-') || NUMBERED_MARKER_RE.is_match(trimmed)
}

fn segment_by_headings(cleaned: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<OpenSection> = None;
    // Heading lines whose section never received content. They are folded
    // into the next section's heading, or the last section's body at the end.
    let mut orphans: Vec<String> = Vec::new();
    let mut previous: Option<&str> = None;

    for line in cleaned.split('\n') {
        if is_heading(line, previous) {
            if let Some(open) = current.take() {
                if open.has_content() {
                    sections.push(open.finish());
                } else if let Some(heading) = open.heading {
                    orphans.push(heading);
                }
            }
            let mut next = OpenSection::from_heading(line);
            if !orphans.is_empty() {
                orphans.push(line.to_string());
                next.heading = Some(orphans.join("\n"));
                orphans.clear();
            }
            current = Some(next);
        } else {
            current
                .get_or_insert_with(OpenSection::introduction)
                .push_line(line);
        }
        previous = Some(line);
    }

    if let Some(open) = current {
        if open.has_content() {
            sections.push(open.finish());
        } else if let Some(heading) = open.heading {
            orphans.push(heading);
        }
    }

    if let Some(last) = sections.last_mut() {
        for orphan in orphans.drain(..) {
            last.content.push('\n');
            last.content.push_str(orphan.trim());
        }
    }

    sections
}

fn segment_by_paragraphs(cleaned: &str) -> Vec<Section> {
    PARAGRAPH_BREAK_RE
        .split(cleaned)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| {
            let (title, icon) = match classify(paragraph) {
                Some(category) => (category.title.to_string(), category.icon),
                None => (ANALYSIS_TITLE.to_string(), SectionIcon::Analysis),
            };
            Section {
                title,
                icon,
                heading: None,
                content: paragraph.to_string(),
            }
        })
        .collect()
}
