// Roast formatting engine.
// Implements: emphasis cleanup, heading segmentation with paragraph fallback,
// list/paragraph block rendering, and intensity-calibrated roast prompts.
// Everything here is synchronous and pure; handlers call it inline.

pub mod categories;
pub mod cleaner;
pub mod handlers;
pub mod intensity;
pub mod prompts;
pub mod renderer;
pub mod segmenter;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::roast::categories::SectionIcon;
use crate::roast::cleaner::clean_text;
use crate::roast::renderer::{render_content, Block};
use crate::roast::segmenter::{segment_into_sections, Section};

/// A section together with its rendered blocks, ready for a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedSection {
    pub title: String,
    pub icon: SectionIcon,
    pub heading: Option<String>,
    pub content: String,
    pub blocks: Vec<Block>,
}

impl From<Section> for RenderedSection {
    fn from(section: Section) -> Self {
        let blocks = render_content(&section.content);
        Self {
            title: section.title,
            icon: section.icon,
            heading: section.heading,
            content: section.content,
            blocks,
        }
    }
}

/// Full formatter output for one roast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedRoast {
    pub cleaned: String,
    pub sections: Vec<RenderedSection>,
}

/// Runs clean → segment → render over raw model output.
pub fn format_roast(raw: &str) -> FormattedRoast {
    let cleaned = clean_text(raw);
    let sections: Vec<RenderedSection> = segment_into_sections(&cleaned)
        .into_iter()
        .map(RenderedSection::from)
        .collect();

    debug!(
        raw_chars = raw.len(),
        cleaned_chars = cleaned.len(),
        sections = sections.len(),
        "formatted roast"
    );

    FormattedRoast { cleaned, sections }
}
