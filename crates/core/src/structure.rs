use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Document;

/// Tags counted in the structure histogram.
pub const HTML_TAGS: [&str; 48] = [
    "html", "head", "body", "title", "meta", "link", "script", "style", "noscript", "header", "nav", "main",
    "article", "section", "aside", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "p", "a", "span", "div", "strong",
    "em", "b", "i", "blockquote", "ul", "ol", "li", "table", "tr", "td", "th", "form", "input", "button", "img",
    "picture", "video", "audio", "iframe", "svg", "canvas",
];

/// Maximum characters kept per heading text.
const HEADING_TEXT_LIMIT: usize = 100;

/// Number of `h2` texts reported.
const H2_TEXT_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadingStructure {
    pub h1_texts: Vec<String>,
    pub h2_texts: Vec<String>,
}

/// Structural counts of a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureReport {
    pub tag_counts: BTreeMap<String, usize>,
    pub total_images: usize,
    pub images_without_alt: usize,
    pub heading_structure: HeadingStructure,
}

impl Document {
    /// Count tags, check image alt text and collect heading text.
    pub fn analyze_structure(&self) -> StructureReport {
        let tag_counts = HTML_TAGS
            .iter()
            .map(|tag| (tag.to_string(), self.count(tag).unwrap_or(0)))
            .collect();

        let images = self.select("img").unwrap_or_default();
        let images_without_alt = images
            .iter()
            .filter(|img| img.attr("alt").is_none_or(|alt| alt.trim().is_empty()))
            .count();

        StructureReport {
            tag_counts,
            total_images: images.len(),
            images_without_alt,
            heading_structure: HeadingStructure {
                h1_texts: self.heading_texts("h1", usize::MAX),
                h2_texts: self.heading_texts("h2", H2_TEXT_LIMIT),
            },
        }
    }

    fn heading_texts(&self, tag: &str, limit: usize) -> Vec<String> {
        self.select(tag)
            .unwrap_or_default()
            .iter()
            .take(limit)
            .map(|h| h.text().trim().chars().take(HEADING_TEXT_LIMIT).collect())
            .collect()
    }
}
