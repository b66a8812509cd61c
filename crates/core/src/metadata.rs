use crate::Document;
use serde::{Deserialize, Serialize};

/// Title, description, Open Graph and canonical data of a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub title: Option<String>,
    /// Title length in characters (0 when missing).
    pub title_length: usize,
    pub description: Option<String>,
    /// Description length in characters (0 when missing).
    pub description_length: usize,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub canonical: String,
}

impl Document {
    /// Extract basic SEO metadata.
    ///
    /// The description falls back in this order:
    /// 1. Meta `name="description"`
    /// 2. Open Graph `og:description`
    /// 3. Meta `name="Description"`
    pub fn extract_basic_info(&self) -> BasicInfo {
        let title = self.title().map(|t| t.trim().to_string());

        let description = self
            .meta_by_attr("name", "description")
            .or_else(|| self.meta_by_attr("property", "og:description"))
            .or_else(|| self.meta_by_attr("name", "Description"))
            .map(|d| d.trim().to_string());

        let canonical = self
            .select_first("link[rel=\"canonical\"]")
            .ok()
            .flatten()
            .and_then(|link| link.attr("href"))
            .unwrap_or_default()
            .to_string();

        BasicInfo {
            title_length: title.as_deref().map_or(0, |t| t.chars().count()),
            title,
            description_length: description.as_deref().map_or(0, |d| d.chars().count()),
            description,
            og_title: self.meta_by_attr("property", "og:title").unwrap_or_default(),
            og_description: self.meta_by_attr("property", "og:description").unwrap_or_default(),
            og_image: self.meta_by_attr("property", "og:image").unwrap_or_default(),
            canonical,
        }
    }

    /// Content of the first `<meta>` whose `attr` equals `value`.
    fn meta_by_attr(&self, attr: &str, value: &str) -> Option<String> {
        let selector = format!("meta[{}=\"{}\"]", attr, value);
        if let Ok(Some(el)) = self.select_first(&selector)
            && let Some(content) = el.attr("content")
        {
            return Some(content.to_string());
        }
        None
    }
}
