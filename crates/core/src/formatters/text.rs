use std::fmt::Write;

use crate::Result;
use crate::report::SeoReport;

/// Configuration for plain text output
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Maximum rows in the keyword table
    pub max_keywords: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { max_keywords: 20 }
    }
}

/// Render a report as human-readable text.
pub fn report_to_text(report: &SeoReport, config: &TextConfig) -> Result<String> {
    let mut out = String::new();
    write_report(&mut out, report, config).map_err(|e| crate::SeoLensError::Io(std::io::Error::other(e)))?;
    Ok(out.trim_end().to_string())
}

fn write_report(out: &mut String, report: &SeoReport, config: &TextConfig) -> std::fmt::Result {
    let heading = report.basic_info.title.as_deref().unwrap_or("(untitled page)");
    writeln!(out, "{}", heading)?;
    writeln!(out, "{}", "=".repeat(heading.chars().count()))?;
    if let Some(url) = &report.url {
        writeln!(out, "URL: {}", url)?;
    }
    writeln!(out)?;

    let info = &report.basic_info;
    writeln!(out, "Basic info")?;
    writeln!(out, "  Title length:       {}", info.title_length)?;
    writeln!(out, "  Description:        {}", info.description.as_deref().unwrap_or("-"))?;
    writeln!(out, "  Description length: {}", info.description_length)?;
    write_optional(out, "Canonical", &info.canonical)?;
    write_optional(out, "OG title", &info.og_title)?;
    write_optional(out, "OG description", &info.og_description)?;
    write_optional(out, "OG image", &info.og_image)?;
    writeln!(out)?;

    let structure = &report.structure;
    writeln!(out, "Structure")?;
    writeln!(
        out,
        "  Images: {} ({} without alt)",
        structure.total_images, structure.images_without_alt
    )?;
    for h1 in &structure.heading_structure.h1_texts {
        writeln!(out, "  h1: {}", h1)?;
    }
    for h2 in &structure.heading_structure.h2_texts {
        writeln!(out, "  h2: {}", h2)?;
    }
    let tags: Vec<String> = structure
        .tag_counts
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(tag, count)| format!("{}={}", tag, count))
        .collect();
    if !tags.is_empty() {
        writeln!(out, "  Tags: {}", tags.join(", "))?;
    }
    writeln!(out)?;

    let content = &report.content;
    writeln!(out, "Content")?;
    writeln!(
        out,
        "  Words: {}  Unique: {}  Characters: {}  Language: {}",
        content.word_count, content.unique_words, content.char_count, content.language
    )?;

    if !content.keyword_density.is_empty() && config.max_keywords > 0 {
        writeln!(out)?;
        writeln!(out, "  {:<24} {:>6} {:>9}", "Keyword", "Count", "Density")?;
        for entry in content.keyword_density.iter().take(config.max_keywords) {
            writeln!(out, "  {:<24} {:>6} {:>8.2}%", entry.word, entry.count, entry.density)?;
        }
    }

    if let Some(technical) = &report.technical {
        writeln!(out)?;
        writeln!(out, "Technical")?;
        writeln!(out, "  Status:    {}", technical.status_code)?;
        writeln!(out, "  Load time: {:.2}s", technical.load_time_seconds)?;
        writeln!(out, "  Size:      {} bytes", technical.page_size_bytes)?;
        writeln!(out, "  Encoding:  {}", technical.detected_encoding)?;
        write_optional(out, "Server", &technical.server)?;
        write_optional(out, "Compression", &technical.content_encoding)?;
        writeln!(out, "  robots.txt: {}", if technical.robots.is_some() { "found" } else { "not found" })?;
        match &technical.sitemap {
            Some(sitemap) => writeln!(out, "  Sitemap: {} ({} URLs)", sitemap.url, sitemap.url_count)?,
            None => writeln!(out, "  Sitemap: not found")?,
        }
    }

    Ok(())
}

fn write_optional(out: &mut String, label: &str, value: &str) -> std::fmt::Result {
    if value.is_empty() { Ok(()) } else { writeln!(out, "  {}: {}", label, value) }
}
