use std::time::Duration;

use owo_colors::OwoColorize;
use seolens_core::SeoReport;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "SeoLens".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Single-page SEO analysis\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print a labelled value
pub fn print_field(label: &str, value: &str) {
    eprintln!("  {} {}", format!("{}:", label).dimmed(), value.bright_white());
}

/// Print timing information with color coding
pub fn print_timing(label: &str, duration: Duration) {
    let ms = duration.as_secs_f64() * 1000.0;
    let label = format!("{}:", label);

    if ms < 500.0 {
        eprintln!("  {} {:>8.2}ms ({})", label.dimmed(), ms, "fast".dimmed());
    } else if ms < 2000.0 {
        eprintln!("  {} {:>8.2}ms ({})", label.dimmed(), ms, "moderate".bright_yellow());
    } else {
        eprintln!("  {} {:>8.2}ms ({})", label.dimmed(), ms, "slow".bright_red());
    }
}

/// Print a short summary of the finished report
pub fn print_report_summary(report: &SeoReport) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Report Summary".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());

    let content = &report.content;
    print_field("Language", content.language.code());
    print_field("Words", &content.word_count.to_string());
    print_field("Keywords", &content.top_keywords.len().to_string());
    if let Some(top) = content.keyword_density.first() {
        print_field("Top keyword", &format!("{} ({:.2}%)", top.word, top.density));
    }

    let structure = &report.structure;
    if structure.images_without_alt > 0 {
        print_warning(&format!(
            "{} of {} images have no alt text",
            structure.images_without_alt, structure.total_images
        ));
    }
    if report.basic_info.description.is_none() {
        print_warning("Page has no meta description");
    }

    if let Some(technical) = &report.technical {
        print_field("Size", &format_size(technical.page_size_bytes));
        print_field("Encoding", &technical.detected_encoding);
        print_field("Sitemap", technical.sitemap.as_ref().map_or("not found", |s| s.url.as_str()));
    }
    eprintln!();
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
