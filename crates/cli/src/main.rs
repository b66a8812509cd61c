use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use seolens_core::{
    AnalyzerConfig, SeoAnalyzer, SeoReport, TextConfig, analyze_html, fetch_file, fetch_stdin, report_to_json,
    report_to_text,
};
use url::Url;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Invalid format: {}. Valid options: json, text", s)),
        }
    }
}

/// Analyze a single web page for SEO: metadata, structure, keywords
#[derive(Parser, Debug)]
#[command(name = "seolens")]
#[command(version)]
#[command(about = "Single-page SEO analysis", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (json, text)
    #[arg(short, long, default_value = "json", value_name = "FORMAT")]
    format: OutputFormat,

    /// Number of keywords to report
    #[arg(long, default_value = "50", value_name = "N")]
    top_n: usize,

    /// Minimum keyword length in characters
    #[arg(long, default_value = "4", value_name = "N")]
    min_length: usize,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "15", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Skip the robots.txt request
    #[arg(long)]
    no_robots: bool,

    /// Skip sitemap discovery
    #[arg(long)]
    no_sitemap: bool,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Print progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn analyzer_config(&self) -> AnalyzerConfig {
        let mut builder = AnalyzerConfig::builder()
            .top_n(self.top_n)
            .min_length(self.min_length)
            .timeout(self.timeout)
            .include_robots(!self.no_robots)
            .include_sitemap(!self.no_sitemap);

        if let Some(ua) = &self.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        builder.build()
    }

    fn is_url(&self) -> bool {
        self.input.starts_with("http://") || self.input.starts_with("https://")
    }
}

async fn build_report(args: &Args, config: AnalyzerConfig) -> anyhow::Result<SeoReport> {
    if args.is_url() {
        Url::parse(&args.input).with_context(|| format!("Invalid URL: {}", args.input))?;

        if args.verbose {
            echo::print_step(1, 2, &format!("Fetching {}", args.input.bright_white().underline()));
        }
        let analyzer = SeoAnalyzer::new(config).context("Failed to create HTTP client")?;
        return analyzer
            .analyze_url(&args.input)
            .await
            .with_context(|| format!("Failed to analyze {}", args.input));
    }

    let html = if args.input == "-" {
        if args.verbose {
            echo::print_step(1, 2, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")?
    } else {
        if args.verbose {
            echo::print_step(1, 2, &format!("Reading from file {}", args.input.bright_white()));
        }
        fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    if args.verbose {
        echo::print_field("Size", &echo::format_size(html.len()));
        if !args.no_robots || !args.no_sitemap {
            echo::print_info("Local input: robots.txt and sitemap checks skipped");
        }
    }

    analyze_html(&html, None, &config).context("Failed to analyze HTML")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        echo::print_banner();
    }

    let start = Instant::now();
    let report = build_report(&args, args.analyzer_config()).await?;

    if args.verbose {
        echo::print_timing("Analysis", start.elapsed());
        echo::print_report_summary(&report);
        echo::print_step(2, 2, "Writing report");
    }

    let output = match args.format {
        OutputFormat::Json => report_to_json(&report, !args.compact).context("Failed to serialize report")?,
        OutputFormat::Text => report_to_text(&report, &TextConfig::default()).context("Failed to format report")?,
    };

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Report written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
