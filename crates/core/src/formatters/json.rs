use crate::Result;
use crate::report::SeoReport;

/// Serialize a report to JSON.
///
/// Non-ASCII text (Cyrillic keywords, titles) is written as-is, not escaped.
pub fn report_to_json(report: &SeoReport, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(serde_json::to_string(report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{AnalyzerConfig, analyze_html};

    fn sample_report() -> SeoReport {
        let html = r#"<html><head><title>Погода в Москве</title></head>
            <body><p>Погода сегодня хорошая, погода завтра тоже</p></body></html>"#;
        analyze_html(html, Some("https://example.ru/"), &AnalyzerConfig::default()).unwrap()
    }

    #[test]
    fn test_report_to_json_pretty() {
        let json = report_to_json(&sample_report(), true).unwrap();

        assert!(json.starts_with("{\n"));
        assert!(json.contains(r#""status": "success""#));
        assert!(json.contains("погода"));
        assert!(json.contains(r#""language": "ru""#));
    }

    #[test]
    fn test_report_to_json_compact() {
        let json = report_to_json(&sample_report(), false).unwrap();

        assert!(!json.contains('\n'));
        assert!(json.contains(r#""url":"https://example.ru/""#));
        assert!(!json.contains("technical"));
    }

    #[test]
    fn test_json_round_trips_through_value() {
        let report = sample_report();
        let json = report_to_json(&report, false).unwrap();
        let parsed: SeoReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
