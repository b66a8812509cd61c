//! Library API integration tests
use seolens_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).unwrap()
}

#[test]
fn test_russian_article_report() {
    let html = read_fixture("russian_article.html");
    let report = analyze_html(&html, Some("https://example.ru/pogoda/moskva"), &AnalyzerConfig::default())
        .expect("should analyze");

    assert_eq!(report.status, "success");
    assert_eq!(report.content.language, Language::Russian);
    assert_eq!(report.content.top_keywords[0].word, "погода");
    // Script and style text stay out of the count.
    assert_eq!(report.content.top_keywords[0].count, 6);

    let info = &report.basic_info;
    assert_eq!(info.title.as_deref(), Some("Погода в Москве на неделю"));
    assert_eq!(info.title_length, 25);
    assert!(info.description.as_deref().unwrap().starts_with("Прогноз погоды"));
    assert_eq!(info.og_image, "https://example.ru/images/moscow.jpg");
    assert_eq!(info.canonical, "https://example.ru/pogoda/moskva");

    let structure = &report.structure;
    assert_eq!(structure.total_images, 2);
    assert_eq!(structure.images_without_alt, 1);
    assert_eq!(structure.heading_structure.h1_texts, vec!["Погода в Москве"]);
    assert_eq!(structure.heading_structure.h2_texts, vec!["Температура", "Осадки"]);
    assert_eq!(structure.tag_counts["script"], 1);
}

#[test]
fn test_english_article_report() {
    let html = read_fixture("english_article.html");
    let report = analyze_html(&html, None, &AnalyzerConfig::default()).expect("should analyze");

    assert_eq!(report.content.language, Language::English);
    assert_eq!(report.content.top_keywords[0].word, "ownership");
    assert_eq!(report.content.top_keywords[0].count, 5);
    assert_eq!(report.basic_info.og_description, "");
    assert_eq!(report.structure.images_without_alt, 0);
    assert!(report.url.is_none());
}

#[test]
fn test_empty_page_report() {
    let html = read_fixture("empty.html");
    let report = analyze_html(&html, None, &AnalyzerConfig::default()).expect("should analyze");

    assert_eq!(report.content.word_count, 0);
    assert_eq!(report.content.language, Language::Unknown);
    assert!(report.content.top_keywords.is_empty());
    assert_eq!(report.basic_info.title, None);
}

#[test]
fn test_keyword_density_matches_counts() {
    let html = read_fixture("english_article.html");
    let report = analyze_html(&html, None, &AnalyzerConfig::default()).unwrap();
    let content = &report.content;

    assert_eq!(content.top_keywords.len(), content.keyword_density.len());
    for (keyword, density) in content.top_keywords.iter().zip(&content.keyword_density) {
        assert_eq!(keyword.word, density.word);
        assert_eq!(keyword.count, density.count);
        let percent = keyword.count as f64 / content.word_count as f64 * 100.0;
        assert!((density.density - percent).abs() < 0.0051);
        assert!(density.density > 0.0 && density.density <= 100.0);
    }

    let total: usize = content.keyword_density.iter().map(|e| e.count).sum();
    assert!(total <= content.word_count);
}

#[test]
fn test_keyword_density_known_values() {
    let mut words = vec!["ownership"];
    words.extend(std::iter::repeat_n("the", 31));
    let html = format!("<html><body><p>{}</p></body></html>", words.join(" "));
    let report = analyze_html(&html, None, &AnalyzerConfig::default()).unwrap();

    assert_eq!(report.content.word_count, 32);
    assert_eq!(report.content.keyword_density[0].word, "ownership");
    assert_eq!(report.content.keyword_density[0].density, 3.12);
}

#[test]
fn test_config_limits_keywords() {
    let html = read_fixture("russian_article.html");
    let config = AnalyzerConfig::builder().top_n(3).min_length(8).build();
    let report = analyze_html(&html, None, &config).unwrap();

    assert!(report.content.top_keywords.len() <= 3);
    assert!(report.content.top_keywords.iter().all(|k| k.word.chars().count() >= 8));
}

#[test]
fn test_document_as_text_source() {
    let html = read_fixture("english_article.html");
    let doc = Document::parse(&html).unwrap();
    let from_doc = analyze_text_content(&doc, &ContentConfig::default());
    let from_text = analyze_text(&doc.visible_text(), &ContentConfig::default());

    assert_eq!(from_doc, from_text);
}

#[test]
fn test_formatters() {
    let html = read_fixture("english_article.html");
    let report = analyze_html(&html, Some("https://example.com/rust/ownership"), &AnalyzerConfig::default()).unwrap();

    let json = report_to_json(&report, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["content"]["top_keywords"][0]["word"], "ownership");
    assert_eq!(value, report.to_json().unwrap());

    let text = report_to_text(&report, &TextConfig::default()).unwrap();
    assert!(text.starts_with("Understanding Ownership in Rust"));
    assert!(text.contains("ownership"));
}

#[test]
fn test_sitemap_fixture_count() {
    let xml = read_fixture("sitemap.xml");
    #[cfg(feature = "sitemap")]
    assert_eq!(count_sitemap_urls(&xml), 3);
    #[cfg(not(feature = "sitemap"))]
    assert_eq!(count_sitemap_urls(&xml), 0);
}

#[cfg(feature = "fetch")]
mod live {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn analyzer() -> SeoAnalyzer {
        SeoAnalyzer::new(AnalyzerConfig::builder().timeout(5).build()).unwrap()
    }

    async fn mount_page(server: &MockServer, route: &str, html: String) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("server", "wiremock")
                    .set_body_raw(html, "text/html; charset=utf-8"),
            )
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_analyze_url_full_report() {
        let server = MockServer::start().await;
        mount_page(&server, "/article", read_fixture("english_article.html")).await;

        let robots = format!("User-agent: *\nDisallow: /admin\nSitemap: {}/custom-sitemap.xml\n", server.uri());
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string(robots.clone()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/custom-sitemap.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(read_fixture("sitemap.xml")))
            .mount(&server)
            .await;

        let url = format!("{}/article", server.uri());
        let report = analyzer().analyze_url(&url).await.unwrap();

        assert_eq!(report.url.as_deref(), Some(url.as_str()));
        assert_eq!(report.content.language, Language::English);

        let technical = report.technical.expect("live reports carry technical data");
        assert_eq!(technical.status_code, 200);
        assert_eq!(technical.server, "wiremock");
        assert_eq!(technical.detected_encoding, "utf-8");
        assert!(technical.page_size_bytes > 0);
        assert!(technical.load_time_seconds >= 0.0);
        assert_eq!(technical.robots.as_deref(), Some(robots.as_str()));

        let sitemap = technical.sitemap.expect("declared sitemap should be found");
        assert!(sitemap.url.ends_with("/custom-sitemap.xml"));
        #[cfg(feature = "sitemap")]
        assert_eq!(sitemap.url_count, 3);
    }

    #[tokio::test]
    async fn test_sitemap_fallback_to_standard_paths() {
        let server = MockServer::start().await;
        mount_page(&server, "/", read_fixture("russian_article.html")).await;
        Mock::given(method("GET"))
            .and(path("/sitemap_index.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(read_fixture("sitemap.xml")))
            .mount(&server)
            .await;

        let report = analyzer().analyze_url(&format!("{}/", server.uri())).await.unwrap();
        let technical = report.technical.unwrap();

        assert_eq!(technical.robots, None);
        assert!(technical.sitemap.unwrap().url.ends_with("/sitemap_index.xml"));
    }

    #[tokio::test]
    async fn test_robots_and_sitemap_can_be_skipped() {
        let server = MockServer::start().await;
        mount_page(&server, "/", read_fixture("english_article.html")).await;
        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *"))
            .expect(0)
            .mount(&server)
            .await;

        let config = AnalyzerConfig::builder().include_robots(false).include_sitemap(false).build();
        let report = SeoAnalyzer::new(config).unwrap().analyze_url(&server.uri()).await.unwrap();
        let technical = report.technical.unwrap();

        assert_eq!(technical.robots, None);
        assert_eq!(technical.sitemap, None);
    }

    #[tokio::test]
    async fn test_non_200_page_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = analyzer().analyze_url(&format!("{}/missing", server.uri())).await;
        assert!(matches!(result, Err(SeoLensError::HttpStatus { status: 404 })));
    }

    #[tokio::test]
    async fn test_windows_1251_page_is_decoded() {
        let server = MockServer::start().await;
        let (body, _, _) = encoding_rs::WINDOWS_1251
            .encode("<html><head><title>Новости</title></head><body><p>Новости спорта и новости города</p></body></html>");
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(body.into_owned(), "text/html; charset=windows-1251"),
            )
            .mount(&server)
            .await;

        let report = analyzer().analyze_url(&server.uri()).await.unwrap();
        assert_eq!(report.basic_info.title.as_deref(), Some("Новости"));
        assert_eq!(report.content.top_keywords[0].word, "новости");
        assert_eq!(report.technical.unwrap().detected_encoding, "windows-1251");
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let result = analyzer().analyze_url("not a url").await;
        assert!(matches!(result, Err(SeoLensError::InvalidUrl(_))));
    }
}
