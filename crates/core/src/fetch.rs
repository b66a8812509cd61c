//! Page fetching from URLs, files, and stdin.
//!
//! HTTP fetching needs the `fetch` feature. Local input (files and stdin) is
//! always available.

use std::fs;
use std::path::PathBuf;

#[cfg(feature = "fetch")]
pub use http::*;

use crate::{Result, SeoLensError};

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(SeoLensError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(SeoLensError::from)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(SeoLensError::from)?;

    Ok(buffer)
}

#[cfg(feature = "fetch")]
mod http {
    use std::sync::LazyLock;
    use std::time::{Duration, Instant};

    use encoding_rs::Encoding;
    use regex::Regex;
    use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_ENCODING, CONTENT_TYPE, HeaderMap, SERVER};
    use reqwest::{Client, StatusCode};
    use url::Url;

    use crate::{Result, SeoLensError};

    /// How many leading body bytes are searched for a `charset` declaration.
    const CHARSET_SNIFF_BYTES: usize = 2000;

    static CHARSET_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"(?i)charset[=:]\s*["']?([-\w.]+)"#).expect("valid charset pattern"));

    /// HTTP client configuration for fetching pages.
    #[derive(Debug, Clone)]
    pub struct FetchConfig {
        /// Request timeout in seconds.
        pub timeout: u64,
        /// User-Agent header sent with every request.
        pub user_agent: String,
        /// Accept-Language header sent with page requests.
        pub accept_language: String,
    }

    impl Default for FetchConfig {
        fn default() -> Self {
            Self {
                timeout: 15,
                user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
                             Chrome/120.0.0.0 Safari/537.36"
                    .to_string(),
                accept_language: "ru-RU,ru;q=0.8,en-US;q=0.5,en;q=0.3".to_string(),
            }
        }
    }

    /// A fetched and decoded page.
    #[derive(Debug, Clone)]
    pub struct FetchedPage {
        /// URL after redirects.
        pub url: Url,
        pub status: u16,
        /// Decoded HTML.
        pub html: String,
        /// Size of the raw body in bytes.
        pub size_bytes: usize,
        /// Encoding label used for decoding.
        pub encoding: String,
        pub content_encoding: String,
        pub server: String,
        pub load_time: Duration,
    }

    /// Builds the client shared by page, robots.txt and sitemap requests.
    pub fn build_client(config: &FetchConfig) -> Result<Client> {
        Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(SeoLensError::HttpError)
    }

    /// Parses a URL and requires an http or https scheme.
    pub fn parse_http_url(url: &str) -> Result<Url> {
        let parsed = Url::parse(url).map_err(|e| SeoLensError::InvalidUrl(format!("{}: {}", url, e)))?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => Err(SeoLensError::InvalidUrl(format!(
                "unsupported scheme '{}', expected http or https",
                scheme
            ))),
        }
    }

    /// Fetches a page and decodes its body.
    ///
    /// Anything but `200 OK` is reported as [`SeoLensError::HttpStatus`].
    pub async fn fetch_page(client: &Client, url: &str, config: &FetchConfig) -> Result<FetchedPage> {
        let url = parse_http_url(url)?;
        let start = Instant::now();

        let response = client
            .get(url)
            .header(
                ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            )
            .header(ACCEPT_LANGUAGE, &config.accept_language)
            .send()
            .await
            .map_err(|e| classify_error(e, config.timeout))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %response.url(), "page response");

        if status != StatusCode::OK {
            return Err(SeoLensError::HttpStatus { status: status.as_u16() });
        }

        let final_url = response.url().clone();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| classify_error(e, config.timeout))?;
        let load_time = start.elapsed();

        let encoding = detect_encoding(header_value(&headers, CONTENT_TYPE).as_deref(), &body);
        let html = decode_body(&body, &encoding);
        tracing::debug!(bytes = body.len(), encoding = %encoding, "page decoded");

        Ok(FetchedPage {
            url: final_url,
            status: status.as_u16(),
            html,
            size_bytes: body.len(),
            encoding,
            content_encoding: header_value(&headers, CONTENT_ENCODING).unwrap_or_default(),
            server: header_value(&headers, SERVER).unwrap_or_default(),
            load_time,
        })
    }

    /// Fetches a text resource, returning `None` for any status but 200.
    pub async fn fetch_optional_text(client: &Client, url: &Url) -> Result<Option<String>> {
        let response = client.get(url.clone()).send().await?;

        if response.status() != StatusCode::OK {
            tracing::debug!(status = response.status().as_u16(), url = %url, "resource not available");
            return Ok(None);
        }

        Ok(Some(response.text().await?))
    }

    /// Picks the character encoding of a response body.
    ///
    /// The `charset` parameter of `Content-Type` wins unless it is missing or
    /// ISO-8859-1 (the HTTP default that servers send without meaning it). In
    /// that case the first bytes of the body are searched for a `charset`
    /// declaration, falling back to UTF-8.
    pub fn detect_encoding(content_type: Option<&str>, body: &[u8]) -> String {
        if let Some(charset) = content_type.and_then(charset_param)
            && !charset.eq_ignore_ascii_case("iso-8859-1")
        {
            return charset;
        }

        let head = &body[..body.len().min(CHARSET_SNIFF_BYTES)];
        let preview = String::from_utf8_lossy(head);
        CHARSET_RE
            .captures(&preview)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "utf-8".to_string())
    }

    /// Decodes a body with the labelled encoding, replacing invalid sequences.
    ///
    /// Labels `encoding_rs` does not know are decoded as UTF-8.
    pub fn decode_body(body: &[u8], label: &str) -> String {
        match Encoding::for_label(label.trim().as_bytes()) {
            Some(encoding) => encoding.decode(body).0.into_owned(),
            None => String::from_utf8_lossy(body).into_owned(),
        }
    }

    fn charset_param(content_type: &str) -> Option<String> {
        content_type.split(';').skip(1).find_map(|param| {
            let (name, value) = param.split_once('=')?;
            name.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim().trim_matches('"').to_string())
                .filter(|v| !v.is_empty())
        })
    }

    fn header_value(headers: &HeaderMap, name: reqwest::header::HeaderName) -> Option<String> {
        headers.get(name).and_then(|v| v.to_str().ok()).map(|v| v.to_string())
    }

    fn classify_error(err: reqwest::Error, timeout: u64) -> SeoLensError {
        if err.is_timeout() {
            SeoLensError::Timeout { timeout }
        } else if err.is_connect() {
            SeoLensError::Connection(err.to_string())
        } else {
            SeoLensError::HttpError(err)
        }
    }

}
