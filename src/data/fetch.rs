//! Document acquisition.
//!
//! A document comes from exactly one place per run: an HTTP endpoint, a local
//! JSON file, or the built-in sample. URL fetching always asks for a fresh
//! body, never a cached one.

use std::fs::File;
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;

use crate::data::sample::sample_document;
use crate::domain::HorizonsDoc;
use crate::error::AppError;

/// Environment variable naming the default document URL, read from the
/// process environment or a `.env` file.
pub const DATA_URL_VAR: &str = "HZ_DATA_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
    Sample,
}

impl DataSource {
    /// Where a run reads its document from.
    ///
    /// `--sample` wins outright. An explicit `--data` argument is a URL when
    /// it carries an HTTP scheme and a file path otherwise. With neither,
    /// the URL comes from [`DATA_URL_VAR`].
    pub fn resolve(data: Option<&str>, sample: bool) -> Result<Self, AppError> {
        if sample {
            return Ok(Self::Sample);
        }
        if let Some(arg) = data {
            if arg.starts_with("http://") || arg.starts_with("https://") {
                return Ok(Self::Url(arg.to_string()));
            }
            return Ok(Self::File(PathBuf::from(arg)));
        }
        dotenvy::dotenv().ok();
        match std::env::var(DATA_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Ok(Self::Url(url)),
            _ => Err(AppError::new(
                2,
                format!("No data source. Pass --data <URL|PATH>, set {DATA_URL_VAR} in the environment (.env), or use --sample."),
            )),
        }
    }
}

/// Fetch and decode the document behind `url`.
pub fn fetch_document(url: &str) -> Result<HorizonsDoc, AppError> {
    let client = Client::new();
    let resp = client
        .get(url)
        .header("Cache-Control", "no-store")
        .send()
        .map_err(|e| AppError::new(4, format!("Data request failed: {e}")))?;

    if !resp.status().is_success() {
        return Err(AppError::new(
            4,
            format!("Data request failed with status {}.", resp.status()),
        ));
    }

    resp.json()
        .map_err(|e| AppError::new(4, format!("Failed to parse horizons document: {e}")))
}

/// Decode a document from a local JSON file.
pub fn read_document(path: &Path) -> Result<HorizonsDoc, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open document '{}': {e}", path.display())))?;
    serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid horizons document: {e}")))
}

/// Load the document for one run and refuse empty ones, since no view can
/// render without records.
pub fn load_document(source: &DataSource) -> Result<HorizonsDoc, AppError> {
    let doc = match source {
        DataSource::Url(url) => fetch_document(url)?,
        DataSource::File(path) => read_document(path)?,
        DataSource::Sample => sample_document()?,
    };
    if doc.is_empty() {
        return Err(AppError::new(3, "Document has no usable records."));
    }
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let mut request = Vec::new();
            loop {
                let n = stream.read(&mut buf).unwrap_or(0);
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/data.json")
    }

    #[test]
    fn resolve_prefers_sample_flag() {
        let source = DataSource::resolve(Some("https://example.test/data.json"), true).unwrap();
        assert_eq!(source, DataSource::Sample);
    }

    #[test]
    fn resolve_splits_urls_from_paths() {
        let url = DataSource::resolve(Some("https://example.test/data.json"), false).unwrap();
        assert_eq!(
            url,
            DataSource::Url("https://example.test/data.json".to_string())
        );
        let file = DataSource::resolve(Some("out/data.json"), false).unwrap();
        assert_eq!(file, DataSource::File(PathBuf::from("out/data.json")));
    }

    #[test]
    fn fetch_error_status_is_fatal() {
        let url = serve_once("HTTP/1.1 404 Not Found", "");
        let err = fetch_document(&url).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn fetch_garbage_body_is_fatal() {
        let url = serve_once("HTTP/1.1 200 OK", "not json");
        let err = fetch_document(&url).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn fetch_decodes_a_document() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"generated_at":"2025-06-01","domain_horizons":[{"domain":"reasoning","horizon_p50_minutes":30.0}]}"#,
        );
        let doc = fetch_document(&url).unwrap();
        assert_eq!(doc.domain_horizons.len(), 1);
        assert_eq!(doc.domain_horizons[0].domain, "reasoning");
    }

    #[test]
    fn load_rejects_empty_documents() {
        let path = std::env::temp_dir().join("hz-empty-doc-test.json");
        std::fs::write(&path, "{}").unwrap();
        let err = load_document(&DataSource::File(path.clone())).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn load_missing_file_is_a_usage_error() {
        let path = std::env::temp_dir().join("hz-no-such-doc-test.json");
        std::fs::remove_file(&path).ok();
        let err = load_document(&DataSource::File(path)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn load_sample_succeeds() {
        let doc = load_document(&DataSource::Sample).unwrap();
        assert!(!doc.is_empty());
    }
}
