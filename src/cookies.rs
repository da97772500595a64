// src/cookies.rs

use crate::error::{AppError, AppResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// One cookie of the persisted authentication state, in the JSON shape
/// browser cookie exporters produce. Unknown keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    /// Seconds since the epoch; absent for session cookies.
    #[serde(default)]
    pub expires: Option<f64>,
    #[serde(default)]
    pub http_only: Option<bool>,
    #[serde(default)]
    pub secure: Option<bool>,
    #[serde(default)]
    pub same_site: Option<String>,
}

/// Loads the whole cookie set. Failure here is fatal: without the persisted
/// session there is nothing to extract.
pub fn load_cookies(path: &Path) -> AppResult<Vec<CookieRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read cookie file '{}'", path.display()))?;
    serde_json::from_str(&content).map_err(|source| AppError::CookieParse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BROWSER_EXPORT: &str = r#"[
        {
            "name": "_session_id",
            "value": "abc123",
            "domain": ".members.example.com",
            "path": "/",
            "expires": 1893456000.5,
            "httpOnly": true,
            "secure": true,
            "sameSite": "Lax",
            "hostOnly": false,
            "session": false
        },
        {"name": "locale", "value": "en"}
    ]"#;

    #[test]
    fn test_load_cookies_parses_browser_export() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BROWSER_EXPORT.as_bytes()).unwrap();

        let cookies = load_cookies(file.path()).unwrap();
        assert_eq!(cookies.len(), 2);
        assert_eq!(cookies[0].name, "_session_id");
        assert_eq!(cookies[0].http_only, Some(true));
        assert_eq!(cookies[0].same_site.as_deref(), Some("Lax"));
        // minimal record: every attribute optional
        assert_eq!(cookies[1].value, "en");
        assert!(cookies[1].domain.is_none());
    }

    #[test]
    fn test_load_cookies_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = load_cookies(file.path()).unwrap_err();
        assert!(matches!(err, AppError::CookieParse { .. }));
    }

    #[test]
    fn test_load_cookies_missing_file_is_fatal() {
        let err = load_cookies(Path::new("/no/such/cookies.json")).unwrap_err();
        assert!(matches!(err, AppError::Other(_)));
    }
}
