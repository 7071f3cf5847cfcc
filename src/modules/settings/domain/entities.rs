use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// File name offered to the browser when none is stored.
pub const DEFAULT_CV_FILE_NAME: &str = "CV.pdf";

/// The site-wide settings singleton. Only the CV link lives here today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CvSettings {
    #[schema(example = "https://storage.example.com/cv/jane-doe.pdf")]
    pub cv_url: Option<String>,
    #[schema(example = "Jane-Doe-CV.pdf")]
    pub cv_file_name: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl CvSettings {
    /// The stored CV link, if one is set and non-blank.
    pub fn download_url(&self) -> Option<&str> {
        self.cv_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Name for the `Content-Disposition` header. Quotes and control
    /// characters are dropped so the header stays well-formed.
    pub fn download_file_name(&self) -> String {
        let cleaned: String = self
            .cv_file_name
            .as_deref()
            .unwrap_or(DEFAULT_CV_FILE_NAME)
            .chars()
            .filter(|c| *c != '"' && *c != '\\' && !c.is_control())
            .collect();

        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            DEFAULT_CV_FILE_NAME.to_string()
        } else {
            cleaned.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(url: Option<&str>, name: Option<&str>) -> CvSettings {
        CvSettings {
            cv_url: url.map(str::to_string),
            cv_file_name: name.map(str::to_string),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_blank_url_is_not_downloadable() {
        assert_eq!(settings(Some("  "), None).download_url(), None);
        assert_eq!(settings(None, None).download_url(), None);
        assert_eq!(
            settings(Some("https://x.test/cv.pdf"), None).download_url(),
            Some("https://x.test/cv.pdf")
        );
    }

    #[test]
    fn test_file_name_defaults_and_is_sanitized() {
        assert_eq!(settings(None, None).download_file_name(), "CV.pdf");
        assert_eq!(
            settings(None, Some("my \"cv\".pdf")).download_file_name(),
            "my cv.pdf"
        );
        assert_eq!(settings(None, Some("\"\"")).download_file_name(), "CV.pdf");
    }
}
