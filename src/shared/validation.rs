//! Field-level checks shared by the content inputs and the contact form.

use email_address::EmailAddress;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Trims `raw` and requires an absolute `http`/`https` URL with a host.
pub fn http_url(field: &str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(format!("{field} cannot be empty")));
    }

    let parsed = Url::parse(trimmed)
        .map_err(|_| ValidationError::new(format!("{field} must be an absolute URL")))?;

    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(trimmed.to_string()),
        _ => Err(ValidationError::new(format!(
            "{field} must use http or https"
        ))),
    }
}

/// Same as [`http_url`] but maps blank input to `None`.
pub fn optional_http_url(field: &str, raw: Option<&str>) -> Result<Option<String>, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => http_url(field, value).map(Some),
    }
}

/// Trimmed, non-blank text.
pub fn required_text(field: &str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Trimmed text, blank mapped to `None`.
pub fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Trims every entry and drops the blank ones, keeping order.
pub fn clean_list(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trims and removes angle brackets from free text coming from the public.
pub fn sanitize_input(raw: &str) -> String {
    raw.trim().replace(['<', '>'], "")
}

pub fn is_valid_email(raw: &str) -> bool {
    EmailAddress::is_valid(raw.trim())
}
