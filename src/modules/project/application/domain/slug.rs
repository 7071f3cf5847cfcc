use std::sync::OnceLock;

use regex::Regex;

use crate::shared::validation::ValidationError;

fn slug_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern compiles"))
}

pub fn is_valid_slug(slug: &str) -> bool {
    slug_pattern().is_match(slug)
}

/// Derives a slug from a title: lower-cased words split on whitespace, `-`
/// and `_`, with every non-alphanumeric ASCII character removed.
///
/// "My Cool App!" becomes "my-cool-app".
pub fn slugify(title: &str) -> Result<String, ValidationError> {
    let slug = title
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        return Err(ValidationError::new(
            "title must contain at least one letter or digit to derive a slug",
        ));
    }
    Ok(slug)
}

/// Trims and lower-cases a caller-supplied slug, then checks the pattern.
pub fn normalize_slug(raw: &str) -> Result<String, ValidationError> {
    let slug = raw.trim().to_lowercase();
    if !is_valid_slug(&slug) {
        return Err(ValidationError::new(
            "slug must contain only lowercase letters, digits and single hyphens",
        ));
    }
    Ok(slug)
}
