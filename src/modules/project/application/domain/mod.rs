pub mod content_policy;
pub mod slug;

pub use content_policy::ContentPolicy;
pub use slug::{is_valid_slug, normalize_slug, slugify};
