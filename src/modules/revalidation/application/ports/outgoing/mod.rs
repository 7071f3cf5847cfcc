pub mod path_revalidator;

pub use path_revalidator::{mark_stale, PathRevalidator, RevalidationError};
