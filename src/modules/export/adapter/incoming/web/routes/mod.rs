mod export_content;

pub use export_content::{__path_export_content_handler, export_content_handler};
