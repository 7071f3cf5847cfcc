mod get_sitemap;

pub use get_sitemap::{__path_get_sitemap_handler, get_sitemap_handler};
