mod get_stale_paths;

pub use get_stale_paths::{__path_get_stale_paths_handler, get_stale_paths_handler, StalePathsQuery};
