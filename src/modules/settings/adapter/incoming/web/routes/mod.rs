mod delete_cv;
mod download_cv;
mod get_cv;
mod update_cv;

pub use delete_cv::{__path_delete_cv_handler, delete_cv_handler};
pub use download_cv::{__path_download_cv_handler, download_cv_handler};
pub use get_cv::{__path_get_cv_handler, get_cv_handler};
pub use update_cv::{__path_update_cv_handler, update_cv_handler};
