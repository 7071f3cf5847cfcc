pub mod delete_cv;
pub mod download_cv;
pub mod get_cv;
pub mod update_cv;
