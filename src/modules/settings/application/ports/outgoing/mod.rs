pub mod cv_file_fetcher;
pub mod settings_repository;

pub use cv_file_fetcher::{ByteStream, CvFetchError, CvFileFetcher, FetchedFile};
pub use settings_repository::{SettingsRepository, SettingsRepositoryError};
