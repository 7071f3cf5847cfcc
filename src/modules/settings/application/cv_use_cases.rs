use std::sync::Arc;

use crate::settings::application::use_cases::{
    delete_cv::IDeleteCvUseCase, download_cv::IDownloadCvUseCase, get_cv::IGetCvUseCase,
    update_cv::IUpdateCvUseCase,
};

#[derive(Clone)]
pub struct CvUseCases {
    pub get: Arc<dyn IGetCvUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateCvUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteCvUseCase + Send + Sync>,
    pub download: Arc<dyn IDownloadCvUseCase + Send + Sync>,
}
