pub mod case_study_use_cases;
pub mod ports;
pub mod service;
