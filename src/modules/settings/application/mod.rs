pub mod cv_use_cases;
pub mod ports;
pub mod use_cases;
