pub mod site_config;
pub mod use_cases;
