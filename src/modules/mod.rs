pub mod auth;
pub mod case_study;
pub mod contact;
pub mod email;
pub mod export;
pub mod project;
pub mod revalidation;
pub mod settings;
pub mod sitemap;
