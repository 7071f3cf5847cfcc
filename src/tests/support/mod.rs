pub mod app_state_builder;
pub mod auth_helper;
pub mod fake_http;
pub mod in_memory_store;
pub mod project_test_fixtures;
pub mod stubs;

#[cfg(test)]
pub fn load_test_env() {
    dotenvy::from_filename(".env.test").ok();
}
