pub mod api;
pub mod patch_field;
pub mod validation;

pub use patch_field::PatchField;
