pub mod export_content;
