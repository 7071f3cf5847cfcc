pub mod build_sitemap;
