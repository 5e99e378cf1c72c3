pub mod app_config;
pub mod output_format;
