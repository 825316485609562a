pub mod app;
pub mod ui;

pub use ca_planter_core::config::AppConfig;
