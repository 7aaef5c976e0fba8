pub mod app;
pub mod components;
pub mod config;
pub mod exports;
pub mod hooks;
pub mod models;
pub mod services;

pub use app::App;
