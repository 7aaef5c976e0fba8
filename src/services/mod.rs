pub mod api;
pub mod loading;
pub mod notify;
