pub mod error;
pub mod format;
pub mod upload;
pub mod validation;
