pub mod loading_button;
pub mod register_form;
pub mod status_panel;
pub mod upload_form;

pub use loading_button::LoadingButton;
pub use register_form::RegisterForm;
pub use status_panel::StatusPanel;
pub use upload_form::UploadForm;
