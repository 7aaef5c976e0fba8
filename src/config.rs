use web_sys::Document;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Delay before a status page reloads itself while jobs are processing
    pub const REFRESH_DELAY_MS: u32 = 5_000;

    /// Countdown tick for the auto-refresh banner
    pub const COUNTDOWN_TICK_MS: u32 = 1_000;

    /// Client-side upload cap (500 MiB); the server stays authoritative
    pub const MAX_UPLOAD_BYTES: u64 = 500 * 1024 * 1024;

    /// How long a notification stays on screen before fading
    pub const TOAST_DISPLAY_MS: u32 = 5_000;

    /// Fade-out duration before a notification is detached
    pub const TOAST_FADE_MS: u32 = 300;

    /// Minimum password length enforced on registration submit
    pub const MIN_PASSWORD_LEN: usize = 6;
}

/// Explicitly constructed application settings, passed down through a Yew
/// context instead of living in a page-global object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    base_path: String,
    refresh_delay_ms: u32,
}

impl AppSettings {
    /// Creates a builder for constructing `AppSettings`.
    pub fn builder() -> AppSettingsBuilder {
        AppSettingsBuilder::default()
    }

    /// Reads settings from the host document: the URL base path comes from a
    /// `<meta name="base-path">` tag when present.
    pub fn from_document(document: &Document) -> Self {
        let base_path = document
            .query_selector("meta[name=\"base-path\"]")
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"))
            .unwrap_or_default();

        Self::builder().base_path(base_path).build()
    }

    /// URL prefix prepended to every server path.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Status-page reload delay in milliseconds.
    pub fn refresh_delay_ms(&self) -> u32 {
        self.refresh_delay_ms
    }

    /// Joins the base path with a server-relative path.
    pub fn url(&self, path: &str) -> String {
        let trimmed = self.base_path.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{trimmed}{path}")
        } else {
            format!("{trimmed}/{path}")
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettingsBuilder::default().build()
    }
}

/// Builder for constructing `AppSettings` with custom values.
#[derive(Debug, Default)]
pub struct AppSettingsBuilder {
    base_path: Option<String>,
    refresh_delay_ms: Option<u32>,
}

impl AppSettingsBuilder {
    /// Sets the URL base path (empty for a root-mounted application).
    pub fn base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Sets the status-page reload delay (primarily for testing).
    pub fn refresh_delay_ms(mut self, delay: u32) -> Self {
        self.refresh_delay_ms = Some(delay);
        self
    }

    /// Builds the `AppSettings`.
    pub fn build(self) -> AppSettings {
        AppSettings {
            base_path: self.base_path.unwrap_or_default(),
            refresh_delay_ms: self.refresh_delay_ms.unwrap_or(Config::REFRESH_DELAY_MS),
        }
    }
}

/// Which page behavior to mount, derived from the `data-page` attribute of the
/// mount element. Unknown or absent values render nothing page-specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    None,
    Register,
    Upload,
    Status {
        /// Server-rendered count of in-progress conversion jobs.
        processing: u32,
    },
}

impl Page {
    /// Parses the page kind from the mount element's data attributes.
    pub fn from_attributes(page: Option<&str>, processing_count: Option<&str>) -> Self {
        match page {
            Some("register") => Self::Register,
            Some("upload") => Self::Upload,
            Some("status") => {
                let processing = processing_count
                    .and_then(|raw| raw.trim().parse().ok())
                    .unwrap_or(0);
                Self::Status { processing }
            }
            _ => Self::None,
        }
    }
}
