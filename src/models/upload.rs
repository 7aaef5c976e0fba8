use web_sys::File;

use crate::config::Config;
use crate::models::format::size_mib;

/// Metadata captured from a selected file for the status panel.
#[derive(Debug, Clone, PartialEq)]
pub struct FileStat {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl FileStat {
    /// Captures name, byte size, and MIME type from a browser `File`.
    pub fn from_file(file: &File) -> Self {
        Self {
            name: file.name(),
            size: file.size() as u64,
            mime: file.type_(),
        }
    }

    /// Size in MiB, rounded to two decimals for display.
    pub fn size_mib(&self) -> f64 {
        size_mib(self.size)
    }

    /// True when the file exceeds the client-side upload cap.
    pub fn is_oversize(&self) -> bool {
        is_oversize(self.size)
    }
}

/// Strictly greater than the cap: a file of exactly 500 MiB is accepted.
pub fn is_oversize(bytes: u64) -> bool {
    bytes > Config::MAX_UPLOAD_BYTES
}
