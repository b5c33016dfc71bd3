//! Typed views of the local config files

use serde::{Deserialize, Serialize};

/// Contents of the credentials file
///
/// Also used as an update: [`set_credentials_file`](super::ConfigStore::set_credentials_file)
/// writes only the fields that are set (non-empty).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stream_ids: Vec<String>,
}

/// Default options used when publishing a plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotOptions {
    pub filename: String,
    /// One of `new`, `overwrite`, `append`, `extend`
    pub fileopt: String,
    pub world_readable: bool,
    pub auto_open: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            filename: "plot from API".to_string(),
            fileopt: "new".to_string(),
            world_readable: true,
            auto_open: true,
        }
    }
}

/// Partial update of the plot options file; `None` (or an empty string)
/// leaves the saved value untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotOptionsUpdate {
    pub filename: Option<String>,
    pub fileopt: Option<String>,
    pub world_readable: Option<bool>,
    pub auto_open: Option<bool>,
}

impl PlotOptionsUpdate {
    pub fn is_empty(&self) -> bool {
        self.filename.as_deref().map_or(true, str::is_empty)
            && self.fileopt.as_deref().map_or(true, str::is_empty)
            && self.world_readable.is_none()
            && self.auto_open.is_none()
    }
}
