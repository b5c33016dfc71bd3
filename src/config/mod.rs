//! Local configuration files
//!
//! The client keeps three JSON files in `~/.plotly`:
//!
//! - `.credentials` - username, API key and stream ids
//! - `.plot_options` - defaults applied when publishing plots
//! - `.themes` - created empty, reserved for saved themes
//!
//! All access goes through a [`ConfigStore`], which can also be rooted at any
//! other directory.

mod store;
mod types;

pub use store::{ConfigStore, CREDENTIALS_FILE, PLOTLY_DIR, PLOT_OPTIONS_FILE, THEMES_FILE};
pub use types::{Credentials, PlotOptions, PlotOptionsUpdate};
