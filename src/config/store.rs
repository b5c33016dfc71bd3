//! Local config directory and its JSON files

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::types::{Credentials, PlotOptions, PlotOptionsUpdate};
use crate::{PlotkitError, Result};

/// Name of the config directory inside the home directory
pub const PLOTLY_DIR: &str = ".plotly";
pub const CREDENTIALS_FILE: &str = ".credentials";
pub const PLOT_OPTIONS_FILE: &str = ".plot_options";
pub const THEMES_FILE: &str = ".themes";

/// The config directory holding credentials, plot options and themes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// A store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The store at `~/.plotly`
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| PlotkitError::Config("could not locate home directory".to_string()))?;
        Ok(Self::new(home.join(PLOTLY_DIR)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.dir.join(CREDENTIALS_FILE)
    }

    pub fn plot_options_path(&self) -> PathBuf {
        self.dir.join(PLOT_OPTIONS_FILE)
    }

    pub fn themes_path(&self) -> PathBuf {
        self.dir.join(THEMES_FILE)
    }

    /// Create the directory and any missing file, leaving existing files alone
    pub fn ensure_local_files_exist(&self) -> Result<()> {
        if !self.dir.is_dir() {
            info!("Creating config directory {}", self.dir.display());
            fs::create_dir_all(&self.dir)?;
        }
        for path in [
            self.credentials_path(),
            self.plot_options_path(),
            self.themes_path(),
        ] {
            if !path.exists() {
                debug!("Creating empty {}", path.display());
                fs::File::create(&path)?;
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Credentials
    // ------------------------------------------------------------------------

    /// Entries of the credentials file; all of them when `keys` is empty
    pub fn get_credentials_file(&self, keys: &[&str]) -> Result<Map<String, Value>> {
        self.ensure_local_files_exist()?;
        load_json(&self.credentials_path(), keys)
    }

    /// Merge the set fields of `update` into the credentials file
    pub fn set_credentials_file(&self, update: &Credentials) -> Result<()> {
        self.ensure_local_files_exist()?;
        let mut credentials = load_json(&self.credentials_path(), &[])?;
        if let Some(username) = update.username.as_deref().filter(|s| !s.is_empty()) {
            credentials.insert("username".to_string(), Value::from(username));
        }
        if let Some(api_key) = update.api_key.as_deref().filter(|s| !s.is_empty()) {
            credentials.insert("api_key".to_string(), Value::from(api_key));
        }
        if !update.stream_ids.is_empty() {
            credentials.insert("stream_ids".to_string(), Value::from(update.stream_ids.clone()));
        }
        save_json(&self.credentials_path(), &credentials)
    }

    /// Human-readable listing of the credentials file
    pub fn show_credentials_file(&self, keys: &[&str]) -> Result<String> {
        let credentials = self.get_credentials_file(keys)?;
        Ok(format_listing("credentials file", keys, &credentials))
    }

    /// Typed credentials; missing fields are left unset
    pub fn credentials(&self) -> Result<Credentials> {
        let map = self.get_credentials_file(&[])?;
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    // ------------------------------------------------------------------------
    // Plot options
    // ------------------------------------------------------------------------

    /// Entries of the plot options file; all of them when `keys` is empty
    pub fn get_plot_options_file(&self, keys: &[&str]) -> Result<Map<String, Value>> {
        self.ensure_local_files_exist()?;
        load_json(&self.plot_options_path(), keys)
    }

    /// Merge the set fields of `update` into the plot options file
    pub fn save_plot_options_file(&self, update: &PlotOptionsUpdate) -> Result<()> {
        self.ensure_local_files_exist()?;
        let mut options = load_json(&self.plot_options_path(), &[])?;
        if let Some(filename) = update.filename.as_deref().filter(|s| !s.is_empty()) {
            options.insert("filename".to_string(), Value::from(filename));
        }
        if let Some(fileopt) = update.fileopt.as_deref().filter(|s| !s.is_empty()) {
            options.insert("fileopt".to_string(), Value::from(fileopt));
        }
        if let Some(world_readable) = update.world_readable {
            options.insert("world_readable".to_string(), Value::from(world_readable));
        }
        if let Some(auto_open) = update.auto_open {
            options.insert("auto_open".to_string(), Value::from(auto_open));
        }
        save_json(&self.plot_options_path(), &options)
    }

    /// Human-readable listing of the plot options file
    pub fn show_plot_options_file(&self, keys: &[&str]) -> Result<String> {
        let options = self.get_plot_options_file(keys)?;
        Ok(format_listing("plot options file", keys, &options))
    }

    /// Plot options with the saved file overlaid on the defaults
    pub fn plot_options(&self) -> Result<PlotOptions> {
        let mut merged = match serde_json::to_value(PlotOptions::default())? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        merged.extend(self.get_plot_options_file(&[])?);
        Ok(serde_json::from_value(Value::Object(merged))?)
    }
}

/// Read a JSON object from `path`; an empty file reads as `{}`
fn load_json(path: &Path, keys: &[&str]) -> Result<Map<String, Value>> {
    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Ok(Map::new());
    }

    let map = match serde_json::from_str::<Value>(&text)? {
        Value::Object(map) => map,
        other => {
            return Err(PlotkitError::Config(format!(
                "{} must hold a JSON object, found {}",
                path.display(),
                other
            )))
        }
    };

    if keys.is_empty() {
        return Ok(map);
    }
    Ok(map
        .into_iter()
        .filter(|(key, _)| keys.contains(&key.as_str()))
        .collect())
}

fn save_json(path: &Path, map: &Map<String, Value>) -> Result<()> {
    let text = serde_json::to_string_pretty(map)?;
    fs::write(path, text)?;
    debug!("Saved {} key(s) to {}", map.len(), path.display());
    Ok(())
}

/// Header, blank line, then one indented `key: value` line per entry
fn format_listing(what: &str, keys: &[&str], entries: &Map<String, Value>) -> String {
    let mut out = if keys.is_empty() {
        format!("Your {}:\n\n", what)
    } else {
        format!("The specified keys from your {}:\n\n", what)
    };
    for (key, value) in entries {
        let shown = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        out.push_str(&format!("        {}: {}\n", key, shown));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store() -> (TempDir, ConfigStore) {
        let tmp = TempDir::new().unwrap();
        let store = ConfigStore::new(tmp.path().join(PLOTLY_DIR));
        (tmp, store)
    }

    #[test]
    fn test_ensure_creates_directory_and_files() {
        let (_tmp, store) = store();
        assert!(!store.dir().exists());
        store.ensure_local_files_exist().unwrap();
        assert!(store.credentials_path().is_file());
        assert!(store.plot_options_path().is_file());
        assert!(store.themes_path().is_file());
    }

    #[test]
    fn test_ensure_keeps_existing_content() {
        let (_tmp, store) = store();
        store.ensure_local_files_exist().unwrap();
        fs::write(store.themes_path(), "{\"dark\": {}}").unwrap();
        store.ensure_local_files_exist().unwrap();
        assert_eq!(
            fs::read_to_string(store.themes_path()).unwrap(),
            "{\"dark\": {}}"
        );
    }

    #[test]
    fn test_empty_files_read_as_empty_maps() {
        let (_tmp, store) = store();
        assert!(store.get_credentials_file(&[]).unwrap().is_empty());
        assert!(store.get_plot_options_file(&[]).unwrap().is_empty());
        assert_eq!(store.credentials().unwrap(), Credentials::default());
    }

    #[test]
    fn test_set_credentials_merges() {
        let (_tmp, store) = store();
        store
            .set_credentials_file(&Credentials {
                username: Some("alice".to_string()),
                api_key: Some("k1".to_string()),
                stream_ids: vec![],
            })
            .unwrap();
        store
            .set_credentials_file(&Credentials {
                username: None,
                api_key: Some("k2".to_string()),
                stream_ids: vec!["s1".to_string(), "s2".to_string()],
            })
            .unwrap();

        let creds = store.credentials().unwrap();
        assert_eq!(creds.username.as_deref(), Some("alice"));
        assert_eq!(creds.api_key.as_deref(), Some("k2"));
        assert_eq!(creds.stream_ids, vec!["s1", "s2"]);
    }

    #[test]
    fn test_get_filters_keys() {
        let (_tmp, store) = store();
        store
            .set_credentials_file(&Credentials {
                username: Some("alice".to_string()),
                api_key: Some("secret".to_string()),
                stream_ids: vec![],
            })
            .unwrap();

        let only = store.get_credentials_file(&["username", "missing"]).unwrap();
        assert_eq!(Value::Object(only), json!({"username": "alice"}));
    }

    #[test]
    fn test_plot_options_overlay_defaults() {
        let (_tmp, store) = store();
        assert_eq!(store.plot_options().unwrap(), PlotOptions::default());

        store
            .save_plot_options_file(&PlotOptionsUpdate {
                fileopt: Some("overwrite".to_string()),
                auto_open: Some(false),
                ..Default::default()
            })
            .unwrap();

        let opts = store.plot_options().unwrap();
        assert_eq!(opts.filename, "plot from API");
        assert_eq!(opts.fileopt, "overwrite");
        assert!(opts.world_readable);
        assert!(!opts.auto_open);

        let saved = store.get_plot_options_file(&[]).unwrap();
        assert_eq!(saved.len(), 2);
    }

    #[test]
    fn test_empty_update_leaves_file_empty_object() {
        let (_tmp, store) = store();
        store
            .save_plot_options_file(&PlotOptionsUpdate::default())
            .unwrap();
        assert!(store.get_plot_options_file(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_non_object_file_is_config_error() {
        let (_tmp, store) = store();
        store.ensure_local_files_exist().unwrap();
        fs::write(store.credentials_path(), "[1, 2]").unwrap();
        let err = store.get_credentials_file(&[]).unwrap_err();
        assert!(matches!(err, PlotkitError::Config(_)));
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let (_tmp, store) = store();
        store.ensure_local_files_exist().unwrap();
        fs::write(store.plot_options_path(), "{not json").unwrap();
        let err = store.get_plot_options_file(&[]).unwrap_err();
        assert!(matches!(err, PlotkitError::Json(_)));
    }

    #[test]
    fn test_show_listing() {
        let (_tmp, store) = store();
        store
            .set_credentials_file(&Credentials {
                username: Some("alice".to_string()),
                ..Default::default()
            })
            .unwrap();

        let all = store.show_credentials_file(&[]).unwrap();
        assert_eq!(all, "Your credentials file:\n\n        username: alice\n");

        let some = store.show_plot_options_file(&["filename"]).unwrap();
        assert!(some.starts_with("The specified keys from your plot options file:"));
    }
}
