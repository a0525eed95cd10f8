pub mod models;

use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{BoolConfigItem, ConfigItem, HourWindowConfigItem};
use crate::core::types::HourWindow;
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    HourWindow,
    FileLoggingEnabled,
    ReportDroppedBlocks,
    ColorOutput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub hour_window: HourWindowConfigItem,
    #[serde(default = "BoolConfigItem::file_logging")]
    pub file_logging_enabled: BoolConfigItem,
    #[serde(default = "BoolConfigItem::report_dropped_blocks")]
    pub report_dropped_blocks: BoolConfigItem,
    #[serde(default = "BoolConfigItem::color_output")]
    pub color_output: BoolConfigItem,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            hour_window: HourWindowConfigItem::default(),
            file_logging_enabled: BoolConfigItem::file_logging(),
            report_dropped_blocks: BoolConfigItem::report_dropped_blocks(),
            color_output: BoolConfigItem::color_output(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
}

/// `(key, old value, new value)` of one applied change.
pub type ConfigChange = (String, String, String);

/// `(key, description, value)` triples in [`ConfigKey`] order.
#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
}
impl Index<usize> for ConfigRows {
    type Output = (String, String, String);
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Config {
    /// Built-in defaults, to be saved at `path` if ever persisted.
    pub fn defaults_at<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            data: ConfigFile::default(),
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::Parse(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Parse(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::Parse(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self { path, data })
    }

    /// Like [`load_from`](Self::load_from), but a missing file yields defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_from(path)
        } else {
            Ok(Self::defaults_at(path))
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn hour_window(&self) -> &HourWindow {
        self.data.hour_window.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.enabled()
    }
    pub fn report_dropped_blocks(&self) -> bool {
        self.data.report_dropped_blocks.enabled()
    }
    pub fn color_output(&self) -> bool {
        self.data.color_output.enabled()
    }

    fn describe(&self, key: ConfigKey) -> (String, String) {
        match key {
            ConfigKey::HourWindow => (
                self.data.hour_window.description().to_string(),
                self.data.hour_window.get_value().to_string(),
            ),
            ConfigKey::FileLoggingEnabled => self.describe_bool(&self.data.file_logging_enabled),
            ConfigKey::ReportDroppedBlocks => self.describe_bool(&self.data.report_dropped_blocks),
            ConfigKey::ColorOutput => self.describe_bool(&self.data.color_output),
        }
    }

    fn describe_bool(&self, item: &BoolConfigItem) -> (String, String) {
        (
            item.description().to_string(),
            item.get_value().to_string(),
        )
    }

    pub fn rows(&self) -> ConfigRows {
        ConfigRows(
            ConfigKey::iter()
                .map(|key| {
                    let (description, value) = self.describe(key);
                    (key.to_string(), description, value)
                })
                .collect(),
        )
    }

    fn apply(data: &mut ConfigFile, key: ConfigKey, new_value: &str) -> Result<()> {
        match key {
            ConfigKey::HourWindow => data.hour_window.set_value(new_value),
            ConfigKey::FileLoggingEnabled => data.file_logging_enabled.set_value(new_value),
            ConfigKey::ReportDroppedBlocks => data.report_dropped_blocks.set_value(new_value),
            ConfigKey::ColorOutput => data.color_output.set_value(new_value),
        }
    }

    /// In-memory change; call [`save`](Self::save) to persist it.
    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<ConfigChange> {
        let (_, old) = self.describe(key);
        Self::apply(&mut self.data, key, new_value)?;
        let (_, new) = self.describe(key);
        Ok((key.to_string(), old, new))
    }

    pub fn parse_key(key_str: &str) -> Result<ConfigKey> {
        ConfigKey::from_str(key_str.trim()).map_err(|_| {
            Error::Parse(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str,
                valid_csv::<ConfigKey>()
            ))
        })
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<ConfigChange> {
        let key = Self::parse_key(key_str)?;
        self.set_key(key, new_value)
    }

    /// All-or-nothing: on the first bad pair nothing is applied.
    pub fn set_many<I, K, V>(&mut self, pairs: I) -> Result<Vec<ConfigChange>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut staged = self.clone();
        let changes = pairs
            .into_iter()
            .map(|(k, v)| staged.set(k.as_ref(), v.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.data = staged.data;
        Ok(changes)
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::config(format!("Failed to encode config: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| Error::Parse(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
