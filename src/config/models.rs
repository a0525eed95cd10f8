use crate::core::types::{Bool, HourWindow};
use crate::errors::Error;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourWindowConfigItem {
    pub value: HourWindow,
    pub description: String,
}

impl Default for HourWindowConfigItem {
    fn default() -> Self {
        Self {
            value: HourWindow::default(),
            description: "Hours shown as grid rows.".into(),
        }
    }
}

impl ConfigItem<HourWindow> for HourWindowConfigItem {
    fn get_value(&self) -> &HourWindow {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = HourWindow::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

/// On/off switch stored as `"True"`/`"False"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoolConfigItem {
    pub value: Bool,
    pub description: String,
}

impl BoolConfigItem {
    pub fn new(value: bool, description: impl Into<String>) -> Self {
        Self {
            value: Bool(value),
            description: description.into(),
        }
    }

    pub fn file_logging() -> Self {
        Self::new(true, "Enable writing log messages to file.")
    }

    pub fn report_dropped_blocks() -> Self {
        Self::new(false, "Warn about blocks whose day is not recognized.")
    }

    pub fn color_output() -> Self {
        Self::new(true, "Paint blocks with ANSI colors in terminal output.")
    }

    pub fn enabled(&self) -> bool {
        self.value.0
    }
}

impl ConfigItem<Bool> for BoolConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = Bool::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}
