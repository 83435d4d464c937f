// Mon Jan 19 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base schema first, then override files layered on top in order.
    pub schema_files: Vec<PathBuf>,
    pub walker: WalkerConfig,
    pub enable_verbose_output: bool,
}

/// Tuning for object table detection and walking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    pub object_struct: String,
    pub item_struct: String,
    /// Pointer-sized slots inspected when deciding chunked vs flat.
    pub probe_slots: usize,
    /// A null run this long ends the probe and marks a chunk pointer table.
    pub probe_null_run: usize,
    /// Consecutive skipped slots tolerated before a chunk ends. Nulls count
    /// toward the run; a non-null slot restarts it, at one if rejected.
    pub max_consecutive_skips: usize,
    /// Largest accepted forward jump in internal index between objects.
    pub max_index_gap: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_files: Vec::new(),
            walker: WalkerConfig::default(),
            enable_verbose_output: false,
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            object_struct: "UObject".to_string(),
            item_struct: "FUObjectItem".to_string(),
            probe_slots: 21,
            probe_null_run: 5,
            max_consecutive_skips: 150,
            max_index_gap: 5,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let text = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read {}: {}", path.as_ref().display(), e))?;
        serde_json::from_str(&text).map_err(|e| format!("Failed to parse {}: {}", path.as_ref().display(), e))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let text = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path.as_ref(), text).map_err(|e| format!("Failed to write {}: {}", path.as_ref().display(), e))
    }

    pub fn with_schema_file(mut self, path: PathBuf) -> Self {
        self.schema_files.push(path);
        self
    }

    pub fn with_walker(mut self, walker: WalkerConfig) -> Self {
        self.walker = walker;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.enable_verbose_output = verbose;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.schema_files.is_empty() {
            return Err("At least one schema file must be set".to_string());
        }
        self.walker.validate()
    }
}

impl WalkerConfig {
    pub fn with_max_consecutive_skips(mut self, skips: usize) -> Self {
        self.max_consecutive_skips = skips;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.object_struct.is_empty() || self.item_struct.is_empty() {
            return Err("object_struct and item_struct must be set".to_string());
        }
        if self.probe_slots == 0 {
            return Err("probe_slots must be greater than 0".to_string());
        }
        if self.probe_null_run == 0 || self.probe_null_run > self.probe_slots {
            return Err("probe_null_run must be between 1 and probe_slots".to_string());
        }
        if self.max_index_gap < 0 {
            return Err("max_index_gap must not be negative".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let walker = WalkerConfig::default();
        assert_eq!(walker.probe_slots, 21);
        assert_eq!(walker.probe_null_run, 5);
        assert_eq!(walker.max_index_gap, 5);
        assert!(walker.validate().is_ok());
        assert!(Config::new().validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"schema_files":["engine.json"],"walker":{"max_consecutive_skips":10}}"#).unwrap();
        assert_eq!(config.walker.max_consecutive_skips, 10);
        assert_eq!(config.walker.object_struct, "UObject");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_probe_run() {
        let walker = WalkerConfig {
            probe_null_run: 30,
            ..WalkerConfig::default()
        };
        assert!(walker.validate().is_err());
    }
}
