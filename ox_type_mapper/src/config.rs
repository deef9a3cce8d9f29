use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MapperError, Result};

/// How the source half of a lookup key is determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// Inspect the runtime type of the source value.
    #[default]
    Runtime,
    /// Use the source type named by the caller at compile time.
    Explicit,
}

/// Settings for a [`crate::MappingRegistry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    pub dispatch: DispatchMode,
}

impl MapperConfig {
    /// Creates a config with runtime dispatch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dispatch(mut self, dispatch: DispatchMode) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Parses a YAML document such as `dispatch: explicit`.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| MapperError::Config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| MapperError::Config(format!("Failed to read '{}': {}", path.display(), e)))?;
        Self::from_yaml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_runtime() {
        assert_eq!(MapperConfig::new().dispatch, DispatchMode::Runtime);
    }

    #[test]
    fn test_from_yaml() {
        let config = MapperConfig::from_yaml_str("dispatch: explicit\n").unwrap();
        assert_eq!(config.dispatch, DispatchMode::Explicit);
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        assert_eq!(MapperConfig::from_yaml_str("").unwrap(), MapperConfig::default());
        assert_eq!(MapperConfig::from_yaml_str("{}").unwrap(), MapperConfig::default());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = MapperConfig::from_yaml_str("dispatch: sideways").unwrap_err();
        assert!(matches!(err, MapperError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = MapperConfig::from_file("/nonexistent/mapper.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
