//! # Formatting Configuration
//!
//! Host formatting settings handed to refactors through the request context.
//! Settings can be built in code or loaded from YAML/JSON files.

use crate::errors::RefactorError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Formatting options supplied by the host.
///
/// Only `new_line_character` is read by this crate. The remaining options are
/// passed through untouched to whatever materializes the edits, including any
/// keys this struct does not know about (kept in `extra`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatCodeSettings {
    /// Explicit newline override, e.g. `"\n"` or `"\r\n"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_line_character: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert_tabs_to_spaces: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_space_after_comma_delimiter: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_space_before_and_after_binary_operators: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_open_brace_on_new_line_for_functions: Option<bool>,

    /// Options not modelled above
    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl FormatCodeSettings {
    /// Parse settings from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self, RefactorError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse settings from a JSON document
    pub fn from_json_str(content: &str) -> Result<Self, RefactorError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load settings from a file. `.json` files are parsed as JSON, anything
    /// else as YAML.
    pub fn load(path: &Path) -> Result<Self, RefactorError> {
        if !path.exists() {
            return Err(RefactorError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_yaml_str(&content)?,
        };

        info!("Loaded format settings from {:?}", path);
        Ok(settings)
    }

    /// Load settings from [`default_settings_path`], falling back to defaults
    /// when no file is present.
    pub fn load_default() -> Result<Self, RefactorError> {
        Self::load_or_default(&default_settings_path())
    }

    /// Load settings from `path`, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, RefactorError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No format settings at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Builder-style newline override
    pub fn with_new_line(mut self, new_line: impl Into<String>) -> Self {
        self.new_line_character = Some(new_line.into());
        self
    }
}

/// Formatting context threaded through a refactor request.
///
/// `options` may be absent when the host sent no formatting preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<FormatCodeSettings>,
}

impl FormatContext {
    pub fn new(options: FormatCodeSettings) -> Self {
        Self {
            options: Some(options),
        }
    }

    /// The explicit newline override, if one is set and non-empty
    pub fn new_line_override(&self) -> Option<&str> {
        self.options
            .as_ref()
            .and_then(|o| o.new_line_character.as_deref())
            .filter(|nl| !nl.is_empty())
    }
}

/// Default location of the user's format settings (`~/.refactor-registry/format.yaml`)
pub fn default_settings_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".refactor-registry")
        .join("format.yaml")
}
