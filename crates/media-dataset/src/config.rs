use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// What to do with a path whose extension is not a supported image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedPolicy {
    /// Leave the dataset empty and only log a warning.
    #[default]
    Ignore,
    /// Fail construction with an error.
    Reject,
}

/// Configuration for [MediaDataset](crate::MediaDataset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaDatasetConfig {
    /// Extensions, without the leading dot, that are decoded as images.
    pub image_extensions: Vec<String>,

    /// Extensions recognized as video. Video cannot be decoded yet.
    pub video_extensions: Vec<String>,

    /// Whether extensions must match exactly, `PNG` differing from `png`.
    pub case_sensitive: bool,

    /// Behavior for unsupported and video extensions.
    pub on_unsupported: UnsupportedPolicy,
}

impl Default for MediaDatasetConfig {
    fn default() -> Self {
        Self {
            image_extensions: vec!["jpg".to_string(), "png".to_string()],
            video_extensions: ["mp4", "avi", "mov", "mkv"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            case_sensitive: true,
            on_unsupported: UnsupportedPolicy::Ignore,
        }
    }
}

impl MediaDatasetConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the image extensions.
    pub fn with_image_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.image_extensions = extensions.iter().map(|e| e.as_ref().to_string()).collect();
        self
    }

    /// Sets the video extensions.
    pub fn with_video_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.video_extensions = extensions.iter().map(|e| e.as_ref().to_string()).collect();
        self
    }

    /// Sets whether extension matching is case sensitive.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets the policy for unsupported extensions.
    pub fn with_on_unsupported(mut self, policy: UnsupportedPolicy) -> Self {
        self.on_unsupported = policy;
        self
    }

    /// Saves the configuration to a file.
    ///
    /// # Arguments
    ///
    /// * `file` - File to save the configuration to.
    pub fn save<P: AsRef<Path>>(&self, file: P) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(file, json)
    }

    /// Loads the configuration from a file.
    ///
    /// # Arguments
    ///
    /// * `file` - File to load the configuration from.
    ///
    /// # Returns
    ///
    /// The loaded configuration.
    pub fn load<P: AsRef<Path>>(file: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(file.as_ref())
            .map_err(|_| ConfigError::FileNotFound(file.as_ref().to_string_lossy().to_string()))?;
        Self::parse_json(&content)
    }

    /// Loads the configuration from a binary buffer.
    pub fn load_binary(data: &[u8]) -> Result<Self, ConfigError> {
        let content = std::str::from_utf8(data).map_err(|_| {
            ConfigError::InvalidFormat("Could not parse data as utf-8.".to_string())
        })?;
        Self::parse_json(content)
    }

    fn parse_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|err| ConfigError::InvalidFormat(format!("{err}")))
    }
}
