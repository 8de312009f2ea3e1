use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::encoding::MAX_DIMENSION;
use crate::error::{Error, Result};

/// Textual rendering used when printing hashes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `60 9A 86 3D ...`
    Hex,
    Base64,
    /// `[96, 154, 134, ...]`
    Array,
}

/// Resampling filter used when shrinking images to fit the encoder limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Log level for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Configuration for loading and hashing image files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Longest side an image is shrunk to before encoding (1-100)
    pub max_dimension: u32,

    /// Whether to shrink larger images instead of rejecting them
    pub fit_to_max: bool,

    /// Filter used when shrinking
    pub resize_filter: ResizeFilter,

    /// How hashes are printed
    pub output_format: OutputFormat,

    /// Number of threads to use for batch hashing (0 = auto)
    pub threads: usize,

    /// Maximum directory depth for scanning
    pub max_depth: Option<usize>,

    /// Whether to draw a progress bar during batch hashing
    pub show_progress: bool,

    /// Log level
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_dimension: MAX_DIMENSION,
            fit_to_max: true,
            resize_filter: ResizeFilter::Triangle,
            output_format: OutputFormat::Hex,
            threads: 0, // Auto
            max_depth: None,
            show_progress: false,
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .map_err(|e| Error::Configuration(format!("Failed to open config file: {}", e)))?;

        let config: Config = serde_json::from_reader(file)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .map_err(|e| Error::Configuration(format!("Failed to create config file: {}", e)))?;

        serde_json::to_writer_pretty(file, self)
            .map_err(|e| Error::Configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_dimension == 0 || self.max_dimension > MAX_DIMENSION {
            return Err(Error::Configuration(format!(
                "max_dimension must be between 1 and {}, got {}",
                MAX_DIMENSION, self.max_dimension
            )));
        }

        if self.max_depth == Some(0) {
            return Err(Error::Configuration(
                "max_depth of 0 would not visit any path".to_string(),
            ));
        }

        Ok(())
    }

    /// Worker threads to use, resolving 0 to the number of CPUs
    pub fn effective_threads(&self) -> usize {
        if self.threads == 0 {
            num_cpus::get()
        } else {
            self.threads
        }
    }
}
