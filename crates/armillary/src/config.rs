//! Configuration types for Armillary artifact generation.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file. Every field has a default, so a partial file is valid.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and output settings.
//! - [`RenderConfig`] - Indentation and prolog of the generated documents.
//! - [`OutputConfig`] - Output directory and artifact file names.
//!
//! # Example
//!
//! ```
//! # use armillary::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.render().indent_width(), 4);
//! assert_eq!(config.output().directory(), "out");
//! ```

use std::path::Path;

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(render: RenderConfig, output: OutputConfig) -> Self {
        Self { render, output }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Formatting of the generated documents.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Spaces per nesting level in the configuration skeleton.
    indent_width: usize,

    /// Whether the skeleton starts with an `<?xml ...?>` declaration.
    xml_declaration: bool,

    /// Spaces per nesting level in JSON artifacts.
    json_indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            xml_declaration: true,
            json_indent: 4,
        }
    }
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    ///
    /// # Arguments
    ///
    /// * `indent_width` - Spaces per level in the configuration skeleton.
    /// * `xml_declaration` - Whether to emit the XML declaration line.
    /// * `json_indent` - Spaces per level in JSON artifacts.
    pub fn new(indent_width: usize, xml_declaration: bool, json_indent: usize) -> Self {
        Self {
            indent_width,
            xml_declaration,
            json_indent,
        }
    }

    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    pub fn xml_declaration(&self) -> bool {
        self.xml_declaration
    }

    pub fn json_indent(&self) -> usize {
        self.json_indent
    }
}

/// Where artifacts are written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    directory: String,
    config_xml: String,
    meta_json: String,
    delta_json: String,
    patched_json: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "out".to_string(),
            config_xml: "config.xml".to_string(),
            meta_json: "meta.json".to_string(),
            delta_json: "delta.json".to_string(),
            patched_json: "res_patched_config.json".to_string(),
        }
    }
}

impl OutputConfig {
    /// Returns the output directory, relative to the working directory.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// Returns the file name of the configuration skeleton.
    pub fn config_xml(&self) -> &str {
        &self.config_xml
    }

    /// Returns the file name of the class metadata.
    pub fn meta_json(&self) -> &str {
        &self.meta_json
    }

    /// Returns the file name of the config delta.
    pub fn delta_json(&self) -> &str {
        &self.delta_json
    }

    /// Returns the file name of the reconstructed config.
    pub fn patched_json(&self) -> &str {
        &self.patched_json
    }

    /// Returns a copy with the output directory replaced.
    pub fn with_directory(mut self, directory: impl AsRef<Path>) -> Self {
        self.directory = directory.as_ref().display().to_string();
        self
    }
}
