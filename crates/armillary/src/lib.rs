//! Armillary - derives configuration artifacts from UML-like class models.
//!
//! A class model in XML becomes a nested configuration skeleton and a flat
//! metadata listing. Independently, two flat JSON configs are compared into
//! a delta that can be applied back to the base config.

pub mod config;
pub mod delta;
pub mod export;

mod error;

pub use armillary_core::{document, identifier, model};

pub use error::ArmillaryError;

use log::{debug, info, trace};

use config::AppConfig;
use document::{Delta, FlatDocument};
use export::{Exporter, meta::MetaFlattener, tree::TreeRenderer};
use model::Model;

/// Builder for parsing class models and producing artifacts.
///
/// # Examples
///
/// ```rust
/// use armillary::{ArtifactBuilder, config::AppConfig};
///
/// let source = r#"
///     <Model>
///         <Class name="Root" isRoot="true">
///             <Attribute name="x" type="int"/>
///         </Class>
///     </Model>
/// "#;
///
/// let builder = ArtifactBuilder::new(AppConfig::default());
///
/// // Parse source to the class model
/// let model = builder.parse(source).expect("Failed to parse");
///
/// // Render the configuration skeleton
/// let xml = builder.render_config_xml(&model).expect("Failed to render");
/// assert!(xml.ends_with("<Root>\n    <x>int</x>\n</Root>"));
/// ```
#[derive(Default)]
pub struct ArtifactBuilder {
    config: AppConfig,
}

impl ArtifactBuilder {
    /// Create a new artifact builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including render and output settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a class-model document into a resolved model.
    ///
    /// Warnings are logged; see [`armillary_parser::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`ArmillaryError::Parse`] carrying every diagnostic if the
    /// document is malformed or lacks mandatory attributes.
    pub fn parse(&self, source: &str) -> Result<Model, ArmillaryError> {
        info!("Parsing class model");

        let model = armillary_parser::parse(source)?;

        debug!(classes = model.len(); "Class model parsed successfully");
        trace!(model:?; "Parsed model");

        Ok(model)
    }

    /// Render the nested configuration skeleton of `model`.
    ///
    /// # Errors
    ///
    /// Returns [`ArmillaryError::RootNotFound`] if no class is flagged as
    /// root, or [`ArmillaryError::DanglingReference`] if a rendered class
    /// composes a class missing from the model.
    pub fn render_config_xml(&self, model: &Model) -> Result<String, ArmillaryError> {
        info!("Rendering configuration skeleton");
        let xml = TreeRenderer::new(self.config.render()).export(model)?;
        Ok(xml)
    }

    /// Render the flat metadata of every class in `model` as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`ArmillaryError::Json`] if serialization fails.
    pub fn render_meta_json(&self, model: &Model) -> Result<String, ArmillaryError> {
        info!("Rendering class metadata");
        let json = MetaFlattener::new(self.config.render()).export(model)?;
        Ok(json)
    }

    /// Read a flat JSON document; `name` identifies it in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ArmillaryError::InvalidDocument`] if `source` is not valid
    /// JSON or its top-level value is not an object.
    pub fn read_document(
        &self,
        name: &str,
        source: &str,
    ) -> Result<FlatDocument, ArmillaryError> {
        let document = FlatDocument::from_json_str(source)
            .map_err(|err| ArmillaryError::new_invalid_document(name, err))?;
        debug!(name, keys = document.len(); "Flat document read");
        Ok(document)
    }

    /// Compute the delta that turns `base` into `target`.
    pub fn diff(&self, base: &FlatDocument, target: &FlatDocument) -> Delta {
        info!("Computing config delta");
        delta::diff(base, target)
    }

    /// Apply `delta` to a copy of `base`.
    pub fn patch(&self, base: &FlatDocument, delta: &Delta) -> FlatDocument {
        info!("Applying config delta");
        delta::patch(base, delta)
    }

    /// Read a delta from its JSON form.
    ///
    /// Missing sequences default to empty.
    ///
    /// # Errors
    ///
    /// Returns [`ArmillaryError::Json`] if `source` is not a delta document.
    pub fn read_delta(&self, source: &str) -> Result<Delta, ArmillaryError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Serialize a delta as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ArmillaryError::Json`] if serialization fails.
    pub fn render_delta_json(&self, delta: &Delta) -> Result<String, ArmillaryError> {
        Ok(export::to_json_pretty(delta, self.config.render().json_indent())?)
    }

    /// Serialize a flat document as a pretty JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ArmillaryError::Json`] if serialization fails.
    pub fn render_document_json(
        &self,
        document: &FlatDocument,
    ) -> Result<String, ArmillaryError> {
        Ok(export::to_json_pretty(
            document,
            self.config.render().json_indent(),
        )?)
    }
}
