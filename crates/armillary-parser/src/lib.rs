//! # Armillary Parser
//!
//! Reads a class-model XML document into a resolved [`Model`].
//!
//! ## Usage
//!
//! ```
//! # use armillary_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         <Model>
//!             <Class name="Car" isRoot="true">
//!                 <Attribute name="vin" type="string"/>
//!             </Class>
//!             <Class name="Wheel"/>
//!             <Aggregation source="Car" target="Wheel" targetMultiplicity="4"/>
//!         </Model>
//!     "#;
//!
//!     let model = parse(source)?;
//!     assert_eq!(model.len(), 2);
//!     Ok(())
//! }
//! ```

pub mod error;

mod elements;
mod loader;
mod resolve;

use log::{debug, warn};

use armillary_core::model::Model;

use error::{Diagnostic, DiagnosticCollector, ParseError};

/// Parse a class-model document into a resolved model.
///
/// This is the main entry point of the crate. It runs the full pipeline:
///
/// 1. **Read** - Parse the XML text
/// 2. **Type** - Convert elements to typed records, checking mandatory attributes
/// 3. **Load** - Build one class record per `Class` element
/// 4. **Resolve** - Attach every `Aggregation` to its source class
///
/// Warnings (unknown aggregation sources, duplicate classes, extra roots) are
/// logged and otherwise ignored. Use [`parse_with_warnings`] to inspect them.
///
/// # Errors
///
/// Returns a [`ParseError`] holding every problem found if the document is
/// not well-formed XML or any element lacks a mandatory attribute.
pub fn parse(source: &str) -> Result<Model, ParseError> {
    let (model, warnings) = parse_with_warnings(source)?;
    for warning in &warnings {
        warn!("{warning}");
    }
    Ok(model)
}

/// Parse a class-model document, returning the model and its warnings.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_with_warnings(source: &str) -> Result<(Model, Vec<Diagnostic>), ParseError> {
    // Step 1: Read
    let root = elements::read_document(source)?;
    debug!(root = root.name; "Model document read");

    // Step 2: Type
    let mut collector = DiagnosticCollector::new();
    let elements = elements::read_elements(&root, &mut collector);
    let mut warnings = collector.finish()?;

    // Step 3: Load
    let mut collector = DiagnosticCollector::new();
    let mut model = loader::load_classes(&elements, &mut collector);

    // Step 4: Resolve
    resolve::resolve_relations(&elements, &mut model, &mut collector);

    warnings.extend(collector.finish()?);
    Ok((model, warnings))
}
