//! CLI logic for the Armillary artifact generator.
//!
//! This module contains the core CLI logic: it reads the inputs, runs the
//! [`ArtifactBuilder`] stages and writes every artifact to the output
//! directory.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use armillary::{ArmillaryError, ArtifactBuilder, document::FlatDocument};

/// Run the Armillary CLI application
///
/// Artifacts are written in order, each as soon as it is produced:
/// the configuration skeleton, the class metadata, the config delta and the
/// patched config. The patched config is rebuilt from the delta file as
/// written, not from the in-memory delta.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ArmillaryError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Model parsing errors
/// - Rendering errors (missing root, dangling references)
/// - Invalid config documents
///
/// Artifacts written before the failure stay on disk.
pub fn run(args: &Args) -> Result<(), ArmillaryError> {
    info!(
        model_path = args.model,
        base_path = args.base,
        patched_path = args.patched;
        "Generating artifacts"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    let output = match &args.out_dir {
        Some(dir) => app_config.output().clone().with_directory(dir),
        None => app_config.output().clone(),
    };
    let builder = ArtifactBuilder::new(app_config);

    // Class model artifacts
    let source = fs::read_to_string(&args.model)?;
    let model = builder.parse(&source)?;

    let out_dir = PathBuf::from(output.directory());
    fs::create_dir_all(&out_dir)?;

    let config_xml = builder.render_config_xml(&model)?;
    write_artifact(&out_dir.join(output.config_xml()), &config_xml)?;

    let meta_json = builder.render_meta_json(&model)?;
    write_artifact(&out_dir.join(output.meta_json()), &meta_json)?;

    // Config delta
    let base = read_document(&builder, &args.base)?;
    let patched = read_document(&builder, &args.patched)?;
    let delta = builder.diff(&base, &patched);

    let delta_path = out_dir.join(output.delta_json());
    write_artifact(&delta_path, &builder.render_delta_json(&delta)?)?;

    // Patched config, rebuilt from the delta file
    let delta = builder.read_delta(&fs::read_to_string(&delta_path)?)?;
    let reconstructed = builder.patch(&base, &delta);
    let patched_json = builder.render_document_json(&reconstructed)?;
    write_artifact(&out_dir.join(output.patched_json()), &patched_json)?;

    info!(out_dir = out_dir.display().to_string(); "Artifacts generated successfully");

    Ok(())
}

fn read_document(builder: &ArtifactBuilder, path: &str) -> Result<FlatDocument, ArmillaryError> {
    let source = fs::read_to_string(path)?;
    builder.read_document(path, &source)
}

fn write_artifact(path: &Path, contents: &str) -> Result<(), ArmillaryError> {
    fs::write(path, contents)?;
    info!(path = path.display().to_string(); "Artifact written");
    Ok(())
}
