//! Armillary Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Armillary parser,
//! renderers and CLI. It includes:
//!
//! - **Identifiers**: String-interned class names ([`identifier::Id`])
//! - **Model**: Resolved classes, attributes and relations ([`model`] module)
//! - **Documents**: Flat JSON documents and deltas between them ([`document`] module)

pub mod document;
pub mod identifier;
pub mod model;
