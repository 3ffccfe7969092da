//! page-forge: marketing page content generator.
//!
//! This library classifies a one-line product description into an industry
//! and business type, detects explicit color preferences, and synthesizes
//! a complete, structured page-content document from static per-industry
//! template tables.

// Core modules
pub mod api;
pub mod catalog;
pub mod classify;
pub mod cli;
pub mod content;
pub mod error;
pub mod generator;
pub mod taxonomy;

// Re-export the commonly used surface
pub use api::{handle, handle_json, GenerateRequest, GenerateResponse};
pub use content::GeneratedContent;
pub use error::GenerationError;
pub use generator::Synthesizer;
pub use taxonomy::{BusinessType, Industry};
