//! Maven manifest scanning
//!
//! This module provides:
//! - Reading a manifest with path-aware errors
//! - Resolving the project version from an `<artifactId>`/`<version>` pair
//! - Rewriting documentation URLs from `<NAME.version>` properties
//!
//! Scanning is line-oriented and relies on the standard Maven indentation
//! (4 spaces for project coordinates, 8 spaces for properties). No XML tree
//! is built.

mod resolver;
mod rewriter;

pub use resolver::{resolve, ScanState, VersionResolver};
pub use rewriter::{
    parse_property, rewrite, versioned_url, PropertyDeclaration, ReferenceUrlRewriter,
    PROPERTIES_END, SNAPSHOT_MARKER,
};

use crate::error::ManifestError;
use std::io::ErrorKind;
use std::path::Path;

/// Default manifest file name
pub const DEFAULT_MANIFEST: &str = "pom.xml";

/// Read a manifest file into memory
///
/// The file handle is released before returning on every path.
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ManifestError::not_found(path),
        _ => ManifestError::read_error(path, e),
    })
}
