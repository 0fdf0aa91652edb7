//! docversion - Documentation version and reference URL resolver
//!
//! This library reads a Maven manifest (`pom.xml`) and provides:
//! - The project version, short version and release strings for doc titles
//! - A reference mapping whose `.../latest/` documentation URLs are pinned
//!   to the dependency versions declared in `<properties>`

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod orchestrator;
pub mod output;

pub use domain::{ProjectVersion, ReferenceEntry, ReferenceMapping, RewriteReport};
pub use manifest::{resolve, rewrite, ReferenceUrlRewriter, VersionResolver};
