//! Core domain models for docversion
//!
//! This module contains the fundamental types used throughout the application:
//! - Project version triple (version, short version, release)
//! - Reference mapping of documentation base URLs keyed by dependency name
//! - Rewrite outcomes and skip reasons

mod project_version;
mod reference;
mod rewrite_result;

pub use project_version::{short_version, ProjectVersion, DEV_VERSION};
pub use reference::{ReferenceEntry, ReferenceMapping};
pub use rewrite_result::{RewriteOutcome, RewriteReport, SkipReason};
