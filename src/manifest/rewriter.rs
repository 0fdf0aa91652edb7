//! Documentation URL rewriting from manifest properties
//!
//! Handles property lines of the form
//! `        <guava.version>31.1</guava.version>` inside `<properties>` and
//! pins the matching reference URL from `.../latest/` to `.../31.1/`.

use crate::domain::{ReferenceMapping, RewriteOutcome, RewriteReport, SkipReason};
use crate::error::ManifestError;
use crate::manifest::read_manifest;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

/// Substring marking an unreleased version
pub const SNAPSHOT_MARKER: &str = "SNAPSHOT";

/// Closing tag of the properties section; scanning stops at this line
pub const PROPERTIES_END: &str = "</properties>";

// Property opening tag: 8-space indent
// Note: Uses non-backreference pattern (closing tag is searched for by name)
static PROPERTY_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^        <([^<>\s]+)\.version>").unwrap());

// Floating documentation URL: https://.../latest/
static LATEST_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https://.*)latest/$").unwrap());

/// A `<NAME.version>VALUE</NAME.version>` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDeclaration<'a> {
    pub dependency: &'a str,
    pub version: &'a str,
}

impl PropertyDeclaration<'_> {
    pub fn is_snapshot(&self) -> bool {
        self.version.contains(SNAPSHOT_MARKER)
    }
}

/// Parse a version property line
///
/// Returns None when the line does not have the expected shape or when no
/// closing tag with the same name follows. The value runs up to the last
/// matching closing tag on the line.
pub fn parse_property(line: &str) -> Option<PropertyDeclaration<'_>> {
    let caps = PROPERTY_OPEN_RE.captures(line)?;
    let open = caps.get(0)?;
    let name = caps.get(1)?.as_str();

    let rest = &line[open.end()..];
    let close = format!("</{}.version>", name);
    let end = rest.rfind(close.as_str())?;
    Some(PropertyDeclaration {
        dependency: name,
        version: &rest[..end],
    })
}

/// Replace the trailing `latest/` of `base_url` with `version/`
///
/// Returns None if the URL is not an `https://` URL ending in `latest/`.
pub fn versioned_url(base_url: &str, version: &str) -> Option<String> {
    let caps = LATEST_URL_RE.captures(base_url)?;
    Some(format!("{}{}/", &caps[1], version))
}

/// Rewrites reference URLs to the versions declared in a manifest
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceUrlRewriter;

impl ReferenceUrlRewriter {
    pub fn new() -> Self {
        Self
    }

    /// Rewrite `mapping` from in-memory manifest content
    ///
    /// Keys are never added. Each rewrite starts from the URL supplied in
    /// `mapping`, so a later declaration of the same dependency replaces an
    /// earlier one.
    pub fn rewrite_str(&self, content: &str, mapping: ReferenceMapping) -> RewriteReport {
        let defaults = mapping.clone();
        let mut report = RewriteReport {
            mapping,
            outcomes: Vec::new(),
        };

        for line in content.lines() {
            if line.contains(PROPERTIES_END) {
                debug!("end of properties section reached");
                break;
            }

            let Some(decl) = parse_property(line) else {
                continue;
            };

            let outcome = self.apply(&defaults, &mut report.mapping, decl);
            report.outcomes.push(outcome);
        }

        report
    }

    /// Read the manifest at `path` and rewrite `mapping`
    pub fn rewrite(
        &self,
        path: &Path,
        mapping: ReferenceMapping,
    ) -> Result<RewriteReport, ManifestError> {
        let content = read_manifest(path)?;
        Ok(self.rewrite_str(&content, mapping))
    }

    fn apply(
        &self,
        defaults: &ReferenceMapping,
        mapping: &mut ReferenceMapping,
        decl: PropertyDeclaration<'_>,
    ) -> RewriteOutcome {
        let PropertyDeclaration {
            dependency,
            version,
        } = decl;

        if decl.is_snapshot() {
            debug!(dependency, version, "skipping snapshot version");
            return RewriteOutcome::skipped(dependency, version, SkipReason::Snapshot);
        }

        let Some(base) = defaults.get(dependency) else {
            debug!(dependency, version, "dependency not in reference mapping");
            return RewriteOutcome::skipped(dependency, version, SkipReason::Unmapped);
        };

        let Some(url) = versioned_url(&base.url, version) else {
            info!(
                dependency,
                url = %base.url,
                "reference URL does not end in latest/, left unchanged"
            );
            return RewriteOutcome::skipped(dependency, version, SkipReason::UrlShapeMismatch);
        };

        let from = mapping
            .get(dependency)
            .map(|entry| entry.url.clone())
            .unwrap_or_else(|| base.url.clone());
        mapping.set_url(dependency, url.as_str());
        info!(dependency, version, %url, "reference URL pinned");
        RewriteOutcome::rewritten(dependency, version, from, url)
    }
}

/// Rewrite `mapping` from the manifest at `path`
pub fn rewrite(path: &Path, mapping: ReferenceMapping) -> Result<RewriteReport, ManifestError> {
    ReferenceUrlRewriter::new().rewrite(path, mapping)
}
