//! Integration tests for docversion
//!
//! These tests verify:
//! - Version resolution from manifest files on disk
//! - Reference URL rewriting from manifest files on disk
//! - Fatal handling of unreadable manifests

use docversion::domain::{ProjectVersion, ReferenceEntry, ReferenceMapping, SkipReason};
use docversion::error::ManifestError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <modelVersion>4.0.0</modelVersion>

    <parent>
        <groupId>com.powsybl</groupId>
        <artifactId>powsybl-parent</artifactId>
        <version>11</version>
        <relativePath/>
    </parent>

    <artifactId>powsybl-core</artifactId>
    <name>powsybl</name>
    <version>4.10.2</version>
    <packaging>pom</packaging>

    <properties>
        <java.version>11</java.version>
        <guava.version>31.1-jre</guava.version>
        <commonsio.version>2.11.0</commonsio.version>
        <jackson.version>2.14.0-SNAPSHOT</jackson.version>
        <slf4j.version>1.7.36</slf4j.version>
    </properties>

    <dependencyManagement>
        <commonsio.version>9.9.9</commonsio.version>
    </dependencyManagement>
</project>
"#;

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

fn write_pom(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("pom.xml");
    fs::write(&path, content).unwrap();
    path
}

fn default_mapping() -> ReferenceMapping {
    let mut mapping = ReferenceMapping::new();
    mapping.insert(
        "guava",
        ReferenceEntry::new("https://javadoc.io/doc/com.google.guava/guava/latest/"),
    );
    mapping.insert(
        "commonsio",
        ReferenceEntry::new("https://javadoc.io/doc/commons-io/commons-io/latest/"),
    );
    mapping.insert(
        "jackson",
        ReferenceEntry::new("https://javadoc.io/doc/com.fasterxml.jackson.core/jackson-core/latest/"),
    );
    mapping.insert(
        "slf4j",
        ReferenceEntry::new("https://www.slf4j.org/apidocs/").with_inventory("slf4j.inv"),
    );
    mapping
}

mod version_resolution {
    use super::*;

    #[test]
    fn test_resolve_project_version() {
        let dir = create_test_dir();
        let pom = write_pom(dir.path(), POM);

        let version = docversion::resolve(&pom, "powsybl-core").unwrap();
        assert_eq!(version.version, "4.10.2");
        assert_eq!(version.short_version, "4.10");
        assert_eq!(version.release, "4.10.2");
    }

    #[test]
    fn test_resolve_unknown_artifact_is_dev() {
        let dir = create_test_dir();
        let pom = write_pom(dir.path(), POM);

        let version = docversion::resolve(&pom, "powsybl-iidm").unwrap();
        assert_eq!(version, ProjectVersion::dev());
    }

    #[test]
    fn test_resolve_missing_manifest_is_fatal() {
        let dir = create_test_dir();
        let err = docversion::resolve(&dir.path().join("pom.xml"), "powsybl-core").unwrap_err();
        assert!(matches!(err, ManifestError::NotFound { .. }));
        assert!(err.to_string().contains("pom.xml"));
    }
}

mod reference_rewriting {
    use super::*;

    #[test]
    fn test_rewrite_from_manifest() {
        let dir = create_test_dir();
        let pom = write_pom(dir.path(), POM);

        let report = docversion::rewrite(&pom, default_mapping()).unwrap();
        let mapping = &report.mapping;

        assert_eq!(
            mapping.get("guava").unwrap().url,
            "https://javadoc.io/doc/com.google.guava/guava/31.1-jre/"
        );
        // declaration after </properties> is ignored
        assert_eq!(
            mapping.get("commonsio").unwrap().url,
            "https://javadoc.io/doc/commons-io/commons-io/2.11.0/"
        );
        // snapshot left on latest
        assert_eq!(
            mapping.get("jackson").unwrap().url,
            "https://javadoc.io/doc/com.fasterxml.jackson.core/jackson-core/latest/"
        );
        // no latest/ placeholder
        let slf4j = mapping.get("slf4j").unwrap();
        assert_eq!(slf4j.url, "https://www.slf4j.org/apidocs/");
        assert_eq!(slf4j.inventory.as_deref(), Some("slf4j.inv"));

        assert_eq!(mapping.len(), 4);
        assert!(!mapping.contains("java"));
    }

    #[test]
    fn test_rewrite_outcomes_in_manifest_order() {
        let dir = create_test_dir();
        let pom = write_pom(dir.path(), POM);

        let report = docversion::rewrite(&pom, default_mapping()).unwrap();
        let summary: Vec<_> = report
            .outcomes
            .iter()
            .map(|o| (o.dependency().to_string(), o.skip_reason()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("java".to_string(), Some(SkipReason::Unmapped)),
                ("guava".to_string(), None),
                ("commonsio".to_string(), None),
                ("jackson".to_string(), Some(SkipReason::Snapshot)),
                ("slf4j".to_string(), Some(SkipReason::UrlShapeMismatch)),
            ]
        );
        assert!(report.has_url_mismatches());
    }

    #[test]
    fn test_rewrite_empty_mapping() {
        let dir = create_test_dir();
        let pom = write_pom(dir.path(), POM);

        let report = docversion::rewrite(&pom, ReferenceMapping::new()).unwrap();
        assert!(report.mapping.is_empty());
        assert_eq!(report.rewrite_count(), 0);
    }

    #[test]
    fn test_rewrite_missing_manifest_is_fatal() {
        let err = docversion::rewrite(Path::new("/nonexistent/pom.xml"), default_mapping())
            .unwrap_err();
        assert!(matches!(err, ManifestError::NotFound { .. }));
    }
}
