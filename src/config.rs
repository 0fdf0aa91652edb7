//! Configuration file loading and settings resolution
//!
//! The configuration file supplies the artifact identifier, the manifest
//! location and the default reference mapping:
//!
//! ```toml
//! artifact = "powsybl-core"
//! manifest = "pom.xml"
//!
//! [references.guava]
//! url = "https://javadoc.io/doc/com.google.guava/guava/latest/"
//! ```
//!
//! Command-line options take precedence over the file.

use crate::cli::CliArgs;
use crate::domain::{ReferenceEntry, ReferenceMapping};
use crate::error::ConfigError;
use crate::manifest::DEFAULT_MANIFEST;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default configuration file name, picked up from the working directory
pub const DEFAULT_CONFIG: &str = "docversion.toml";

/// Contents of a configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Artifact whose version is used for the documentation
    pub artifact: Option<String>,
    /// Manifest path, relative to the configuration file
    pub manifest: Option<PathBuf>,
    /// Default documentation base URLs
    #[serde(default)]
    pub references: ReferenceMapping,
}

impl ConfigFile {
    /// Parse configuration from TOML text
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::toml_parse_error(path, e.to_string()))
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::not_found(path),
            _ => ConfigError::read_error(path, e),
        })?;
        Self::parse(&content, path)
    }
}

/// Fully resolved inputs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub manifest: PathBuf,
    pub artifact: String,
    pub references: ReferenceMapping,
}

impl Settings {
    /// Resolve settings from CLI arguments and an optional config file
    ///
    /// An explicit `--config` must exist. Without it, `docversion.toml` in the
    /// working directory is used if present.
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        let (config, config_dir) = match &args.config {
            Some(path) => (ConfigFile::load(path)?, parent_dir(path)),
            None => {
                let path = Path::new(DEFAULT_CONFIG);
                if path.is_file() {
                    (ConfigFile::load(path)?, parent_dir(path))
                } else {
                    (ConfigFile::default(), PathBuf::new())
                }
            }
        };

        let mut cli_refs = ReferenceMapping::new();
        for value in &args.reference {
            let (name, entry) = parse_reference(value)?;
            cli_refs.insert(name, entry);
        }

        Self::merge(args, config, &config_dir, cli_refs)
    }

    /// Merge CLI values over config values
    fn merge(
        args: &CliArgs,
        config: ConfigFile,
        config_dir: &Path,
        cli_refs: ReferenceMapping,
    ) -> Result<Self, ConfigError> {
        let artifact = args
            .artifact
            .clone()
            .or(config.artifact)
            .ok_or(ConfigError::MissingArtifact)?;

        let manifest = match (&args.manifest, config.manifest) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => config_dir.join(path),
            (None, None) => PathBuf::from(DEFAULT_MANIFEST),
        };

        let mut references = config.references;
        references.extend(cli_refs);

        Ok(Self {
            manifest,
            artifact,
            references,
        })
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// Parse a `NAME=URL` reference option
pub fn parse_reference(value: &str) -> Result<(String, ReferenceEntry), ConfigError> {
    match value.split_once('=') {
        Some((name, url)) if !name.trim().is_empty() && !url.trim().is_empty() => Ok((
            name.trim().to_string(),
            ReferenceEntry::new(url.trim()),
        )),
        _ => Err(ConfigError::invalid_reference(value)),
    }
}
