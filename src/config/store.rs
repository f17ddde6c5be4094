//! Reading and writing the Claude Desktop config file

use crate::config::paths::default_config_path;
use crate::domain::ConfigDocument;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while reading, parsing or writing the config file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read.
    #[error("Failed reading config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The content is not JSON or not shaped like a Claude Desktop config.
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The directory or the file could not be written.
    #[error("Failed writing config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Handle on one config file location.
///
/// Holds nothing but the path: every `load` reads the file afresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location.
    pub fn discover() -> Self {
        Self::new(default_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document. A missing file is a first run and yields an empty
    /// document.
    pub fn load(&self) -> Result<ConfigDocument, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}; starting empty", self.path.display());
                return Ok(ConfigDocument::default());
            }
            Err(source) => return Err(StoreError::Read { path: self.path.clone(), source }),
        };

        let doc = parse_document(&content)
            .map_err(|source| StoreError::Parse { path: self.path.clone(), source })?;
        tracing::debug!(
            "Loaded {} MCP server(s) from {}",
            doc.integrations.len(),
            self.path.display()
        );
        Ok(doc)
    }

    /// Write `doc` as indented JSON, creating parent directories as needed.
    ///
    /// The file is overwritten in place; an interrupted write can leave it
    /// truncated.
    pub fn save(&self, doc: &ConfigDocument) -> Result<(), StoreError> {
        let write_err = |source: io::Error| StoreError::Write { path: self.path.clone(), source };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_private_dir_all(parent).map_err(write_err)?;
        }

        let mut json = serde_json::to_string_pretty(doc).map_err(|e| write_err(e.into()))?;
        json.push('\n');

        let mut file = open_private_for_write(&self.path).map_err(write_err)?;
        file.write_all(json.as_bytes()).map_err(write_err)?;
        file.flush().map_err(write_err)?;

        tracing::info!(
            "Saved {} MCP server(s) to {}",
            doc.integrations.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Parse config text. A top-level `null` is treated like an empty object.
fn parse_document(content: &str) -> Result<ConfigDocument, serde_json::Error> {
    let raw: Value = serde_json::from_str(content)?;
    if raw.is_null() {
        return Ok(ConfigDocument::default());
    }
    serde_json::from_value(raw)
}

#[cfg(unix)]
fn create_private_dir_all(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_private_dir_all(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Truncate-or-create. Mode bits only apply when the file is new, so an
/// existing file keeps its permissions.
fn open_private_for_write(path: &Path) -> io::Result<fs::File> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}
