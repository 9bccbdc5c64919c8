//! Project manifest loading.
//!
//! Every `.json`, `.yaml` or `.yml` file below the projects root describes one
//! project. Its path relative to the root, minus the extension, is the
//! project's URL slug (`web/club-site.yaml` becomes `web/club-site`).

use crate::error::ErrorCode;
use crate::model::{ProjectRecord, RawField};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Errors raised while materializing project records.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("projects directory not found: {}", path.display())]
    DirMissing { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("no project manifests under {}", path.display())]
    NoProjects { path: PathBuf },
}

impl IngestError {
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::DirMissing { .. } => ErrorCode::ProjectsDirMissing,
            Self::Io { .. } => ErrorCode::InternalUnexpected,
            Self::Parse { .. } => ErrorCode::ManifestParseError,
            Self::NoProjects { .. } => ErrorCode::NoProjects,
        }
    }
}

/// On-disk shape of a project manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectManifest {
    pub name: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub field: RawField,
    pub generation: i64,
}

impl ProjectManifest {
    #[must_use]
    pub fn into_record(self, slug: impl Into<String>) -> ProjectRecord {
        ProjectRecord::new(
            self.name,
            self.thumbnail,
            self.tags,
            self.field,
            self.generation,
            slug,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Yaml,
}

impl ManifestFormat {
    /// Detect the format from the file extension. Other files are not manifests.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Parse manifest text.
    ///
    /// # Errors
    ///
    /// Returns the deserializer's message when `text` is not a valid manifest.
    pub fn parse(self, text: &str) -> Result<ProjectManifest, String> {
        match self {
            Self::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

/// URL slug for a manifest: its root-relative path without extension,
/// joined with `/`.
#[must_use]
pub fn slug_for(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let stem = relative.with_extension("");
    stem.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Load every manifest below `root`, in sorted path order.
///
/// # Errors
///
/// Fails when `root` is missing, a manifest cannot be read or parsed, or no
/// manifests exist.
pub fn load_projects(root: &Path) -> Result<Vec<ProjectRecord>, IngestError> {
    if !root.is_dir() {
        return Err(IngestError::DirMissing {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    collect_manifest_paths(root, &mut files)?;
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut records = Vec::with_capacity(files.len());
    let mut seen_titles = HashSet::new();
    for (path, format) in files {
        let text = std::fs::read_to_string(&path).map_err(|source| IngestError::Io {
            path: path.clone(),
            source,
        })?;
        let manifest = format
            .parse(&text)
            .map_err(|reason| IngestError::Parse {
                path: path.clone(),
                reason,
            })?;
        if !seen_titles.insert(manifest.name.clone()) {
            warn!(title = %manifest.name, path = %path.display(), "duplicate project title");
        }
        let slug = slug_for(root, &path);
        debug!(%slug, generation = manifest.generation, "loaded manifest");
        let record = manifest.into_record(slug);
        if record.field().is_empty() {
            warn!(slug = %record.url(), "project has no field tags; only listed under ALL");
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(IngestError::NoProjects {
            path: root.to_path_buf(),
        });
    }

    info!(count = records.len(), root = %root.display(), "loaded projects");
    Ok(records)
}

fn collect_manifest_paths(
    dir: &Path,
    out: &mut Vec<(PathBuf, ManifestFormat)>,
) -> Result<(), IngestError> {
    let io_err = |source: std::io::Error| IngestError::Io {
        path: dir.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
        {
            continue;
        }
        if entry.file_type().map_err(io_err)?.is_dir() {
            collect_manifest_paths(&path, out)?;
        } else if let Some(format) = ManifestFormat::from_path(&path) {
            out.push((path, format));
        } else {
            debug!(path = %path.display(), "skipping non-manifest file");
        }
    }
    Ok(())
}
