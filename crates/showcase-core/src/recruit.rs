//! Recruiting "profile field" explainer: a cohort tab bar whose selection
//! picks which field explanation is shown.

use crate::error::ErrorCode;
use crate::ingest::ManifestFormat;
use crate::tabs::TabSelection;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RecruitError {
    #[error("unknown cohort '{0}'")]
    UnknownCohort(String),

    #[error("recruit board needs at least one cohort")]
    NoCohorts,

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}

impl RecruitError {
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnknownCohort(_) => ErrorCode::UnknownCohort,
            Self::NoCohorts => ErrorCode::ConfigParseError,
            Self::Io { .. } => ErrorCode::InternalUnexpected,
            Self::Parse { .. } => ErrorCode::CatalogParseError,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Explanation shown under one cohort tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldExplain {
    pub field_name: String,
    #[serde(default)]
    pub contents: Vec<ExplainEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruitCatalog {
    #[serde(default)]
    pub fields: Vec<FieldExplain>,
}

impl RecruitCatalog {
    /// Read a catalog from a `.yaml`/`.yml`/`.json` file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse as a catalog.
    pub fn load(path: &Path) -> Result<Self, RecruitError> {
        let text = std::fs::read_to_string(path).map_err(|source| RecruitError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: Result<Self, String> = match ManifestFormat::from_path(path) {
            Some(ManifestFormat::Json) => serde_json::from_str(&text).map_err(|e| e.to_string()),
            // YAML is a superset of JSON, so unknown extensions go through it.
            Some(ManifestFormat::Yaml) | None => {
                serde_yaml::from_str(&text).map_err(|e| e.to_string())
            }
        };
        parsed.map_err(|reason| RecruitError::Parse {
            path: path.to_path_buf(),
            reason,
        })
    }

    #[must_use]
    pub fn find(&self, field_name: &str) -> Option<&FieldExplain> {
        self.fields.iter().find(|f| f.field_name == field_name)
    }
}

/// Cohort tabs plus the catalog they index into.
#[derive(Debug, Clone)]
pub struct RecruitBoard {
    tabs: TabSelection<String>,
    catalog: RecruitCatalog,
}

impl RecruitBoard {
    /// Build a board with the first cohort selected.
    ///
    /// # Errors
    ///
    /// Returns [`RecruitError::NoCohorts`] when `cohorts` is empty.
    pub fn new(
        cohorts: impl IntoIterator<Item = String>,
        catalog: RecruitCatalog,
    ) -> Result<Self, RecruitError> {
        let tabs = TabSelection::new(cohorts).ok_or(RecruitError::NoCohorts)?;
        Ok(Self { tabs, catalog })
    }

    #[must_use]
    pub fn cohorts(&self) -> &[String] {
        self.tabs.tabs()
    }

    #[must_use]
    pub fn current(&self) -> &str {
        self.tabs.current()
    }

    /// Switch to the cohort labelled `label`.
    ///
    /// # Errors
    ///
    /// Returns [`RecruitError::UnknownCohort`] and keeps the current cohort
    /// when `label` is not one of the tabs.
    pub fn select(&mut self, label: &str) -> Result<(), RecruitError> {
        let label = label.trim().to_string();
        self.tabs
            .select(&label)
            .map_err(|_| RecruitError::UnknownCohort(label.clone()))?;
        debug!(cohort = %label, "cohort selected");
        Ok(())
    }

    /// Explanation for the selected cohort, if the catalog has one.
    #[must_use]
    pub fn explain(&self) -> Option<&FieldExplain> {
        self.catalog.find(self.current())
    }
}
