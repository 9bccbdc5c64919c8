pub mod categories;
pub mod completions;
pub mod list;
pub mod recruit;
pub mod session;

use anyhow::Result;
use showcase_core::config::SiteConfig;
use showcase_core::ingest::load_projects;
use showcase_core::view::Gallery;
use std::path::{Path, PathBuf};

/// Everything a command needs to know about the site it runs against.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub root: PathBuf,
    pub projects_dir: PathBuf,
    pub config: SiteConfig,
}

impl SiteContext {
    pub fn new(root: &Path, projects_dir: &Path, config: SiteConfig) -> Self {
        let projects_dir = if projects_dir.is_absolute() {
            projects_dir.to_path_buf()
        } else {
            root.join(projects_dir)
        };
        Self {
            root: root.to_path_buf(),
            projects_dir,
            config,
        }
    }

    /// Load the project manifests and mount a fresh gallery over them.
    pub fn mount_gallery(&self) -> Result<Gallery> {
        let records = load_projects(&self.projects_dir)?;
        Ok(Gallery::new(records, self.config.gallery.page_size()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_projects_dir_is_joined_to_root() {
        let ctx = SiteContext::new(
            Path::new("/site"),
            Path::new("projects"),
            SiteConfig::default(),
        );
        assert_eq!(ctx.projects_dir, PathBuf::from("/site/projects"));
    }

    #[test]
    fn absolute_projects_dir_is_kept() {
        let ctx = SiteContext::new(
            Path::new("/site"),
            Path::new("/data/projects"),
            SiteConfig::default(),
        );
        assert_eq!(ctx.projects_dir, PathBuf::from("/data/projects"));
    }
}
