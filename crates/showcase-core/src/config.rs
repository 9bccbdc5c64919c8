use crate::view::{INITIAL_COUNT, PageSize, REVEAL_INCREMENT};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;
use std::path::Path;

/// Site-level settings read from `.showcase/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub recruit: RecruitConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_initial_count")]
    pub initial_count: usize,
    #[serde(default = "default_reveal_increment")]
    pub reveal_increment: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            initial_count: default_initial_count(),
            reveal_increment: default_reveal_increment(),
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        PageSize {
            initial: self.initial_count,
            increment: self.reveal_increment,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecruitConfig {
    #[serde(default = "default_cohorts")]
    pub cohorts: Vec<String>,
}

impl Default for RecruitConfig {
    fn default() -> Self {
        Self {
            cohorts: default_cohorts(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    #[serde(default)]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveConfig {
    pub site: SiteConfig,
    pub user: UserConfig,
    pub resolved_output: String,
}

/// Load `<root>/.showcase/config.toml`, falling back to defaults when absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed, or if
/// it sets `reveal_increment = 0` or an empty cohort list.
pub fn load_site_config(root: &Path) -> Result<SiteConfig> {
    let path = root.join(".showcase/config.toml");
    if !path.exists() {
        return Ok(SiteConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config = toml::from_str::<SiteConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    validate(&config).with_context(|| format!("Invalid settings in {}", path.display()))?;
    Ok(config)
}

fn validate(config: &SiteConfig) -> Result<()> {
    if config.gallery.reveal_increment == 0 {
        bail!("gallery.reveal_increment must be at least 1");
    }
    if config.recruit.cohorts.is_empty() {
        bail!("recruit.cohorts must list at least one cohort");
    }
    Ok(())
}

/// Load the per-user config from the platform config directory.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<UserConfig> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(UserConfig::default());
    };

    let path = config_dir.join("showcase/config.toml");
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<UserConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Combine site config, user config, the `FORMAT` env var and the `--json` flag.
///
/// # Errors
///
/// Returns an error if either config file fails to load.
pub fn resolve_config(root: &Path, cli_json: bool) -> Result<EffectiveConfig> {
    let site = load_site_config(root)?;
    let user = load_user_config()?;

    let env_format = env::var("FORMAT").ok();
    let resolved_output = resolve_output(
        cli_json,
        user.output.as_deref(),
        env_format.as_deref(),
        std::io::stdout().is_terminal(),
    );

    Ok(EffectiveConfig {
        site,
        user,
        resolved_output,
    })
}

/// Canonical output mode name for a user-supplied string.
#[must_use]
pub fn normalize_output_mode(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pretty" | "human" => Some("pretty"),
        "text" | "table" => Some("text"),
        "json" => Some("json"),
        _ => None,
    }
}

fn resolve_output(
    cli_json: bool,
    user_output: Option<&str>,
    env_format: Option<&str>,
    is_tty: bool,
) -> String {
    if cli_json {
        return "json".to_string();
    }

    if let Some(mode) = env_format.and_then(normalize_output_mode) {
        return mode.to_string();
    }

    if let Some(mode) = user_output.and_then(normalize_output_mode) {
        return mode.to_string();
    }

    let mode = if is_tty { "pretty" } else { "text" };
    mode.to_string()
}

const fn default_initial_count() -> usize {
    INITIAL_COUNT
}

const fn default_reveal_increment() -> usize {
    REVEAL_INCREMENT
}

fn default_cohorts() -> Vec<String> {
    ["1기", "2기", "3기", "4기", "5기"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(root: &Path, body: &str) {
        let dir = root.join(".showcase");
        std::fs::create_dir_all(&dir).expect("create .showcase");
        std::fs::write(dir.join("config.toml"), body).expect("write config");
    }

    #[test]
    fn missing_site_config_uses_defaults() {
        let root = tempfile::tempdir().expect("temp dir");
        let cfg = load_site_config(root.path()).expect("load should succeed");
        assert_eq!(cfg.gallery.initial_count, 9);
        assert_eq!(cfg.gallery.reveal_increment, 6);
        assert_eq!(cfg.recruit.cohorts, ["1기", "2기", "3기", "4기", "5기"]);
    }

    #[test]
    fn partial_site_config_fills_defaults() {
        let root = tempfile::tempdir().expect("temp dir");
        write_config(root.path(), "[gallery]\ninitial_count = 3\n");
        let cfg = load_site_config(root.path()).expect("load should succeed");
        assert_eq!(
            cfg.gallery.page_size(),
            PageSize {
                initial: 3,
                increment: 6
            }
        );
        assert_eq!(cfg.recruit.cohorts.len(), 5);
    }

    #[test]
    fn zero_increment_is_rejected() {
        let root = tempfile::tempdir().expect("temp dir");
        write_config(root.path(), "[gallery]\nreveal_increment = 0\n");
        let err = load_site_config(root.path()).expect_err("zero increment must fail");
        assert!(format!("{err:#}").contains("reveal_increment"));
    }

    #[test]
    fn empty_cohort_list_is_rejected() {
        let root = tempfile::tempdir().expect("temp dir");
        write_config(root.path(), "[recruit]\ncohorts = []\n");
        assert!(load_site_config(root.path()).is_err());
    }

    #[test]
    fn malformed_site_config_names_file() {
        let root = tempfile::tempdir().expect("temp dir");
        write_config(root.path(), "[gallery\n");
        let err = load_site_config(root.path()).expect_err("parse must fail");
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn cli_json_overrides_env_and_config() {
        let output = resolve_output(true, Some("pretty"), Some("text"), true);
        assert_eq!(output, "json");
    }

    #[test]
    fn env_beats_user_config() {
        assert_eq!(resolve_output(false, Some("json"), Some("text"), true), "text");
    }

    #[test]
    fn legacy_aliases_are_normalized() {
        assert_eq!(resolve_output(false, Some("table"), Some("human"), false), "pretty");
        assert_eq!(resolve_output(false, Some("human"), Some("table"), false), "text");
    }

    #[test]
    fn tty_detection_is_last_resort() {
        assert_eq!(resolve_output(false, None, Some("bogus"), true), "pretty");
        assert_eq!(resolve_output(false, None, None, false), "text");
    }
}
