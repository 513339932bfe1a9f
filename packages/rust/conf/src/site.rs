//! Static site settings for docsmith.
//!
//! Site settings live in `docsmith.toml` at the project root. Every field
//! has a default, so a project with no `docsmith.toml` still resolves.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DocsmithError, Result};

/// Default configuration file name, looked up at the project root.
pub const SITE_CONFIG_FILE_NAME: &str = "docsmith.toml";

// ---------------------------------------------------------------------------
// Config structs (matching docsmith.toml schema)
// ---------------------------------------------------------------------------

/// Top-level site settings, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Project identity.
    #[serde(default)]
    pub project: ProjectConfig,

    /// Source repository coordinates.
    #[serde(default)]
    pub repository: RepositoryConfig,

    /// Theme selection and display toggles.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Markup extensions and source handling.
    #[serde(default)]
    pub markup: MarkupSettings,

    /// Version input and hostname resolution.
    #[serde(default)]
    pub version: VersionConfig,
}

/// `[project]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name, used as the HTML title.
    #[serde(default = "default_project_name")]
    pub name: String,

    /// Author string.
    #[serde(default = "default_author")]
    pub author: String,

    /// Name used in the generated copyright line.
    #[serde(default = "default_author")]
    pub copyright_holder: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            author: default_author(),
            copyright_holder: default_author(),
        }
    }
}

fn default_project_name() -> String {
    "aali-flowkit".into()
}
fn default_author() -> String {
    "ANSYS, Inc.".into()
}

/// `[repository]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// GitHub organization or user.
    #[serde(default = "default_github_user")]
    pub github_user: String,

    /// Repository name.
    #[serde(default = "default_project_name")]
    pub github_repo: String,

    /// Branch the edit-page button links to.
    #[serde(default = "default_github_version")]
    pub github_version: String,

    /// Path to the documentation sources within the repository.
    #[serde(default = "default_doc_path")]
    pub doc_path: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            github_user: default_github_user(),
            github_repo: default_project_name(),
            github_version: default_github_version(),
            doc_path: default_doc_path(),
        }
    }
}

fn default_github_user() -> String {
    "ansys".into()
}
fn default_github_version() -> String {
    "main".into()
}
fn default_doc_path() -> String {
    "doc/source".into()
}

/// `[theme]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme package name.
    #[serde(default = "default_theme_name")]
    pub name: String,

    /// Logo reference understood by the theme.
    #[serde(default = "default_logo")]
    pub logo: String,

    /// Favicon reference understood by the theme.
    #[serde(default = "default_favicon")]
    pub favicon: String,

    /// Whether to render breadcrumb navigation.
    #[serde(default = "default_true")]
    pub show_breadcrumbs: bool,

    /// Whether to render previous/next page links.
    #[serde(default)]
    pub show_prev_next: bool,

    /// Whether to render the edit-this-page button.
    #[serde(default = "default_true")]
    pub use_edit_page_button: bool,

    /// Whether the theme should verify the switcher JSON at build time.
    #[serde(default)]
    pub check_switcher: bool,

    /// Extra breadcrumb entries prepended to the page hierarchy.
    #[serde(default = "default_breadcrumbs")]
    pub additional_breadcrumbs: Vec<Breadcrumb>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            logo: default_logo(),
            favicon: default_favicon(),
            show_breadcrumbs: true,
            show_prev_next: false,
            use_edit_page_button: true,
            check_switcher: false,
            additional_breadcrumbs: default_breadcrumbs(),
        }
    }
}

fn default_theme_name() -> String {
    "ansys_sphinx_theme".into()
}
fn default_logo() -> String {
    "ansys_logo_black".into()
}
fn default_favicon() -> String {
    "ansys_favicon".into()
}
fn default_true() -> bool {
    true
}
fn default_breadcrumbs() -> Vec<Breadcrumb> {
    vec![Breadcrumb {
        title: "Aali".into(),
        url: "https://aali.docs.ansys.com/".into(),
    }]
}

/// A single navigational breadcrumb entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Display title.
    pub title: String,
    /// Link target.
    pub url: String,
}

/// `[markup]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkupSettings {
    /// Enabled markup extensions, in load order.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Root document of the table of contents.
    #[serde(default = "default_master_doc")]
    pub master_doc: String,

    /// Template directories, relative to the documentation sources.
    #[serde(default = "default_templates_path")]
    pub templates_path: Vec<String>,

    /// MyST parser extensions to enable.
    #[serde(default = "default_myst_extensions")]
    pub myst_enable_extensions: Vec<String>,

    /// Heading depth for which anchors are generated.
    #[serde(default = "default_heading_anchors")]
    pub myst_heading_anchors: u32,

    /// Warning categories suppressed during the build.
    #[serde(default = "default_suppress_warnings")]
    pub suppress_warnings: Vec<String>,

    /// File-suffix to markup-format mapping. Kept last so TOML renders the
    /// map as a trailing sub-table.
    #[serde(default = "default_source_suffix")]
    pub source_suffix: BTreeMap<String, String>,
}

impl Default for MarkupSettings {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            master_doc: default_master_doc(),
            templates_path: default_templates_path(),
            myst_enable_extensions: default_myst_extensions(),
            myst_heading_anchors: default_heading_anchors(),
            suppress_warnings: default_suppress_warnings(),
            source_suffix: default_source_suffix(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec![
        "sphinx_design".into(),
        "sphinx_copybutton".into(),
        "myst_parser".into(),
    ]
}
fn default_source_suffix() -> BTreeMap<String, String> {
    BTreeMap::from([
        (".rst".into(), "restructuredtext".into()),
        (".md".into(), "markdown".into()),
    ])
}
fn default_master_doc() -> String {
    "index".into()
}
fn default_templates_path() -> Vec<String> {
    vec!["_templates".into()]
}
fn default_myst_extensions() -> Vec<String> {
    vec!["replacements".into(), "smartquotes".into()]
}
fn default_heading_anchors() -> u32 {
    3
}
fn default_suppress_warnings() -> Vec<String> {
    vec!["myst.xref_missing".into()]
}

/// `[version]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionConfig {
    /// Version file path, relative to the project root.
    #[serde(default = "default_version_file")]
    pub file: String,

    /// Name of the env var overriding the documentation hostname.
    #[serde(default = "default_cname_env")]
    pub cname_env: String,

    /// Hostname used when the env var is unset.
    #[serde(default = "default_cname")]
    pub default_cname: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            file: default_version_file(),
            cname_env: default_cname_env(),
            default_cname: default_cname(),
        }
    }
}

fn default_version_file() -> String {
    "VERSION".into()
}
fn default_cname_env() -> String {
    "DOCUMENTATION_CNAME".into()
}
fn default_cname() -> String {
    "laughing-guide-5m1lvq6.pages.github.io".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load site settings from a `docsmith.toml`. Returns defaults if the file
/// does not exist.
pub fn load_site_config(path: &Path) -> Result<SiteConfig> {
    if !path.exists() {
        tracing::debug!(?path, "site config not found, using defaults");
        return Ok(SiteConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| DocsmithError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        DocsmithError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Write a default `docsmith.toml` to the given path.
pub fn init_site_config(path: &Path) -> Result<()> {
    let config = SiteConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| DocsmithError::config(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| DocsmithError::io(path, e))?;
    tracing::info!(?path, "created default site config");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = SiteConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("aali-flowkit"));
        assert!(toml_str.contains("DOCUMENTATION_CNAME"));
    }

    #[test]
    fn config_roundtrip() {
        let config = SiteConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: SiteConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.project.name, "aali-flowkit");
        assert_eq!(parsed.markup.myst_heading_anchors, 3);
        assert_eq!(parsed.version.file, "VERSION");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[project]
name = "widget-docs"
author = "Widget Co"

[repository]
github_user = "widgets"
github_repo = "widget-docs"
"#;
        let config: SiteConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.project.name, "widget-docs");
        // Unset sections and fields fall back to defaults
        assert_eq!(config.project.copyright_holder, "ANSYS, Inc.");
        assert_eq!(config.theme.name, "ansys_sphinx_theme");
        assert_eq!(config.markup.master_doc, "index");
        assert_eq!(
            config.version.default_cname,
            "laughing-guide-5m1lvq6.pages.github.io"
        );
    }

    #[test]
    fn source_suffix_defaults() {
        let config = SiteConfig::default();
        assert_eq!(
            config.markup.source_suffix.get(".rst").map(String::as_str),
            Some("restructuredtext")
        );
        assert_eq!(
            config.markup.source_suffix.get(".md").map(String::as_str),
            Some("markdown")
        );
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = std::env::temp_dir().join(format!(
            "docsmith-missing-{}-{}.toml",
            std::process::id(),
            line!()
        ));
        let config = load_site_config(&path).expect("load defaults");
        assert_eq!(config.project.name, "aali-flowkit");
    }

    #[test]
    fn malformed_file_is_config_error() {
        let path = std::env::temp_dir().join(format!(
            "docsmith-malformed-{}-{}.toml",
            std::process::id(),
            line!()
        ));
        std::fs::write(&path, "[project\nname = ").expect("write");
        let err = load_site_config(&path).expect_err("parse must fail");
        assert!(err.to_string().contains("config error"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn init_writes_loadable_config() {
        let path = std::env::temp_dir().join(format!(
            "docsmith-init-{}-{}.toml",
            std::process::id(),
            line!()
        ));
        init_site_config(&path).expect("init");
        let config = load_site_config(&path).expect("reload");
        assert_eq!(config.theme.favicon, "ansys_favicon");
        std::fs::remove_file(&path).ok();
    }
}
