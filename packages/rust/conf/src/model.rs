//! Resolved configuration handed to the documentation generator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::site::Breadcrumb;

/// The fully resolved, flat configuration document.
///
/// This is what the documentation toolchain consumes; everything dynamic
/// (version, hostname, derived URLs, copyright year) has been folded in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedConfig {
    /// Project name.
    pub project: String,
    /// Author string.
    pub author: String,
    /// Copyright line with the current year.
    pub copyright: String,
    /// Version read from the VERSION file.
    pub version: String,
    /// Release string, equal to `version`.
    pub release: String,
    /// Canonical hostname serving the documentation.
    pub cname: String,
    /// HTML output settings.
    pub html: HtmlConfig,
    /// Markup extension settings.
    pub markup: MarkupConfig,
}

/// HTML presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtmlConfig {
    /// Theme package name.
    pub theme: String,
    /// Page title.
    pub title: String,
    /// Short title, equal to `title`.
    pub short_title: String,
    /// Logo reference.
    pub logo: String,
    /// Favicon reference.
    pub favicon: String,
    /// Repository context for the edit-page button.
    pub context: GithubContext,
    /// Theme option mapping.
    pub theme_options: ThemeOptions,
}

/// Repository coordinates exposed to the theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubContext {
    pub github_user: String,
    pub github_repo: String,
    pub github_version: String,
    pub doc_path: String,
}

/// Theme option mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeOptions {
    /// Repository URL shown in the navbar.
    pub github_url: Url,
    /// Whether the theme verifies the switcher JSON at build time.
    pub check_switcher: bool,
    /// Whether previous/next page links are rendered.
    pub show_prev_next: bool,
    /// Whether breadcrumb navigation is rendered.
    pub show_breadcrumbs: bool,
    /// Whether the edit-this-page button is rendered.
    pub use_edit_page_button: bool,
    /// Extra breadcrumb entries prepended to the page hierarchy.
    pub additional_breadcrumbs: Vec<Breadcrumb>,
    /// Version switcher metadata.
    pub switcher: Switcher,
}

/// Version switcher metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Switcher {
    /// URL of the versions listing consumed by the switcher control.
    pub json_url: Url,
    /// Token matching this build in the versions listing.
    pub version_match: String,
}

/// Markup extension settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkupConfig {
    /// Enabled markup extensions, in load order.
    pub extensions: Vec<String>,
    /// Root document of the table of contents.
    pub master_doc: String,
    /// Template directories.
    pub templates_path: Vec<String>,
    /// MyST parser extensions.
    pub myst_enable_extensions: Vec<String>,
    /// Heading depth for which anchors are generated.
    pub myst_heading_anchors: u32,
    /// Warning categories suppressed during the build.
    pub suppress_warnings: Vec<String>,
    /// File-suffix to markup-format mapping.
    pub source_suffix: BTreeMap<String, String>,
}
