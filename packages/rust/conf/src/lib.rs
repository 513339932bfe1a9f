//! Configuration model, loading, and resolution for docsmith.
//!
//! This crate turns three inputs into the configuration document consumed
//! by the external documentation generator:
//! - Static site settings ([`SiteConfig`], loaded from `docsmith.toml`)
//! - The project version, read from a plain-text VERSION file
//! - An optional hostname env var overriding the default cname
//!
//! [`resolve`] folds them together into a [`ResolvedConfig`], which [`emit`]
//! renders as JSON or TOML.

pub mod emit;
pub mod error;
pub mod model;
pub mod resolve;
pub mod site;
pub mod version;

// Re-export public API at crate root for ergonomic imports.
pub use emit::{EmitFormat, emit};
pub use error::{DocsmithError, Result};
pub use model::{
    GithubContext, HtmlConfig, MarkupConfig, ResolvedConfig, Switcher, ThemeOptions,
};
pub use resolve::resolve;
pub use site::{
    Breadcrumb, MarkupSettings, ProjectConfig, RepositoryConfig, SITE_CONFIG_FILE_NAME,
    SiteConfig, ThemeConfig, VersionConfig, init_site_config, load_site_config,
};
pub use version::{read_version, switcher_token};
