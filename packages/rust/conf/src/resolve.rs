//! Configuration resolution.
//!
//! Folds the three dynamic inputs — VERSION file, hostname env var, current
//! year — into the static site settings and produces a [`ResolvedConfig`].

use std::path::Path;

use chrono::{Datelike, Utc};
use tracing::{debug, instrument};
use url::Url;

use crate::error::{DocsmithError, Result};
use crate::model::{
    GithubContext, HtmlConfig, MarkupConfig, ResolvedConfig, Switcher, ThemeOptions,
};
use crate::site::SiteConfig;
use crate::version::{read_version, switcher_token};

/// Resolve the full documentation-build configuration.
///
/// The version file path from `[version].file` is taken relative to
/// `project_root`. A missing version file aborts resolution; every other
/// input is static or has a default.
#[instrument(skip_all, fields(project = %site.project.name))]
pub fn resolve(site: &SiteConfig, project_root: &Path) -> Result<ResolvedConfig> {
    let version = read_version(&project_root.join(&site.version.file))?;
    let cname = resolve_cname(&site.version.cname_env, &site.version.default_cname);
    let version_match = switcher_token(&version);

    debug!(version, cname, version_match, "resolved dynamic inputs");

    let github_url_str = format!(
        "https://github.com/{}/{}",
        site.repository.github_user, site.repository.github_repo
    );
    let github_url = Url::parse(&github_url_str)
        .map_err(|e| DocsmithError::config(format!("invalid repository URL {github_url_str}: {e}")))?;

    let json_url_str = format!("https://{cname}/versions.json");
    let json_url = Url::parse(&json_url_str)
        .map_err(|e| DocsmithError::config(format!("invalid switcher URL {json_url_str}: {e}")))?;

    // The holder carries its own punctuation ("ANSYS, Inc.")
    let copyright = format!(
        "(c) {} {} All rights reserved",
        Utc::now().year(),
        site.project.copyright_holder
    );

    Ok(ResolvedConfig {
        project: site.project.name.clone(),
        author: site.project.author.clone(),
        copyright,
        release: version.clone(),
        version,
        cname,
        html: HtmlConfig {
            theme: site.theme.name.clone(),
            title: site.project.name.clone(),
            short_title: site.project.name.clone(),
            logo: site.theme.logo.clone(),
            favicon: site.theme.favicon.clone(),
            context: GithubContext {
                github_user: site.repository.github_user.clone(),
                github_repo: site.repository.github_repo.clone(),
                github_version: site.repository.github_version.clone(),
                doc_path: site.repository.doc_path.clone(),
            },
            theme_options: ThemeOptions {
                github_url,
                additional_breadcrumbs: site.theme.additional_breadcrumbs.clone(),
                switcher: Switcher {
                    json_url,
                    version_match,
                },
                check_switcher: site.theme.check_switcher,
                show_prev_next: site.theme.show_prev_next,
                show_breadcrumbs: site.theme.show_breadcrumbs,
                use_edit_page_button: site.theme.use_edit_page_button,
            },
        },
        markup: MarkupConfig {
            extensions: site.markup.extensions.clone(),
            source_suffix: site.markup.source_suffix.clone(),
            master_doc: site.markup.master_doc.clone(),
            templates_path: site.markup.templates_path.clone(),
            myst_enable_extensions: site.markup.myst_enable_extensions.clone(),
            myst_heading_anchors: site.markup.myst_heading_anchors,
            suppress_warnings: site.markup.suppress_warnings.clone(),
        },
    })
}

/// Resolve the documentation hostname: env var if set and non-empty,
/// else the configured default.
fn resolve_cname(env_name: &str, default: &str) -> String {
    match std::env::var(env_name) {
        Ok(val) if !val.is_empty() => val,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn project_with_version(version: &str, tag: u32) -> PathBuf {
        let root = std::env::temp_dir().join(format!(
            "docsmith-resolve-{}-{tag}",
            std::process::id()
        ));
        std::fs::create_dir_all(&root).expect("create project root");
        std::fs::write(root.join("VERSION"), version).expect("write VERSION");
        root
    }

    #[test]
    fn version_and_release_match_the_file() {
        let root = project_with_version("  1.2.3 \n", line!());
        let resolved = resolve(&SiteConfig::default(), &root).expect("resolve");
        assert_eq!(resolved.version, "1.2.3");
        assert_eq!(resolved.release, "1.2.3");
        assert_eq!(resolved.html.theme_options.switcher.version_match, "1.2");
        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn missing_version_file_fails_resolution() {
        let root = std::env::temp_dir().join(format!(
            "docsmith-resolve-missing-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&root).expect("create project root");
        let err = resolve(&SiteConfig::default(), &root).expect_err("must fail");
        assert!(matches!(err, DocsmithError::Io { .. }));
        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn cname_defaults_when_env_unset() {
        let root = project_with_version("0.5.0", line!());
        // Use a unique env var name to avoid interfering with other tests
        let mut site = SiteConfig::default();
        site.version.cname_env = "DOCSMITH_TEST_UNSET_CNAME_9321".into();
        let resolved = resolve(&site, &root).expect("resolve");
        assert_eq!(resolved.cname, "laughing-guide-5m1lvq6.pages.github.io");
        assert_eq!(
            resolved.html.theme_options.switcher.json_url.as_str(),
            "https://laughing-guide-5m1lvq6.pages.github.io/versions.json"
        );
        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn cname_env_override_wins() {
        let root = project_with_version("0.5.0", line!());
        let mut site = SiteConfig::default();
        site.version.cname_env = "DOCSMITH_TEST_SET_CNAME_9322".into();
        // SAFETY: single-threaded access to a test-unique variable name
        unsafe { std::env::set_var(&site.version.cname_env, "docs.widget.example") };
        let resolved = resolve(&site, &root).expect("resolve");
        unsafe { std::env::remove_var(&site.version.cname_env) };
        assert_eq!(resolved.cname, "docs.widget.example");
        assert_eq!(
            resolved.html.theme_options.switcher.json_url.as_str(),
            "https://docs.widget.example/versions.json"
        );
        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn github_url_embeds_repository_coordinates() {
        let root = project_with_version("1.0.0", line!());
        let mut site = SiteConfig::default();
        site.repository.github_user = "widgets".into();
        site.repository.github_repo = "widget-docs".into();
        let resolved = resolve(&site, &root).expect("resolve");
        assert_eq!(
            resolved.html.theme_options.github_url.as_str(),
            "https://github.com/widgets/widget-docs"
        );
        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn copyright_carries_current_year_and_holder() {
        let root = project_with_version("1.0.0", line!());
        let resolved = resolve(&SiteConfig::default(), &root).expect("resolve");
        assert_eq!(
            resolved.copyright,
            format!("(c) {} ANSYS, Inc. All rights reserved", Utc::now().year())
        );
        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn dev_version_switches_to_dev_token() {
        let root = project_with_version("0.2.dev0", line!());
        let resolved = resolve(&SiteConfig::default(), &root).expect("resolve");
        assert_eq!(resolved.html.theme_options.switcher.version_match, "dev");
        std::fs::remove_dir_all(&root).ok();
    }
}
