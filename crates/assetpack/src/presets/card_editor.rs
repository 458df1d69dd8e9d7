use std::{path::PathBuf, sync::LazyLock};

use assetpack_common::{
  CopyRule, DevServerConfig, EntryMap, FilenameTemplate, Loader, LoaderRule,
  NormalizedDescriptorOptions, ResolveOptions,
};
use assetpack_utils::path_ext::PathExt;
use regex::Regex;

use crate::utils::normalize_options::{
  DEFAULT_CSS_FILENAMES, DEFAULT_ENTRY_FILENAMES, DEFAULT_MINIFIED_CSS_FILENAMES,
  DEFAULT_MINIFIED_ENTRY_FILENAMES,
};

pub const BUNDLE_NAME: &str = "adaptivecards-hc-editor";
pub const ENTRY: &str = "./src/app.ts";
pub const OUTPUT_DIR: &str = "./dist";
pub const LIBRARY: &str = "ACHCEditor";
/// Maintained by the controls package next door; shipped alongside the editor bundle.
pub const CONTROLS_STYLESHEET: &str = "../adaptivecards-controls/src/adaptivecards-controls.css";
/// Dependencies and the test harness are never bundled.
pub const TS_EXCLUDE: &str = "(node_modules|__tests__)";

static TS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.ts$").unwrap());
static CSS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.css$").unwrap());
static TS_EXCLUDE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(TS_EXCLUDE).unwrap());

/// The card editor front end: one TypeScript bundle exposed as `ACHCEditor`, its css, and the
/// controls stylesheet copied next to it. `cwd` plays the role of the directory the descriptor
/// lives in.
pub fn card_editor(cwd: impl Into<PathBuf>) -> NormalizedDescriptorOptions {
  let cwd = cwd.into();
  let dir = PathBuf::from(OUTPUT_DIR).resolve_against(&cwd);

  let mut entry = EntryMap::default();
  entry.insert(BUNDLE_NAME.to_string(), ENTRY.to_string());

  NormalizedDescriptorOptions {
    entry,
    cwd,
    dir,
    entry_filenames: FilenameTemplate::from(DEFAULT_ENTRY_FILENAMES),
    minified_entry_filenames: FilenameTemplate::from(DEFAULT_MINIFIED_ENTRY_FILENAMES),
    css_filenames: FilenameTemplate::from(DEFAULT_CSS_FILENAMES),
    minified_css_filenames: FilenameTemplate::from(DEFAULT_MINIFIED_CSS_FILENAMES),
    library: Some(LIBRARY.to_string()),
    rules: vec![
      LoaderRule::new(TS_RE.clone(), vec![Loader::Ts]).with_exclude(TS_EXCLUDE_RE.clone()),
      // The engine runs these right to left: imports are resolved before extraction sees them.
      LoaderRule::new(CSS_RE.clone(), vec![Loader::Style, Loader::CssExtract, Loader::Css]),
    ],
    copy: vec![CopyRule::flattened(CONTROLS_STYLESHEET)],
    resolve: ResolveOptions::default(),
    dev_server_port: DevServerConfig::DEFAULT_PORT,
  }
}
