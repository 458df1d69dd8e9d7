pub mod copy_rule;
pub mod dev_server;
pub mod filename_template;
pub mod input_item;
pub mod loader;
pub mod loader_rule;
pub mod normalized_descriptor_options;
pub mod resolve_options;
pub mod source_map_policy;

use std::path::PathBuf;

use serde::Deserialize;

use crate::{CopyRule, InputItem, LoaderRuleOptions, ResolveOptions};

/// A build descriptor as written by hand or read from a JSON file. Every field is optional; missing
/// ones are filled in by normalization.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DescriptorOptions {
  // --- Input
  pub entry: Option<Vec<InputItem>>,
  /// Directory relative paths are resolved against.
  pub cwd: Option<PathBuf>,

  // --- Output
  pub dir: Option<String>,
  pub entry_filenames: Option<String>,
  pub minified_entry_filenames: Option<String>,
  pub css_filenames: Option<String>,
  pub minified_css_filenames: Option<String>,
  /// Global the bundle is exposed under for script-tag consumers.
  pub library: Option<String>,

  // --- Module
  pub rules: Option<Vec<LoaderRuleOptions>>,
  pub copy: Option<Vec<CopyRule>>,

  // --- Resolve
  pub resolve: Option<ResolveOptions>,

  // --- Dev server
  pub dev_server_port: Option<u16>,
}
