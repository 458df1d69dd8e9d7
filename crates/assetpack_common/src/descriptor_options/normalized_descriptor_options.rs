use std::path::PathBuf;

use crate::{BuildMode, CopyRule, EntryMap, FilenameTemplate, LoaderRule, ResolveOptions};

/// A validated descriptor with every default applied. Resolving it for a mode cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDescriptorOptions {
  // --- Input
  pub entry: EntryMap,
  pub cwd: PathBuf,

  // --- Output
  /// Already resolved against `cwd`.
  pub dir: PathBuf,
  pub entry_filenames: FilenameTemplate,
  pub minified_entry_filenames: FilenameTemplate,
  pub css_filenames: FilenameTemplate,
  pub minified_css_filenames: FilenameTemplate,
  pub library: Option<String>,

  // --- Module
  pub rules: Vec<LoaderRule>,
  pub copy: Vec<CopyRule>,

  // --- Resolve
  pub resolve: ResolveOptions,

  // --- Dev server
  pub dev_server_port: u16,
}

impl NormalizedDescriptorOptions {
  pub fn entry_filenames_for(&self, mode: BuildMode) -> &FilenameTemplate {
    if mode.is_dev() {
      &self.entry_filenames
    } else {
      &self.minified_entry_filenames
    }
  }

  pub fn css_filenames_for(&self, mode: BuildMode) -> &FilenameTemplate {
    if mode.is_dev() {
      &self.css_filenames
    } else {
      &self.minified_css_filenames
    }
  }
}
