use std::path::PathBuf;

use serde::Serialize;

use crate::FilenameTemplate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRule {
  /// Every artifact is written directly into this directory.
  pub path: PathBuf,
  pub filename: FilenameTemplate,
  /// Global that exposes the bundle's exports when it is loaded through a plain script tag.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub library: Option<String>,
}

impl OutputRule {
  pub fn filename_for(&self, bundle_name: &str) -> String {
    self.filename.render(bundle_name)
  }
}
