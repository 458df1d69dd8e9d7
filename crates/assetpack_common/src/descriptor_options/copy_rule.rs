use std::path::{Path, PathBuf};

use assetpack_utils::path_ext::PathExt;
use serde::{Deserialize, Serialize};

/// Copies a file that isn't part of the module graph into the output directory as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CopyRule {
  pub from: PathBuf,
  /// Relative to the output directory.
  #[serde(default = "output_root")]
  pub to: PathBuf,
  /// Drop the source's directory nesting at the destination.
  #[serde(default)]
  pub flatten: bool,
}

fn output_root() -> PathBuf {
  PathBuf::from(".")
}

impl CopyRule {
  /// A flattened copy into the output root.
  pub fn flattened(from: impl Into<PathBuf>) -> Self {
    Self { from: from.into(), to: output_root(), flatten: true }
  }

  /// Where the copied file lands under `output_dir`.
  pub fn destination(&self, output_dir: &Path) -> PathBuf {
    let relative = if self.flatten {
      self.from.file_name().map(PathBuf::from).unwrap_or_default()
    } else {
      self.from.without_relative_prefix()
    };
    self.to.join(relative).resolve_against(output_dir)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const CONTROLS_CSS: &str = "../adaptivecards-controls/src/adaptivecards-controls.css";

  #[test]
  fn flattened_copy_lands_in_output_root() {
    let rule = CopyRule::flattened(CONTROLS_CSS);
    assert_eq!(
      rule.destination(Path::new("/work/hc-editor/dist")),
      Path::new("/work/hc-editor/dist/adaptivecards-controls.css")
    );
  }

  #[test]
  fn nested_copy_keeps_source_structure() {
    let rule = CopyRule { from: CONTROLS_CSS.into(), to: "vendor".into(), flatten: false };
    assert_eq!(
      rule.destination(Path::new("/dist")),
      Path::new("/dist/vendor/adaptivecards-controls/src/adaptivecards-controls.css")
    );
  }
}
