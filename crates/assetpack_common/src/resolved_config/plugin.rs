use serde::Serialize;

use crate::{CopyRule, FilenameTemplate};

/// A build step the engine runs. Order is preserved from the descriptor but never executed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum Plugin {
  /// Required by [`crate::Loader::CssExtract`] to actually write the extracted css.
  ExtractCss { filename: FilenameTemplate },
  CopyAssets { patterns: Vec<CopyRule> },
}
