use serde::Serialize;

use crate::BuildMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceMapPolicy {
  /// Embedded in the bundle itself. Fast to rebuild, nothing extra to serve.
  #[serde(rename = "inline-source-map")]
  Inline,
  /// Written next to the bundle as `<file>.map`.
  #[serde(rename = "source-map")]
  External,
}

impl SourceMapPolicy {
  pub fn for_mode(mode: BuildMode) -> Self {
    if mode.is_dev() {
      Self::Inline
    } else {
      Self::External
    }
  }

  pub fn map_filename(self, filename: &str) -> Option<String> {
    match self {
      Self::Inline => None,
      Self::External => Some(format!("{filename}.map")),
    }
  }
}

#[test]
fn test_source_map_policy_for_mode() {
  assert_eq!(SourceMapPolicy::for_mode(BuildMode::Development), SourceMapPolicy::Inline);
  assert_eq!(SourceMapPolicy::for_mode(BuildMode::Production), SourceMapPolicy::External);
  assert_eq!(SourceMapPolicy::Inline.map_filename("a.js"), None);
  assert_eq!(SourceMapPolicy::External.map_filename("a.min.js").as_deref(), Some("a.min.js.map"));
}
