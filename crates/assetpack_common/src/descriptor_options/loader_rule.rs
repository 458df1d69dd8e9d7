use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};

use crate::Loader;

/// Regex a source path must match for a rule to apply. Compared by source text.
#[derive(Debug, Clone)]
pub struct FilePattern(Regex);

impl FilePattern {
  pub fn new(pattern: &str) -> Result<Self, regex::Error> {
    Regex::new(pattern).map(Self)
  }

  pub fn as_str(&self) -> &str {
    self.0.as_str()
  }

  pub fn is_match(&self, haystack: &str) -> bool {
    self.0.is_match(haystack)
  }
}

impl From<Regex> for FilePattern {
  fn from(value: Regex) -> Self {
    Self(value)
  }
}

impl PartialEq for FilePattern {
  fn eq(&self, other: &Self) -> bool {
    self.as_str() == other.as_str()
  }
}

impl Eq for FilePattern {}

impl Serialize for FilePattern {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str())
  }
}

/// A loader rule as written in a descriptor; `test` and `exclude` are compiled during
/// normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoaderRuleOptions {
  pub test: String,
  #[serde(rename = "use")]
  pub loaders: Vec<Loader>,
  pub exclude: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoaderRule {
  pub test: FilePattern,
  /// Ordered as the engine lists them.
  #[serde(rename = "use")]
  pub loaders: Vec<Loader>,
  /// Sources whose path matches anywhere are skipped.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub exclude: Option<FilePattern>,
}

impl LoaderRule {
  pub fn new(test: impl Into<FilePattern>, loaders: Vec<Loader>) -> Self {
    Self { test: test.into(), loaders, exclude: None }
  }

  #[must_use]
  pub fn with_exclude(mut self, exclude: impl Into<FilePattern>) -> Self {
    self.exclude = Some(exclude.into());
    self
  }

  pub fn applies_to(&self, path: &Path) -> bool {
    self.test.is_match(&path.to_string_lossy()) && !self.is_excluded(path)
  }

  pub fn is_excluded(&self, path: &Path) -> bool {
    self.exclude.as_ref().is_some_and(|exclude| exclude.is_match(&path.to_string_lossy()))
  }

  pub fn uses(&self, loader: &Loader) -> bool {
    self.loaders.contains(loader)
  }
}
