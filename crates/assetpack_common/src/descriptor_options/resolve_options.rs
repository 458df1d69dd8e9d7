use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolveOptions {
  /// Tried in order for extensionless imports.
  pub extensions: Vec<String>,
}

impl Default for ResolveOptions {
  fn default() -> Self {
    Self { extensions: [".ts", ".tsx", ".js"].map(String::from).to_vec() }
  }
}
