use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
  /// Unminified output with inline source maps. Also what every unknown or missing mode becomes.
  #[default]
  Development,
  Production,
}

impl BuildMode {
  /// Permissive parse of the mode an invoking tool passes along. Only the exact string
  /// `production` selects a production build.
  pub fn from_mode_str(mode: &str) -> Self {
    match mode {
      "production" => Self::Production,
      _ => Self::Development,
    }
  }

  /// `None` means the caller didn't pass a mode at all.
  pub fn from_arg(mode: Option<&str>) -> Self {
    mode.map(Self::from_mode_str).unwrap_or_default()
  }

  #[inline]
  pub fn is_dev(self) -> bool {
    matches!(self, Self::Development)
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Development => "development",
      Self::Production => "production",
    }
  }
}

impl Display for BuildMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
