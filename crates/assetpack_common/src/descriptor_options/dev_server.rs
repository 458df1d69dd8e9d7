use std::path::PathBuf;

use serde::Serialize;

/// Interactive preview server settings. Only read by the engine for development builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerConfig {
  /// Directory served as static files; always the output directory.
  pub static_root: PathBuf,
  pub port: u16,
}

impl DevServerConfig {
  pub const DEFAULT_PORT: u16 = 8080;
}
