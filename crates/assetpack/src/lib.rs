mod presets;
mod resolver;
mod utils;

use std::path::Path;

pub use crate::{
  presets::card_editor,
  resolver::Resolver,
  utils::{load_options::load_options, normalize_options::normalize_options},
};
pub use assetpack_common::*;
pub use assetpack_error::{BuildError, BuildResult};

/// Resolves the card editor descriptor, with output paths relative to the current directory.
pub fn resolve(mode: Option<BuildMode>) -> ResolvedConfig {
  Resolver::card_editor(Path::new("")).resolve(mode)
}
