use std::path::Path;

use anyhow::Context;
use assetpack_common::DescriptorOptions;
use assetpack_error::BuildResult;
use assetpack_utils::path_ext::PathExt;

/// Reads a JSON descriptor. Relative paths inside it are taken relative to the file itself, so a
/// missing `cwd` becomes the file's directory and a relative one is resolved against it.
pub fn load_options(path: &Path) -> BuildResult<DescriptorOptions> {
  let source = std::fs::read_to_string(path)
    .with_context(|| format!("failed to read descriptor {}", path.display()))?;
  let mut options: DescriptorOptions = serde_json::from_str(&source)
    .with_context(|| format!("failed to parse descriptor {}", path.display()))?;

  let descriptor_dir = path.parent().unwrap_or(Path::new(""));
  options.cwd = Some(match options.cwd.take() {
    Some(cwd) => cwd.resolve_against(descriptor_dir),
    None => descriptor_dir.to_path_buf(),
  });

  tracing::debug!(path = %path.display(), "loaded build descriptor");
  Ok(options)
}
