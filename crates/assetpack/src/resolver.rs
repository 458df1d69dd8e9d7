use std::path::PathBuf;

use assetpack_common::{
  BuildMode, DescriptorOptions, DevServerConfig, Loader, NormalizedDescriptorOptions, OutputRule,
  Plugin, ResolvedConfig, SourceMapPolicy,
};
use assetpack_error::BuildResult;

use crate::{presets, utils::normalize_options::normalize_options};

/// Turns a validated descriptor into the configuration for one build.
#[derive(Debug, Clone)]
pub struct Resolver {
  options: NormalizedDescriptorOptions,
}

impl Resolver {
  pub fn new(options: DescriptorOptions) -> BuildResult<Self> {
    Ok(Self { options: normalize_options(options)? })
  }

  pub fn from_normalized(options: NormalizedDescriptorOptions) -> Self {
    Self { options }
  }

  pub fn card_editor(cwd: impl Into<PathBuf>) -> Self {
    Self::from_normalized(presets::card_editor(cwd))
  }

  /// A missing mode means development. Pure apart from the log line: the same mode always yields
  /// an equal config.
  pub fn resolve(&self, mode: Option<BuildMode>) -> ResolvedConfig {
    let mode = mode.unwrap_or_default();
    tracing::info!("running build descriptor with mode: {mode}");

    let options = &self.options;

    let mut plugins = Vec::new();
    if options.rules.iter().any(|rule| rule.uses(&Loader::CssExtract)) {
      plugins.push(Plugin::ExtractCss { filename: options.css_filenames_for(mode).clone() });
    }
    if !options.copy.is_empty() {
      plugins.push(Plugin::CopyAssets { patterns: options.copy.clone() });
    }

    ResolvedConfig {
      mode,
      entry: options.entry.clone(),
      output: OutputRule {
        path: options.dir.clone(),
        filename: options.entry_filenames_for(mode).clone(),
        library: options.library.clone(),
      },
      devtool: SourceMapPolicy::for_mode(mode),
      dev_server: DevServerConfig {
        static_root: options.dir.clone(),
        port: options.dev_server_port,
      },
      resolve: options.resolve.clone(),
      module_rules: options.rules.clone(),
      plugins,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use assetpack_common::{InputItem, LoaderRuleOptions};

  use super::*;

  #[test]
  fn prod_templates_follow_the_descriptor() {
    let resolver = Resolver::new(DescriptorOptions {
      entry: Some(vec![InputItem::named("viewer", "./src/viewer.ts")]),
      minified_entry_filenames: Some("[name].prod.js".to_string()),
      ..Default::default()
    })
    .unwrap();

    let dev = resolver.resolve(Some(BuildMode::Development));
    let prod = resolver.resolve(Some(BuildMode::Production));
    assert_eq!(dev.output.filename_for("viewer"), "viewer.js");
    assert_eq!(prod.output.filename_for("viewer"), "viewer.prod.js");
  }

  #[test]
  fn extraction_plugin_only_when_a_rule_extracts_css() {
    let without = Resolver::new(DescriptorOptions {
      entry: Some(vec!["./src/app.ts".into()]),
      rules: Some(vec![LoaderRuleOptions {
        test: r"\.css$".to_string(),
        loaders: vec![Loader::Style, Loader::Css],
        exclude: None,
      }]),
      ..Default::default()
    })
    .unwrap()
    .resolve(None);
    assert!(without.plugins.is_empty());
    assert_eq!(without.copy_rules().count(), 0);

    let with = Resolver::card_editor("").resolve(Some(BuildMode::Production));
    assert_eq!(with.plugins[0], Plugin::ExtractCss { filename: "[name].min.css".into() });
  }

  #[test]
  fn dev_server_serves_the_output_dir() {
    let config = Resolver::card_editor("/work/hc-editor").resolve(None);
    assert_eq!(config.dev_server.static_root, Path::new("/work/hc-editor/dist"));
    assert_eq!(config.dev_server.static_root, config.output.path);
    assert_eq!(config.dev_server.port, 8080);
  }
}
