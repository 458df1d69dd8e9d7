pub mod output_rule;
pub mod planned_artifact;
pub mod plugin;

use std::path::Path;

use assetpack_utils::indexmap::FxIndexMap;
use serde::Serialize;

use crate::{
  ArtifactKind, BuildMode, CopyRule, DevServerConfig, LoaderRule, OutputRule, PlannedArtifact,
  Plugin, ResolveOptions, SourceMapPolicy,
};

/// Bundle name to entry source path, in declaration order.
pub type EntryMap = FxIndexMap<String, String>;

/// Everything the bundler engine needs for one build. Built once per invocation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
  pub mode: BuildMode,
  pub entry: EntryMap,
  pub output: OutputRule,
  pub devtool: SourceMapPolicy,
  pub dev_server: DevServerConfig,
  pub resolve: ResolveOptions,
  pub module_rules: Vec<LoaderRule>,
  pub plugins: Vec<Plugin>,
}

impl ResolvedConfig {
  pub fn copy_rules(&self) -> impl Iterator<Item = &CopyRule> {
    self.plugins.iter().flat_map(|plugin| match plugin {
      Plugin::CopyAssets { patterns } => patterns.as_slice(),
      Plugin::ExtractCss { .. } => &[][..],
    })
  }

  /// First rule that applies to `path`, the one the engine would run.
  pub fn rule_for(&self, path: &Path) -> Option<&LoaderRule> {
    self.module_rules.iter().find(|rule| rule.applies_to(path))
  }

  pub fn planned_artifacts(&self) -> Vec<PlannedArtifact> {
    let mut artifacts = Vec::new();
    let css_filenames = self.plugins.iter().find_map(|plugin| match plugin {
      Plugin::ExtractCss { filename } => Some(filename),
      Plugin::CopyAssets { .. } => None,
    });

    for name in self.entry.keys() {
      let filename = self.output.filename_for(name);
      let source_map = self.devtool.map_filename(&filename);
      artifacts.push(PlannedArtifact { filename: filename.into(), kind: ArtifactKind::Chunk });
      if let Some(map) = source_map {
        artifacts.push(PlannedArtifact { filename: map.into(), kind: ArtifactKind::SourceMap });
      }
      if let Some(css_filenames) = css_filenames {
        artifacts.push(PlannedArtifact {
          filename: css_filenames.render(name).into(),
          kind: ArtifactKind::ExtractedCss,
        });
      }
    }

    artifacts.extend(self.copy_rules().map(|rule| PlannedArtifact {
      filename: rule.destination(Path::new("")),
      kind: ArtifactKind::Copied,
    }));

    artifacts
  }
}
